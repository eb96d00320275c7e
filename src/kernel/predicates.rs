// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    geometry::{point::Point3, segment::Segment},
    kernel::products::dot_product,
    numeric::scalar::{self, Scalar},
};

/// Tolerant point equality.
///
/// Points that cannot span a [`Segment`] are equal outright; otherwise every
/// coordinate must be nearly equal.
pub fn are_nearly_equal<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>) -> bool {
    if Segment::new(*p1, *p2).is_err() {
        return true;
    }

    (0..3).all(|i| scalar::are_nearly_equal(p1[i], p2[i]))
}

/// Coordinate-wise `==`. Only used to tell exact duplicates from near ones.
pub fn are_exactly_equal<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>) -> bool {
    (0..3).all(|i| p1[i] == p2[i])
}

pub fn distance<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>) -> T {
    (*p2 - *p1).length()
}

/// Parameter `t` such that `a + t * (b - a)` is the projection of `p` on line `ab`.
pub fn project<T: Scalar>(p: &Point3<T>, seg: &Segment<T>) -> T {
    let ab = seg.as_vector();
    let ab2 = dot_product(&ab, &ab);
    debug_assert!(ab2 != T::zero());
    let ap = *p - *seg.a();
    dot_product(&ap, &ab) / ab2
}

/// Point of `seg` closest to `p`: the projection clamped to the endpoints.
pub fn closest_point<T: Scalar>(p: &Point3<T>, seg: &Segment<T>) -> Point3<T> {
    let t = project(p, seg);
    if t < T::zero() {
        *seg.a()
    } else if t > T::one() {
        *seg.b()
    } else {
        *seg.a() + seg.as_vector() * t
    }
}
