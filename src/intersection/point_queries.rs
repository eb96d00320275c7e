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
    geometry::{point::Point3, segment::Segment, triangle::Triangle},
    intersection::containment::triangle_contains_coplanar_point,
    kernel::predicates,
    numeric::scalar::{Scalar, is_nearly_zero},
};

pub fn point_point<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>) -> bool {
    p1.nearly_eq(p2)
}

/// True if `p` coincides with the point of `s` closest to it.
pub fn point_segment<T: Scalar>(p: &Point3<T>, s: &Segment<T>) -> bool {
    p.nearly_eq(&predicates::closest_point(p, s))
}

pub fn point_triangle<T: Scalar>(p: &Point3<T>, t: &Triangle<T>) -> bool {
    is_nearly_zero(t.plane().signed_distance(p)) && triangle_contains_coplanar_point(t, p)
}
