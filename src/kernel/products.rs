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

//! Products with built-in cancellation guards.
//!
//! Each routine compares the partial terms it is about to combine and
//! returns an exact zero when they cancel within tolerance. Callers test
//! the results against exact zero (parallelism, collinearity, degenerate
//! projections), so the snapping has to happen here.

use crate::{
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::{Scalar, are_nearly_equal, tolerance},
};

pub fn dot_product<T: Scalar>(v1: &Vector3<T>, v2: &Vector3<T>) -> T {
    let x = v1.x * v2.x;
    let y = v1.y * v2.y;
    let z = v1.z * v2.z;

    if are_nearly_equal(-x, y + z) || are_nearly_equal(-y, z + x) || are_nearly_equal(-z, x + y) {
        return T::zero();
    }

    x + y + z
}

pub fn cross_product<T: Scalar>(v1: &Vector3<T>, v2: &Vector3<T>) -> Vector3<T> {
    let yz = v1.y * v2.z;
    let zy = v1.z * v2.y;
    let zx = v1.z * v2.x;
    let xz = v1.x * v2.z;
    let xy = v1.x * v2.y;
    let yx = v1.y * v2.x;

    if are_nearly_equal(yz, zy) && are_nearly_equal(zx, xz) && are_nearly_equal(xy, yx) {
        return Vector3::zero();
    }

    Vector3::new(yz - zy, zx - xz, xy - yx)
}

/// Componentwise largest absolute coordinate of `points`.
pub fn reach<'a, T: Scalar>(points: impl IntoIterator<Item = &'a Point3<T>>) -> Vector3<T> {
    points
        .into_iter()
        .fold(Vector3::zero(), |acc, p| acc.max(&p.radius_vector().abs()))
}

/// `sum_i w[i] * (u[j] * v[k] + u[k] * v[j])` over cyclic `(i, j, k)`, for
/// non-negative inputs.
fn volume_bound<T: Scalar>(w: &Vector3<T>, u: &Vector3<T>, v: &Vector3<T>) -> T {
    (0..3).fold(T::zero(), |acc, i| {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        acc + w[i] * (u[j] * v[k] + u[k] * v[j])
    })
}

/// `dot(w, cross(u, v))`.
///
/// `u`, `v` and `w` are differences of points whose coordinates are bounded
/// componentwise by `reach`. The result snaps to zero when it is within what
/// rounding in those coordinates can produce, to first order in each factor.
pub fn triple_product<T: Scalar>(
    u: &Vector3<T>,
    v: &Vector3<T>,
    w: &Vector3<T>,
    reach: &Vector3<T>,
) -> T {
    let volume = (0..3).fold(T::zero(), |acc, i| {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        acc + w[i] * (u[j] * v[k] - u[k] * v[j])
    });

    let (u_abs, v_abs, w_abs) = (u.abs(), v.abs(), w.abs());
    let magnitude = volume_bound(reach, &u_abs, &v_abs)
        + volume_bound(&w_abs, reach, &v_abs)
        + volume_bound(&w_abs, &u_abs, reach);
    if volume.abs() < tolerance(magnitude) {
        return T::zero();
    }
    volume
}

/// `a[0] * b[1] - a[1] * b[0]`, snapped to zero when the two products agree.
pub fn determinant<T: Scalar>(a: [T; 2], b: [T; 2]) -> T {
    let l = a[0] * b[1];
    let r = a[1] * b[0];
    if are_nearly_equal(l, r) { T::zero() } else { l - r }
}
