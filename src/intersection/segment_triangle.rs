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
    geometry::{segment::Segment, triangle::Triangle},
    intersection::{
        containment::triangle_contains_coplanar_point, point_queries::point_triangle,
        segment_segment::segment_segment_intersection,
    },
    kernel::products::dot_product,
    numeric::scalar::{Scalar, is_nearly_zero},
};

/// Segment against triangle.
///
/// A segment crossing the plane is tested at its piercing point. A segment
/// parallel to the plane either misses it or lies in it; in the latter case
/// it is tested against the triangle's edges and for containment.
pub fn segment_triangle<T: Scalar>(s: &Segment<T>, t: &Triangle<T>) -> bool {
    let plane = t.plane();
    let direction = s.as_vector();
    let denominator = dot_product(&plane.normal, &direction);
    let [from, to] = [s.a(), s.b()].map(|p| plane.signed_distance(p));

    if is_nearly_zero(denominator) || (is_nearly_zero(from) && is_nearly_zero(to)) {
        if !is_nearly_zero(from) {
            return false;
        }
        if t
            .edges()
            .iter()
            .any(|edge| segment_segment_intersection(s, edge).is_intersecting())
        {
            return true;
        }
        return point_triangle(s.a(), t);
    }

    // signed_distance(a + u * direction) = from + u * (to - from); u is in
    // [0, 1] iff the endpoints are not strictly on the same side
    if (from > T::zero() && to > T::zero()) || (from < T::zero() && to < T::zero()) {
        return false;
    }
    let u = from / (from - to);
    // interpolate from the nearer endpoint so a touching endpoint is kept exactly
    let pierced = if u <= T::one() - u {
        *s.a() + direction * u
    } else {
        *s.b() - direction * (T::one() - u)
    };
    triangle_contains_coplanar_point(t, &pierced)
}
