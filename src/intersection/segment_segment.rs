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
    geometry::segment::Segment,
    intersection::{in_unit_interval, point_queries::point_segment},
    kernel::products::{determinant, reach, triple_product},
    numeric::scalar::{Scalar, is_nearly_zero},
};

/// Outcome of [`segment_segment_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    /// The segments cross at one point. `s` parametrizes the second segment
    /// as `s * c + (1 - s) * d`, `t` the first as `t * a + (1 - t) * b`.
    /// Both are reported within `[0, 1]`.
    Intersected { s: T, t: T },
    /// Parallel segments sharing at least one point.
    Overlapped,
    NotIntersected,
}

impl<T: Scalar> SegmentIntersection<T> {
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, SegmentIntersection::NotIntersected)
    }
}

/// Solves `t * (a - b) + s * (d - c) = d - b` for segments `[a, b]` and `[c, d]`.
///
/// The 2x2 system is taken on the coordinate plane (xy, xz, yz) where the two
/// directions span the largest area; the dropped coordinate then has to
/// agree, otherwise the supporting lines are skew.
pub fn segment_segment_intersection<T: Scalar>(
    s1: &Segment<T>,
    s2: &Segment<T>,
) -> SegmentIntersection<T> {
    solve(s1, s2).0
}

/// [`segment_segment_intersection`] along with how far rounding in the
/// endpoints can have moved the reported `s`. The bound is zero unless the
/// segments cross.
pub(crate) fn solve<T: Scalar>(s1: &Segment<T>, s2: &Segment<T>) -> (SegmentIntersection<T>, T) {
    let (a, b) = (s1.a(), s1.b());
    let (c, d) = (s2.a(), s2.b());

    let u = *a - *b;
    let v = *d - *c;
    let w = *d - *b;
    let r = reach([a, b, c, d]);

    // parallel directions give zero everywhere and end up on yz
    let det_on = |coord0: usize, coord1: usize| {
        determinant([v[coord0], v[coord1]], [u[coord0], u[coord1]])
    };
    let (coord0, coord1, vu_det) = [(0, 1), (0, 2)]
        .into_iter()
        .fold((1, 2, det_on(1, 2)), |best, (coord0, coord1)| {
            let det = det_on(coord0, coord1);
            if det.abs() > best.2.abs() {
                (coord0, coord1, det)
            } else {
                best
            }
        });

    let uu = [u[coord0], u[coord1]];
    let vv = [v[coord0], v[coord1]];
    let ww = [w[coord0], w[coord1]];
    let wu_det = determinant(ww, uu);
    let wv_det = determinant(ww, vv);

    if is_nearly_zero(vu_det) {
        if !is_nearly_zero(wu_det) || !is_nearly_zero(wv_det) {
            return (SegmentIntersection::NotIntersected, T::zero());
        }
        if point_segment(a, s2) || point_segment(b, s2) || point_segment(c, s1) {
            return (SegmentIntersection::Overlapped, T::zero());
        }
        return (SegmentIntersection::NotIntersected, T::zero());
    }

    // first-order effect on det(x, y) of endpoint coordinates bounded by r
    let spread = |x: [T; 2], y: [T; 2]| {
        r[coord0] * (x[1].abs() + y[1].abs()) + r[coord1] * (x[0].abs() + y[0].abs())
    };
    let s = wu_det / vu_det;
    let s_slack = T::RELATIVE_EPSILON * (spread(ww, uu) + s.abs() * spread(vv, uu)) / vu_det.abs();
    if !in_unit_interval(s, s_slack) {
        return (SegmentIntersection::NotIntersected, T::zero());
    }
    let t = -wv_det / vu_det;
    let t_slack = T::RELATIVE_EPSILON * (spread(ww, vv) + t.abs() * spread(vv, uu)) / vu_det.abs();
    // the dropped coordinate agrees iff the two lines share a plane
    if in_unit_interval(t, t_slack) && triple_product(&u, &v, &w, &r) == T::zero() {
        let unit = |x: T| x.max(T::zero()).min(T::one());
        return (
            SegmentIntersection::Intersected {
                s: unit(s),
                t: unit(t),
            },
            s_slack,
        );
    }
    (SegmentIntersection::NotIntersected, T::zero())
}
