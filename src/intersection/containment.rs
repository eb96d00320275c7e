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

use log::debug;

use crate::{
    geometry::{point::Point3, segment::Segment, triangle::Triangle},
    intersection::segment_segment::{SegmentIntersection, solve},
    numeric::scalar::{Scalar, are_nearly_equal},
};

/// Point-in-triangle test for a point already known to lie in the
/// triangle's plane.
///
/// The two edges leaving vertex 0 form the basis. Each basis edge is
/// intersected with a segment leaving `p` backwards along the other basis
/// edge; the solved parameters are then the barycentric coordinates of `p`.
/// The final sum is allowed the rounding bounds the solver reports for them.
pub(crate) fn triangle_contains_coplanar_point<T: Scalar>(t: &Triangle<T>, p: &Point3<T>) -> bool {
    let basis = [t.edge(2), t.edge(1).reversed()];
    let mut params = [T::zero(); 2];
    let mut slack = T::zero();

    for i in 0..2 {
        let other = basis[1 - i].as_vector();
        let backward = match Segment::new(*p, *p - other) {
            Ok(backward) => backward,
            Err(err) => {
                debug!("backward containment segment from {:?} collapsed: {}", p, err);
                return false;
            }
        };
        match solve(&basis[i], &backward) {
            (SegmentIntersection::NotIntersected, _) => return false,
            (SegmentIntersection::Overlapped, _) => return true,
            (SegmentIntersection::Intersected { s, .. }, s_slack) => {
                params[i] = s;
                slack = slack + s_slack;
            }
        }
    }

    let sum = (T::one() - params[0]) + (T::one() - params[1]);
    sum <= T::one() + slack || are_nearly_equal(sum, T::one())
}
