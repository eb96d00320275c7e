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

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::{
    geometry::{
        line::Line,
        plane::{Plane, plane_intersection},
        triangle::Triangle,
    },
    intersection::{point_queries::point_triangle, segment_segment::segment_segment_intersection},
    kernel::products::dot_product,
    numeric::scalar::{Scalar, is_nearly_zero},
};

/// Where a triangle lies relative to another triangle's plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Every vertex strictly on the same side: the plane separates the triangles.
    AllSameSide,
    /// Every vertex on the plane.
    SamePlane,
    /// Vertices on both sides, or some on the plane.
    ///
    /// `lonely` is the vertex alone in its half-space. With one vertex on the
    /// plane and the others on opposite sides, it is the off-plane vertex on
    /// the side the on-plane vertex does not lean to. With two vertices on
    /// one side and the third on the plane, it is the on-plane vertex. With
    /// two vertices on the plane, it is the remaining one.
    Straddling { lonely: usize },
}

/// Classification of one triangle against the plane of the other.
#[derive(Debug, Clone, Copy)]
pub struct PlaneTest<T: Scalar> {
    pub plane: Plane<T>,
    pub signed_distances: [T; 3],
    pub side: PlaneSide,
}

pub fn classify_against_plane<T: Scalar>(t: &Triangle<T>, other: &Triangle<T>) -> PlaneTest<T> {
    let plane = *other.plane();
    let signed_distances = (*t.vertices()).map(|v| plane.signed_distance(&v));

    let mut positive: ArrayVec<usize, 3> = ArrayVec::new();
    let mut negative: ArrayVec<usize, 3> = ArrayVec::new();
    for (i, d) in signed_distances.iter().enumerate() {
        if is_nearly_zero(*d) {
            continue;
        }
        if *d > T::zero() {
            positive.push(i);
        } else {
            negative.push(i);
        }
    }

    let side = if positive.len() == 3 || negative.len() == 3 {
        PlaneSide::AllSameSide
    } else if positive.is_empty() && negative.is_empty() {
        PlaneSide::SamePlane
    } else {
        PlaneSide::Straddling {
            lonely: lonely_vertex(&signed_distances, &positive, &negative),
        }
    };

    PlaneTest {
        plane,
        signed_distances,
        side,
    }
}

fn lonely_vertex<T: Scalar>(distances: &[T; 3], positive: &[usize], negative: &[usize]) -> usize {
    debug_assert!(positive.len() <= 2 && negative.len() <= 2);
    if positive.len() == negative.len() {
        let on_plane = 3 - positive[0] - negative[0];
        if distances[on_plane] > T::zero() {
            negative[0]
        } else {
            positive[0]
        }
    } else if positive.len() + negative.len() != 2 {
        if positive.len() == 1 {
            positive[0]
        } else {
            negative[0]
        }
    } else if positive.len() == 2 {
        3 - positive[0] - positive[1]
    } else {
        3 - negative[0] - negative[1]
    }
}

/// Interval covered by `t` on `line`, from the two points where the edges
/// leaving the lonely vertex cross the other plane.
fn interval_on_line<T: Scalar>(
    t: &Triangle<T>,
    distances: &[T; 3],
    lonely: usize,
    line: &Line<T>,
) -> [T; 2] {
    let projection = |j: usize| dot_product(&line.direction, &(*t.vertex((lonely + j) % 3) - line.origin));
    let lonely_projection = projection(0);

    let mut interval = [1, 2].map(|j| {
        let distance = distances[(lonely + j) % 3];
        let weight = distance / (distance - distances[lonely]);
        lonely_projection * weight + projection(j) * (T::one() - weight)
    });
    if interval[1] < interval[0] {
        interval.swap(0, 1);
    }
    interval
}

fn in_range<T: Scalar>(range: &[T; 2], x: T) -> bool {
    range[0] <= x && x <= range[1]
}

fn coplanar_triangles<T: Scalar>(t1: &Triangle<T>, t2: &Triangle<T>) -> bool {
    for e1 in t1.edges() {
        for e2 in t2.edges() {
            if segment_segment_intersection(&e1, &e2).is_intersecting() {
                return true;
            }
        }
    }
    point_triangle(t1.vertex(0), t2) || point_triangle(t2.vertex(0), t1)
}

/// Separating-plane test (Möller).
///
/// Each triangle is classified against the other's plane; if both straddle,
/// they intersect iff their intervals on the planes' common line overlap.
pub fn triangle_triangle<T: Scalar>(t1: &Triangle<T>, t2: &Triangle<T>) -> bool {
    let mut tests: ArrayVec<PlaneTest<T>, 2> = ArrayVec::new();
    for (t, other) in [(t1, t2), (t2, t1)] {
        let test = classify_against_plane(t, other);
        trace!("triangle vs plane: {:?}", test.side);
        match test.side {
            PlaneSide::AllSameSide => return false,
            PlaneSide::SamePlane => return coplanar_triangles(t1, t2),
            PlaneSide::Straddling { .. } => tests.push(test),
        }
    }

    let Some(line) = plane_intersection(&tests[0].plane, &tests[1].plane) else {
        debug!("straddling triangles with parallel planes: {:?} {:?}", t1, t2);
        return false;
    };

    let mut intervals = [[T::zero(); 2]; 2];
    for (i, (t, test)) in [t1, t2].into_iter().zip(&tests).enumerate() {
        let PlaneSide::Straddling { lonely } = test.side else {
            unreachable!("only straddling tests are kept");
        };
        intervals[i] = interval_on_line(t, &test.signed_distances, lonely, &line);
    }

    let [us1, us2] = &intervals;
    in_range(us1, us2[0]) || in_range(us1, us2[1]) || in_range(us2, us1[0])
}
