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

//! Boolean intersection tests between points, segments and triangles.
//!
//! Every ordered pair of primitives has an [`Intersects`] impl. For mixed
//! pairs the mirrored impl delegates to the other one.

mod containment;
pub mod point_queries;
pub mod segment_segment;
pub mod segment_triangle;
pub mod tri_tri;

pub use point_queries::{point_point, point_segment, point_triangle};
pub use segment_segment::{SegmentIntersection, segment_segment_intersection};
pub use segment_triangle::segment_triangle;
pub use tri_tri::{PlaneSide, PlaneTest, classify_against_plane, triangle_triangle};

use crate::{
    geometry::{
        general_triangle::{GeneralTriangle, Primitive},
        point::Point3,
        segment::Segment,
        triangle::Triangle,
    },
    numeric::scalar::{Scalar, are_nearly_equal},
};

/// `0 <= x <= 1` widened by `slack` on both ends, also accepting values
/// within tolerance of 1.
pub(crate) fn in_unit_interval<T: Scalar>(x: T, slack: T) -> bool {
    (x >= -slack && x <= T::one() + slack) || are_nearly_equal(x, T::one())
}

pub trait Intersects<Rhs: ?Sized> {
    fn intersects(&self, other: &Rhs) -> bool;
}

impl<T: Scalar> Intersects<Point3<T>> for Point3<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        point_point(self, other)
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Point3<T> {
    fn intersects(&self, other: &Segment<T>) -> bool {
        point_segment(self, other)
    }
}

impl<T: Scalar> Intersects<Triangle<T>> for Point3<T> {
    fn intersects(&self, other: &Triangle<T>) -> bool {
        point_triangle(self, other)
    }
}

impl<T: Scalar> Intersects<Point3<T>> for Segment<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        other.intersects(self)
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Segment<T> {
    fn intersects(&self, other: &Segment<T>) -> bool {
        segment_segment_intersection(self, other).is_intersecting()
    }
}

impl<T: Scalar> Intersects<Triangle<T>> for Segment<T> {
    fn intersects(&self, other: &Triangle<T>) -> bool {
        segment_triangle(self, other)
    }
}

impl<T: Scalar> Intersects<Point3<T>> for Triangle<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        other.intersects(self)
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Triangle<T> {
    fn intersects(&self, other: &Segment<T>) -> bool {
        other.intersects(self)
    }
}

impl<T: Scalar> Intersects<Triangle<T>> for Triangle<T> {
    fn intersects(&self, other: &Triangle<T>) -> bool {
        triangle_triangle(self, other)
    }
}

impl<T: Scalar> Intersects<Primitive<T>> for Primitive<T> {
    fn intersects(&self, other: &Primitive<T>) -> bool {
        match (self, other) {
            (Primitive::Point(a), Primitive::Point(b)) => a.intersects(b),
            (Primitive::Point(a), Primitive::Segment(b)) => a.intersects(b),
            (Primitive::Point(a), Primitive::Triangle(b)) => a.intersects(b),
            (Primitive::Segment(a), Primitive::Point(b)) => a.intersects(b),
            (Primitive::Segment(a), Primitive::Segment(b)) => a.intersects(b),
            (Primitive::Segment(a), Primitive::Triangle(b)) => a.intersects(b),
            (Primitive::Triangle(a), Primitive::Point(b)) => a.intersects(b),
            (Primitive::Triangle(a), Primitive::Segment(b)) => a.intersects(b),
            (Primitive::Triangle(a), Primitive::Triangle(b)) => a.intersects(b),
        }
    }
}

impl<T: Scalar> Intersects<GeneralTriangle<T>> for GeneralTriangle<T> {
    fn intersects(&self, other: &GeneralTriangle<T>) -> bool {
        are_intersecting(self, other)
    }
}

/// True if the two triangles share at least one point. Any degeneracy is
/// accepted: both inputs are decomposed and every pair of pieces is tested.
pub fn are_intersecting<T: Scalar>(gt1: &GeneralTriangle<T>, gt2: &GeneralTriangle<T>) -> bool {
    let first = gt1.as_non_degenerate();
    let second = gt2.as_non_degenerate();
    first
        .iter()
        .any(|p1| second.iter().any(|p2| p1.intersects(p2)))
}

/// [`are_intersecting`] on raw vertices.
pub fn triangles_intersect<T: Scalar>(first: [Point3<T>; 3], second: [Point3<T>; 3]) -> bool {
    are_intersecting(&GeneralTriangle::from(first), &GeneralTriangle::from(second))
}
