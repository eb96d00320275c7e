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
    error::GeometryError,
    geometry::{line::Line, point::Point3, vector::Vector3},
    kernel::products::{cross_product, determinant, dot_product, reach, triple_product},
    numeric::scalar::{Scalar, is_nearly_zero},
};

/// Plane `dot(normal, x) + d = 0`. The normal is not normalized.
///
/// The defining points are kept as an anchor and two spanning edges so that
/// distances are measured from a point known to lie on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
    anchor: Point3<T>,
    span: [Vector3<T>; 2],
    reach: Vector3<T>,
}

impl<T: Scalar> Plane<T> {
    /// Plane through `a`, `b`, `c` with normal `(b - a) x (c - a)`.
    pub fn from_points(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Result<Self, GeometryError> {
        let span = [*b - *a, *c - *a];
        let normal = cross_product(&span[0], &span[1]);
        if normal.is_zero() {
            return Err(GeometryError::CollinearPoints);
        }
        let d = -dot_product(&normal, &a.radius_vector());
        Ok(Plane {
            normal,
            d,
            anchor: *a,
            span,
            reach: reach([a, b, c]),
        })
    }

    /// Signed distance scaled by the normal's length, evaluated as
    /// `dot(p - a, (b - a) x (c - a))`. Exactly zero for the defining points
    /// and for any point that lies on the plane up to rounding in its
    /// coordinates.
    pub fn signed_distance(&self, to: &Point3<T>) -> T {
        let reach = self.reach.max(&to.radius_vector().abs());
        triple_product(&self.span[0], &self.span[1], &(*to - self.anchor), &reach)
    }
}

/// The line shared by two planes, or `None` when they are parallel.
///
/// A point on the line is found by solving the 2x2 system on the first
/// axis pair (xy, xz, yz) whose minor is non-zero; the remaining coordinate
/// comes from the first plane with a usable normal component on that axis.
pub fn plane_intersection<T: Scalar>(p1: &Plane<T>, p2: &Plane<T>) -> Option<Line<T>> {
    let direction = cross_product(&p1.normal, &p2.normal);
    if direction.is_zero() {
        return None;
    }

    for (coord0, coord1) in [(0, 1), (0, 2), (1, 2)] {
        let not_chosen = 3 - coord0 - coord1;
        let chosen = [
            [p1.normal[coord0], p2.normal[coord0]],
            [p1.normal[coord1], p2.normal[coord1]],
        ];
        let ds = [p1.d, p2.d];
        let chosen_det = determinant(chosen[0], chosen[1]);
        if chosen_det == T::zero() {
            continue;
        }

        let mut origin = Point3::origin();
        origin[coord0] = determinant(ds, chosen[1]) / -chosen_det;
        origin[coord1] = determinant(ds, chosen[0]) / chosen_det;
        if let Some(p) = [p1, p2].into_iter().find(|p| !is_nearly_zero(p.normal[not_chosen])) {
            origin[not_chosen] = -(p.d
                + p.normal[coord0] * origin[coord0]
                + p.normal[coord1] * origin[coord1])
                / p.normal[not_chosen];
        }
        return Some(Line::new(direction, origin));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_plane() -> Plane<f64> {
        Plane::from_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn collinear_points_have_no_plane() {
        let res = Plane::from_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(3.0, 3.0, 3.0),
        );
        assert_eq!(res, Err(GeometryError::CollinearPoints));
    }

    #[test]
    fn signed_distance_follows_normal() {
        let p = xy_plane();
        assert_eq!(p.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(p.signed_distance(&Point3::new(5.0, -3.0, 2.0)), 2.0);
        assert_eq!(p.signed_distance(&Point3::new(5.0, -3.0, -0.5)), -0.5);
    }

    #[test]
    fn defining_points_are_exactly_on_the_plane() {
        let (a, b, c) = (
            Point3::new(0.8588, 0.2122, 0.6085),
            Point3::new(0.8753, 0.2331, -0.3313),
            Point3::new(0.1260, -0.7117, 0.9160),
        );
        let p = Plane::from_points(&a, &b, &c).unwrap();
        for v in [a, b, c] {
            assert_eq!(p.signed_distance(&v), 0.0);
        }
        let centroid = Point3::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0, (a.z + b.z + c.z) / 3.0);
        assert_eq!(p.signed_distance(&centroid), 0.0);
        assert!(p.signed_distance(&(centroid + p.normal)) > 0.0);
    }

    #[test]
    fn parallel_planes_do_not_intersect() {
        let p = xy_plane();
        let q = Plane::from_points(
            &Point3::new(0.0, 0.0, 4.0),
            &Point3::new(0.0, 1.0, 4.0),
            &Point3::new(1.0, 0.0, 4.0),
        )
        .unwrap();
        assert!(plane_intersection(&p, &q).is_none());
    }

    #[test]
    fn axis_aligned_planes_meet_on_their_common_line() {
        // z = 0 and x = 2
        let p = xy_plane();
        let q = Plane::from_points(
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(2.0, 1.0, 0.0),
            &Point3::new(2.0, 0.0, 1.0),
        )
        .unwrap();
        let line = plane_intersection(&p, &q).unwrap();
        assert_eq!(line.direction.x, 0.0);
        assert_eq!(line.direction.z, 0.0);
        assert!(line.direction.y != 0.0);
        for t in [-3.0, 0.0, 7.5] {
            let on = line.point_at(t);
            assert_relative_eq!(p.signed_distance(&on), 0.0, epsilon = 1e-12);
            assert_relative_eq!(q.signed_distance(&on), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn oblique_planes_meet_on_their_common_line() {
        let p = Plane::from_points(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let q = Plane::from_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 2.0, 0.5),
            &Point3::new(-1.0, 0.5, 3.0),
        )
        .unwrap();
        let line = plane_intersection(&p, &q).unwrap();
        for t in [-1.0, 0.0, 2.0] {
            let on = line.point_at(t);
            assert_relative_eq!(p.signed_distance(&on), 0.0, epsilon = 1e-9);
            assert_relative_eq!(q.signed_distance(&on), 0.0, epsilon = 1e-9);
        }
    }
}
