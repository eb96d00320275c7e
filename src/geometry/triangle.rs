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
    geometry::{plane::Plane, point::Point3, segment::Segment},
    numeric::scalar::Scalar,
};

/// Non-degenerate triangle: pairwise distinct vertices spanning a plane.
///
/// The supporting plane is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar> {
    vertices: [Point3<T>; 3],
    plane: Plane<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Result<Self, GeometryError> {
        if a.nearly_eq(&b) || b.nearly_eq(&c) || c.nearly_eq(&a) {
            return Err(GeometryError::CoincidentVertices);
        }
        let plane = Plane::from_points(&a, &b, &c)?;
        Ok(Self {
            vertices: [a, b, c],
            plane,
        })
    }

    pub fn vertex(&self, which: usize) -> &Point3<T> {
        &self.vertices[which]
    }

    pub fn vertices(&self) -> &[Point3<T>; 3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    /// The side opposite to `vertex(which)`.
    pub fn edge(&self, which: usize) -> Segment<T> {
        Segment::new_unchecked(
            self.vertices[(which + 1) % 3],
            self.vertices[(which + 2) % 3],
        )
    }

    pub fn edges(&self) -> [Segment<T>; 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }
}
