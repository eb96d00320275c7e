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

use std::ops::{Add, Index, IndexMut, Sub};

use crate::{
    geometry::vector::Vector3,
    kernel::predicates,
    numeric::scalar::Scalar,
};

/// Position in 3D space.
///
/// `PartialEq` is bitwise-exact coordinate comparison; tolerant comparison
/// goes through [`Point3::nearly_eq`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector from the origin to this point.
    pub fn radius_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn nearly_eq(&self, other: &Self) -> bool {
        predicates::are_nearly_equal(self, other)
    }

    pub fn exactly_eq(&self, other: &Self) -> bool {
        predicates::are_exactly_equal(self, other)
    }

    pub fn distance_to(&self, other: &Self) -> T {
        predicates::distance(self, other)
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of range: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Point3<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Point3 index out of range: {}", i),
        }
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Point3<T>) -> Self::Output {
        self.radius_vector() - rhs.radius_vector()
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn add(self, v: Vector3<T>) -> Self::Output {
        (self.radius_vector() + v).as_point()
    }
}

impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;
    fn sub(self, v: Vector3<T>) -> Self::Output {
        self + -v
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(c: [T; 3]) -> Self {
        Point3::new(c[0], c[1], c[2])
    }
}
