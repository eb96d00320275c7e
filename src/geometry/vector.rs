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

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::{
    geometry::point::Point3,
    numeric::scalar::{Scalar, is_nearly_zero},
};

/// Displacement in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn as_point(&self) -> Point3<T> {
        Point3::new(self.x, self.y, self.z)
    }

    /// True if every component is nearly zero.
    pub fn is_zero(&self) -> bool {
        is_nearly_zero(self.x) && is_nearly_zero(self.y) && is_nearly_zero(self.z)
    }

    /// Euclidean length, computed without intermediate overflow.
    pub fn length(&self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    fn mul(self, s: T) -> Self::Output {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(c: [T; 3]) -> Self {
        Vector3::new(c[0], c[1], c[2])
    }
}
