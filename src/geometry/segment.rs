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
    geometry::{point::Point3, vector::Vector3},
    kernel::products::dot_product,
    numeric::scalar::Scalar,
};

/// Non-degenerate segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar> {
    endpoints: [Point3<T>; 2],
}

impl<T: Scalar> Segment<T> {
    /// Fails iff the guarded squared length is exactly zero. Very short
    /// segments that do not collapse are accepted.
    pub fn new(a: Point3<T>, b: Point3<T>) -> Result<Self, GeometryError> {
        let ab = b - a;
        if dot_product(&ab, &ab) == T::zero() {
            return Err(GeometryError::CoincidentEndpoints);
        }
        Ok(Self { endpoints: [a, b] })
    }

    /// For endpoints already known to be apart (e.g. two vertices of a
    /// validated triangle).
    pub(crate) fn new_unchecked(a: Point3<T>, b: Point3<T>) -> Self {
        debug_assert!(Self::new(a, b).is_ok(), "degenerate segment {:?} {:?}", a, b);
        Self { endpoints: [a, b] }
    }

    pub fn endpoint(&self, which: usize) -> &Point3<T> {
        &self.endpoints[which]
    }

    pub fn a(&self) -> &Point3<T> {
        &self.endpoints[0]
    }

    pub fn b(&self) -> &Point3<T> {
        &self.endpoints[1]
    }

    /// `b - a`.
    pub fn as_vector(&self) -> Vector3<T> {
        self.endpoints[1] - self.endpoints[0]
    }

    pub fn reversed(&self) -> Self {
        Self {
            endpoints: [self.endpoints[1], self.endpoints[0]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_identical_endpoints() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Segment::new(p, p), Err(GeometryError::CoincidentEndpoints));
    }

    #[test]
    fn rejects_endpoints_closer_than_the_guard() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1e-12, 0.0, 0.0);
        assert!(Segment::new(a, b).is_err());
    }

    #[test]
    fn keeps_short_but_measurable_segments() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1e-9, 0.0, 0.0);
        let s = Segment::new(a, b).unwrap();
        assert_eq!(s.as_vector(), Vector3::new(1e-9, 0.0, 0.0));
        assert_eq!(s.reversed().endpoint(0), &b);
    }
}
