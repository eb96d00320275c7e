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
use log::trace;

use crate::{
    error::GeometryError,
    geometry::{point::Point3, segment::Segment, triangle::Triangle},
    numeric::scalar::Scalar,
};

/// One non-degenerate piece of a [`GeneralTriangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<T: Scalar> {
    Point(Point3<T>),
    Segment(Segment<T>),
    Triangle(Triangle<T>),
}

/// Between one and three primitives covering a possibly degenerate triangle.
pub type Decomposed<T> = ArrayVec<Primitive<T>, 3>;

/// Three arbitrary points. Nothing is assumed about them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralTriangle<T: Scalar> {
    pub vertices: [Point3<T>; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Equality {
    No,
    Almost,
    Exactly,
}

fn compare<T: Scalar>(a: &Point3<T>, b: &Point3<T>) -> Equality {
    if a.exactly_eq(b) {
        Equality::Exactly
    } else if a.nearly_eq(b) {
        Equality::Almost
    } else {
        Equality::No
    }
}

fn decomposed<T: Scalar, const M: usize>(items: [Primitive<T>; M]) -> Decomposed<T> {
    items.into_iter().collect()
}

impl<T: Scalar> GeneralTriangle<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Segment between vertices `which + 1` and `which + 2`.
    pub fn edge(&self, which: usize) -> Result<Segment<T>, GeometryError> {
        Segment::new(
            self.vertices[(which + 1) % 3],
            self.vertices[(which + 2) % 3],
        )
    }

    fn distinct_edge(&self, which: usize) -> Segment<T> {
        Segment::new_unchecked(
            self.vertices[(which + 1) % 3],
            self.vertices[(which + 2) % 3],
        )
    }

    /// Splits the input into points, segments and triangles that together
    /// cover it, possibly overlapping. Recomputed on every call.
    pub fn as_non_degenerate(&self) -> Decomposed<T> {
        let v = &self.vertices;
        // equal[i] relates v[i] and v[i + 1]
        let mut equal = [Equality::No; 3];
        let mut equalities = 0;
        let mut unique: ArrayVec<Point3<T>, 3> = ArrayVec::new();

        for (i1, i2) in [(2, 0), (0, 1), (1, 2)] {
            equal[i1] = compare(&v[i1], &v[i2]);
            if equal[i1] != Equality::No {
                equalities += 1;
            }
            if equal[i1] != Equality::Exactly {
                unique.push(v[i2]);
            }
        }

        if equalities >= 2 {
            trace!("triangle collapses to points: {:?}", equal);
            if unique.is_empty() {
                return decomposed([Primitive::Point(v[0])]);
            }
            return unique.into_iter().map(Primitive::Point).collect();
        }

        if equalities == 0 {
            return match Triangle::new(v[0], v[1], v[2]) {
                Ok(t) => decomposed([Primitive::Triangle(t)]),
                Err(err) => {
                    debug_assert_eq!(err, GeometryError::CollinearPoints);
                    let middle = self.longest_edge();
                    trace!("collinear triangle, longest edge {}", middle);
                    decomposed([
                        Primitive::Segment(self.distinct_edge(middle)),
                        Primitive::Point(v[middle]),
                    ])
                }
            };
        }

        for i in 0..3 {
            match equal[i] {
                Equality::Exactly => {
                    trace!("thin triangle, exact duplicate at {}", i);
                    return decomposed([Primitive::Segment(self.distinct_edge(i))]);
                }
                Equality::Almost => {
                    trace!("thin triangle, near duplicate at {}", i);
                    return decomposed([
                        Primitive::Segment(self.distinct_edge(i)),
                        Primitive::Segment(self.distinct_edge((i + 1) % 3)),
                    ]);
                }
                Equality::No => {}
            }
        }

        unreachable!("exactly one pair of vertices is equal here")
    }

    /// Index of the vertex opposite the longest side (first one on ties).
    fn longest_edge(&self) -> usize {
        let side = |i: usize| {
            self.vertices[(i + 1) % 3].distance_to(&self.vertices[(i + 2) % 3])
        };
        let mut longest = 0;
        for i in 1..3 {
            if side(i) > side(longest) {
                longest = i;
            }
        }
        longest
    }
}

impl<T: Scalar> From<[Point3<T>; 3]> for GeneralTriangle<T> {
    fn from(vertices: [Point3<T>; 3]) -> Self {
        Self { vertices }
    }
}
