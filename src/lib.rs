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

//! Tolerance-aware intersection tests for triangles in 3D, degenerate
//! inputs included.
//!
//! ```
//! use tritri::{Point3, triangles_intersect};
//!
//! let a = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let b = a.map(|p| Point3::new(p.x + 100.0, p.y + 100.0, p.z + 100.0));
//! assert!(triangles_intersect(a, a));
//! assert!(!triangles_intersect(a, b));
//! ```

pub mod error;
pub mod geometry;
pub mod intersection;
pub mod io;
pub mod kernel;
pub mod numeric;

pub use error::GeometryError;
pub use geometry::{GeneralTriangle, Plane, Point3, Primitive, Segment, Triangle, Vector3};
pub use intersection::{Intersects, are_intersecting, triangles_intersect};
pub use numeric::Scalar;
