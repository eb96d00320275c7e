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

/// Reasons a validated primitive cannot be built from the given points.
///
/// These are expected outcomes on degenerate input: decomposition and the
/// intersection tests branch on them rather than treating them as faults.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// The three points defining a plane are collinear.
    #[error("the given points are collinear")]
    CollinearPoints,
    /// The endpoints of a segment collapse to a single point.
    #[error("the segment endpoints are too close")]
    CoincidentEndpoints,
    /// Two vertices of a triangle are nearly equal.
    #[error("two triangle vertices are nearly equal")]
    CoincidentVertices,
}
