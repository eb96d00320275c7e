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

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Real number type the geometry is computed in.
///
/// Tolerances are a property of the number type rather than of a call site:
/// every comparison in the crate goes through [`are_nearly_equal`] with the
/// constants declared here.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Differences below this are always considered equal, whatever the magnitude.
    const ABSOLUTE_EPSILON: Self;
    /// Differences below `RELATIVE_EPSILON * (|a| + |b|)` are considered equal.
    const RELATIVE_EPSILON: Self;
}

impl Scalar for f64 {
    const ABSOLUTE_EPSILON: f64 = 1e-22;
    const RELATIVE_EPSILON: f64 = f64::EPSILON * 128.0;
}

impl Scalar for f32 {
    const ABSOLUTE_EPSILON: f32 = 1e-22;
    const RELATIVE_EPSILON: f32 = f32::EPSILON * 128.0;
}

/// Combined absolute/relative approximate equality.
///
/// Reflexive and symmetric. Not transitive near the tolerance boundary.
#[inline]
pub fn are_nearly_equal<T: Scalar>(a: T, b: T) -> bool {
    (a - b).abs() < tolerance(a.abs() + b.abs())
}

/// Largest difference still treated as zero for a value built from terms
/// whose absolute values sum to `magnitude`.
#[inline]
pub fn tolerance<T: Scalar>(magnitude: T) -> T {
    T::ABSOLUTE_EPSILON.max(T::RELATIVE_EPSILON * magnitude.min(T::max_value()))
}

#[inline]
pub fn is_nearly_zero<T: Scalar>(a: T) -> bool {
    are_nearly_equal(a, T::zero())
}
