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

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::geometry::{general_triangle::GeneralTriangle, point::Point3};

/// One expected outcome read from a case file.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// 1-based line holding the `true`/`false` verdict.
    pub line: usize,
    pub first: GeneralTriangle<f64>,
    pub second: GeneralTriangle<f64>,
    pub expected: bool,
}

/// Read a case file.
/// Format:
///   # comment
///   x y z x y z x y z      (first triangle)
///   x y z x y z x y z      (second triangle, optional)
///   true | false
///
/// A line with fewer than nine numbers is completed by repeating its
/// triangle's first point, so `x y z` alone stands for a collapsed triangle.
/// A case with a single triangle is tested against itself.
pub fn read_cases<P: AsRef<Path>>(path: P) -> io::Result<Vec<Case>> {
    let file = File::open(path)?;
    parse_cases(BufReader::new(file))
}

pub fn parse_cases<R: BufRead>(reader: R) -> io::Result<Vec<Case>> {
    let mut cases = Vec::new();
    let mut input: Vec<f64> = Vec::with_capacity(18);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.starts_with('#') {
            continue;
        }

        // "false" is looked up first: a line may mention both
        let expected = if line.contains("false") {
            Some(false)
        } else if line.contains("true") {
            Some(true)
        } else {
            None
        };
        if let Some(expected) = expected {
            cases.push(finish_case(&mut input, line_number, expected)?);
            continue;
        }

        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                invalid(format!("line {}: bad number '{}'", line_number, token))
            })?;
            input.push(value);
        }
        if input.is_empty() {
            continue;
        }
        if input.len() % 3 != 0 || input.len() > 18 {
            return Err(invalid(format!(
                "line {}: {} coordinates do not make whole points of two triangles",
                line_number,
                input.len()
            )));
        }

        let start = if input.len() <= 9 { 0 } else { 9 };
        pad_slot(&mut input, start);
    }

    if !input.is_empty() {
        return Err(invalid(format!(
            "{} trailing coordinates without a verdict",
            input.len()
        )));
    }

    Ok(cases)
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Repeat the first point of the slot at `start` until the slot is full.
fn pad_slot(input: &mut Vec<f64>, start: usize) {
    while input.len() < start + 9 {
        input.extend_from_within(start..start + 3);
    }
}

fn finish_case(input: &mut Vec<f64>, line: usize, expected: bool) -> io::Result<Case> {
    match input.len() {
        9 => input.extend_from_within(0..9),
        18 => {}
        n => {
            return Err(invalid(format!(
                "line {}: expected 9 or 18 coordinates before the verdict, got {}",
                line, n
            )));
        }
    }

    let point = |i: usize| Point3::new(input[i], input[i + 1], input[i + 2]);
    let case = Case {
        line,
        first: GeneralTriangle::new(point(0), point(3), point(6)),
        second: GeneralTriangle::new(point(9), point(12), point(15)),
        expected,
    };
    input.clear();
    Ok(case)
}
