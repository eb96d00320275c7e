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

//! Runs case files through the triangle intersection test.
//!
//! Usage: `tritri-check [--test-implementations] FILE...`

use anyhow::{Context, Result, bail};
use log::info;
use tritri::{intersection::are_intersecting, io::read_cases};

fn main() -> Result<()> {
    env_logger::init();

    // kept for compatibility with older invocations; it has no effect
    let files: Vec<String> = std::env::args()
        .skip(1)
        .filter(|arg| arg != "--test-implementations")
        .collect();

    if files.is_empty() {
        bail!("a test file must be provided, e.g. `tritri-check ./tests.txt`");
    }

    for file in &files {
        let cases = read_cases(file).with_context(|| format!("failed to read {}", file))?;
        info!("{}: {} cases", file, cases.len());

        let mut failed = 0;
        for case in &cases {
            let got = are_intersecting(&case.first, &case.second);
            if got != case.expected {
                println!("line {}: expected {}, got {}", case.line, case.expected, got);
                failed += 1;
            }
        }
        println!("Tests done {}/{} failed", cases.len(), failed);
    }

    Ok(())
}
