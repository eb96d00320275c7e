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

use tritri::intersection::{PlaneSide, classify_against_plane, triangle_triangle};
use tritri::{GeneralTriangle, Point3, Triangle, are_intersecting, triangles_intersect};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle<f64> {
    Triangle::new(a.into(), b.into(), c.into()).unwrap()
}

fn translated(t: &Triangle<f64>, dx: f64, dy: f64, dz: f64) -> Triangle<f64> {
    let [a, b, c] = (*t.vertices()).map(|v| Point3::new(v.x + dx, v.y + dy, v.z + dz));
    Triangle::new(a, b, c).unwrap()
}

fn unit() -> Triangle<f64> {
    tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

fn assert_both_ways(t1: &Triangle<f64>, t2: &Triangle<f64>, expected: bool) {
    assert_eq!(triangle_triangle(t1, t2), expected, "{:?} vs {:?}", t1, t2);
    assert_eq!(triangle_triangle(t2, t1), expected, "{:?} vs {:?}", t2, t1);
}

#[test]
fn test_well_separated_triangles() {
    let t1 = unit();
    assert_both_ways(&t1, &translated(&t1, 100.0, 100.0, 100.0), false);
}

#[test]
fn test_identical_triangles() {
    let t1 = unit();
    assert_both_ways(&t1, &t1, true);
}

#[test]
fn test_parallel_planes() {
    let t1 = unit();
    assert_both_ways(&t1, &translated(&t1, 0.0, 0.0, 1.0), false);
}

#[test]
fn test_single_shared_vertex() {
    let t1 = unit();
    let t2 = tri([0.0, 0.0, 0.0], [-1.0, 0.0, 1.0], [0.0, -1.0, 1.0]);
    assert_both_ways(&t1, &t2, true);
    assert_both_ways(&t1, &translated(&t2, 0.0, 0.0, 0.1), false);
}

#[test]
fn test_crossing_triangles() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let t2 = tri([0.5, 0.5, -1.0], [0.5, 0.5, 1.0], [-1.0, -1.0, 0.0]);
    assert_both_ways(&t1, &t2, true);
}

#[test]
fn test_straddling_triangles_with_disjoint_intervals() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let t2 = tri([10.5, 10.5, -1.0], [10.5, 10.5, 1.0], [9.0, 9.0, 0.0]);
    assert_both_ways(&t1, &t2, false);
}

#[test]
fn test_piercing_through_the_interior() {
    let t1 = tri([-1.0, -1.0, 0.0], [2.0, -1.0, 0.0], [-1.0, 2.0, 0.0]);
    let t2 = tri([0.0, 0.0, -1.0], [0.0, 0.0, 1.0], [0.0, 5.0, 1.0]);
    assert_both_ways(&t1, &t2, true);
}

#[test]
fn test_coplanar_overlapping() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let t2 = tri([1.0, -1.0, 0.0], [3.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
    assert_both_ways(&t1, &t2, true);
}

#[test]
fn test_coplanar_nested() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let t2 = tri([0.25, 0.25, 0.0], [0.5, 0.25, 0.0], [0.25, 0.5, 0.0]);
    assert_both_ways(&t1, &t2, true);
}

#[test]
fn test_coplanar_disjoint() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    assert_both_ways(&t1, &translated(&t1, 5.0, 5.0, 0.0), false);
}

#[test]
fn test_classification() {
    let t1 = unit();
    let above = translated(&t1, 0.0, 0.0, 1.0);
    let vertical = tri([0.2, 0.2, -1.0], [0.2, 0.2, 1.0], [-1.0, 0.5, 0.0]);

    assert_eq!(classify_against_plane(&above, &t1).side, PlaneSide::AllSameSide);
    assert_eq!(classify_against_plane(&t1, &t1).side, PlaneSide::SamePlane);

    let test = classify_against_plane(&vertical, &t1);
    assert_eq!(test.signed_distances, [-1.0, 1.0, 0.0]);
    assert_eq!(test.side, PlaneSide::Straddling { lonely: 1 });

    let leaning = tri([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]);
    assert_eq!(
        classify_against_plane(&leaning, &t1).side,
        PlaneSide::Straddling { lonely: 0 }
    );
}

#[test]
fn test_degenerate_inputs() {
    let t = GeneralTriangle::new(p(-1.0, -1.0, 0.0), p(2.0, -1.0, 0.0), p(-1.0, 2.0, 0.0));
    let needle = GeneralTriangle::new(p(0.0, 0.0, -1.0), p(0.0, 0.0, 1.0), p(0.0, 0.0, 1.0));
    let far_needle = GeneralTriangle::new(p(10.0, 0.0, -1.0), p(10.0, 0.0, 1.0), p(10.0, 0.0, 1.0));
    let dot = GeneralTriangle::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
    let flat = GeneralTriangle::new(p(-5.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(0.0, 0.0, 0.0));

    assert!(are_intersecting(&t, &needle));
    assert!(are_intersecting(&needle, &t));
    assert!(!are_intersecting(&t, &far_needle));
    assert!(are_intersecting(&dot, &t));
    assert!(are_intersecting(&flat, &t));
    assert!(are_intersecting(&dot, &flat));
    assert!(are_intersecting(&dot, &needle));
    assert!(!are_intersecting(&dot, &far_needle));
}

#[test]
fn test_raw_vertices() {
    let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
    let b = a.map(|v| Point3::new(v.x + 100.0, v.y + 100.0, v.z + 100.0));
    assert!(triangles_intersect(a, a));
    assert!(!triangles_intersect(a, b));
}
