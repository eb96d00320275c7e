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

use tritri::intersection::{
    SegmentIntersection, point_point, point_segment, point_triangle, segment_segment_intersection,
    segment_triangle,
};
use tritri::{Intersects, Point3, Primitive, Segment, Triangle};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment<f64> {
    Segment::new(a.into(), b.into()).unwrap()
}

/// The triangle used throughout: z = 0, legs of length 3.
fn big_triangle() -> Triangle<f64> {
    Triangle::new(p(-1.0, -1.0, 0.0), p(2.0, -1.0, 0.0), p(-1.0, 2.0, 0.0)).unwrap()
}

#[test]
fn test_point_point() {
    assert!(point_point(&p(1.0, 2.0, 3.0), &p(1.0, 2.0, 3.0)));
    assert!(point_point(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 5e-23)));
    assert!(!point_point(&p(1.0, 2.0, 3.0), &p(1.0, 2.0, 3.001)));
}

#[test]
fn test_point_segment() {
    let s = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(point_segment(&p(0.3, 0.0, 0.0), &s));
    assert!(point_segment(&p(0.0, 0.0, 0.0), &s));
    assert!(point_segment(&p(1.0, 0.0, 0.0), &s));
    assert!(point_segment(&p(0.5, 1e-23, 0.0), &s));
    assert!(!point_segment(&p(0.5, 1e-3, 0.0), &s));
    assert!(!point_segment(&p(2.0, 0.0, 0.0), &s));
    assert!(!point_segment(&p(-0.5, 0.0, 0.0), &s));

    let diagonal = seg([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    assert!(point_segment(&p(0.5, 0.5, 0.5), &diagonal));
    assert!(!point_segment(&p(0.5, 0.5, 0.6), &diagonal));
}

#[test]
fn test_point_triangle() {
    let t = big_triangle();
    assert!(point_triangle(&p(0.0, 0.0, 0.0), &t));
    assert!(point_triangle(&p(0.5, -1.0, 0.0), &t));
    assert!(!point_triangle(&p(0.0, 0.0, 1e-3), &t));
    assert!(!point_triangle(&p(3.0, 3.0, 0.0), &t));
    assert!(!point_triangle(&p(-2.0, 0.0, 0.0), &t));
    for v in t.vertices() {
        assert!(point_triangle(v, &t));
    }
}

#[test]
fn test_segments_crossing() {
    let s1 = seg([0.0, 0.0, 0.0], [2.0, 2.0, 0.0]);
    let s2 = seg([0.0, 2.0, 0.0], [2.0, 0.0, 0.0]);
    assert_eq!(
        segment_segment_intersection(&s1, &s2),
        SegmentIntersection::Intersected { s: 0.5, t: 0.5 }
    );
}

#[test]
fn test_segments_crossing_off_the_xy_plane() {
    let s1 = seg([0.0, 0.0, 0.0], [0.0, 2.0, 2.0]);
    let s2 = seg([0.0, 2.0, 0.0], [0.0, 0.0, 2.0]);
    assert!(segment_segment_intersection(&s1, &s2).is_intersecting());
}

#[test]
fn test_skew_segments() {
    let s1 = seg([0.0, 0.0, 0.0], [2.0, 2.0, 0.0]);
    let s2 = seg([0.0, 2.0, 1.0], [2.0, 0.0, 1.0]);
    assert_eq!(
        segment_segment_intersection(&s1, &s2),
        SegmentIntersection::NotIntersected
    );
}

#[test]
fn test_segments_meeting_at_an_endpoint() {
    let s1 = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let s2 = seg([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
    assert!(segment_segment_intersection(&s1, &s2).is_intersecting());
}

#[test]
fn test_segments_crossing_lines_outside_their_bounds() {
    let s1 = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let s2 = seg([2.0, -1.0, 0.0], [2.0, 1.0, 0.0]);
    assert!(!segment_segment_intersection(&s1, &s2).is_intersecting());
}

#[test]
fn test_parallel_segments() {
    let s1 = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let s2 = seg([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
    assert_eq!(
        segment_segment_intersection(&s1, &s2),
        SegmentIntersection::NotIntersected
    );
}

#[test]
fn test_collinear_segments() {
    let s1 = seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
    let overlapping = seg([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
    let inner = seg([0.5, 0.0, 0.0], [1.5, 0.0, 0.0]);
    let apart = seg([3.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
    assert_eq!(
        segment_segment_intersection(&s1, &overlapping),
        SegmentIntersection::Overlapped
    );
    assert_eq!(
        segment_segment_intersection(&s1, &inner),
        SegmentIntersection::Overlapped
    );
    assert_eq!(
        segment_segment_intersection(&s1, &apart),
        SegmentIntersection::NotIntersected
    );
}

#[test]
fn test_segment_piercing_triangle() {
    let t = big_triangle();
    assert!(segment_triangle(&seg([0.0, 0.0, -1.0], [0.0, 0.0, 1.0]), &t));
    assert!(!segment_triangle(&seg([10.0, 0.0, -1.0], [10.0, 0.0, 1.0]), &t));
}

#[test]
fn test_segment_ending_on_triangle() {
    let t = big_triangle();
    assert!(segment_triangle(&seg([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]), &t));
    assert!(!segment_triangle(&seg([0.0, 0.0, 0.5], [0.0, 0.0, 1.0]), &t));
}

#[test]
fn test_segment_in_triangle_plane() {
    let t = big_triangle();
    assert!(!segment_triangle(&seg([5.0, 5.0, 0.0], [6.0, 5.0, 0.0]), &t));
    assert!(segment_triangle(&seg([-5.0, 0.0, 0.0], [5.0, 0.0, 0.0]), &t));
    assert!(segment_triangle(&seg([0.0, 0.0, 0.0], [0.1, 0.0, 0.0]), &t));
}

#[test]
fn test_segment_parallel_to_triangle_plane() {
    let t = big_triangle();
    assert!(!segment_triangle(&seg([0.0, 0.0, 1.0], [0.5, 0.0, 1.0]), &t));
}

#[test]
fn test_mirrored_pairs_agree() {
    let t = big_triangle();
    let inside = p(0.0, 0.0, 0.0);
    let outside = p(0.0, 0.0, 2.0);
    let crossing = seg([0.0, 0.0, -1.0], [0.0, 0.0, 1.0]);
    let missing = seg([10.0, 0.0, -1.0], [10.0, 0.0, 1.0]);

    for q in [inside, outside] {
        assert_eq!(q.intersects(&t), t.intersects(&q));
        assert_eq!(q.intersects(&crossing), crossing.intersects(&q));
    }
    for s in [crossing, missing] {
        assert_eq!(s.intersects(&t), t.intersects(&s));
    }
    assert!(inside.intersects(&crossing));
    assert!(crossing.intersects(&t));
    assert!(!missing.intersects(&t));
}

#[test]
fn test_primitive_dispatch() {
    let t = Primitive::Triangle(big_triangle());
    let on = Primitive::Point(p(0.0, 0.0, 0.0));
    let off = Primitive::Point(p(0.0, 0.0, 3.0));
    let s = Primitive::Segment(seg([0.0, 0.0, -1.0], [0.0, 0.0, 1.0]));

    assert!(on.intersects(&t));
    assert!(t.intersects(&on));
    assert!(!off.intersects(&t));
    assert!(s.intersects(&t));
    assert!(s.intersects(&on));
    assert!(!off.intersects(&s));
    assert!(t.intersects(&t));
}
