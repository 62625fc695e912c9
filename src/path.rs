// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::point::Point;
use crate::transform::Transform;

/// One verb in a path's command stream, together with the points it
/// introduces. `Move` starts a new contour at `p0`; every other verb
/// continues from the path's current point (not stored here).
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathVerb {
    Move { p0: Point },
    Line { p1: Point },
    Quad { p1: Point, p2: Point },
    Cubic { p1: Point, p2: Point, p3: Point },
}

/// An immutable, finished path: a flat sequence of verbs.
///
/// Produced by [`PathBuilder::finish`](crate::PathBuilder::finish). Paths
/// may contain multiple contours (separated by `Move` verbs); the
/// rasterizer treats every contour's edges as contributing to one shared
/// winding count, per the non-zero winding fill rule.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    pub(crate) fn from_verbs(verbs: Vec<PathVerb>) -> Self {
        Path { verbs }
    }

    /// Iterates over the path's verbs in order.
    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Returns `true` if the path contains no verbs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// The axis-aligned bounding box of every point and control point in
    /// the path (control points, not just on-curve points — this matches
    /// the simple "bounds of all coordinates" behavior the canvas uses to
    /// decide whether a draw can possibly affect the device rect; it is
    /// intentionally looser than the tight curve-extrema bounds some path
    /// libraries compute).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = Point::from_xy(f32::INFINITY, f32::INFINITY);
        let mut max = Point::from_xy(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut saw_point = false;

        let mut update = |p: Point| {
            if !p.is_finite() {
                return;
            }
            saw_point = true;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for verb in &self.verbs {
            match *verb {
                PathVerb::Move { p0 } => update(p0),
                PathVerb::Line { p1 } => update(p1),
                PathVerb::Quad { p1, p2 } => {
                    update(p1);
                    update(p2);
                }
                PathVerb::Cubic { p1, p2, p3 } => {
                    update(p1);
                    update(p2);
                    update(p3);
                }
            }
        }

        if saw_point {
            Some((min, max))
        } else {
            None
        }
    }

    /// Returns a copy of this path with every point (on-curve and
    /// control) mapped through `m`.
    pub fn transform(&self, m: &Transform) -> Path {
        let verbs = self.verbs.iter().map(|v| match *v {
            PathVerb::Move { p0 } => PathVerb::Move { p0: m.map_point(p0) },
            PathVerb::Line { p1 } => PathVerb::Line { p1: m.map_point(p1) },
            PathVerb::Quad { p1, p2 } => PathVerb::Quad { p1: m.map_point(p1), p2: m.map_point(p2) },
            PathVerb::Cubic { p1, p2, p3 } => {
                PathVerb::Cubic { p1: m.map_point(p1), p2: m.map_point(p2), p3: m.map_point(p3) }
            }
        }).collect();
        Path::from_verbs(verbs)
    }

    /// Decomposes the verb stream into explicit segments, each carrying
    /// its own start point. `Move` verbs disappear here — they only ever
    /// existed to set the start point for the segment that follows.
    pub(crate) fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.verbs.len());
        let mut current = Point::zero();

        for verb in &self.verbs {
            match *verb {
                PathVerb::Move { p0 } => current = p0,
                PathVerb::Line { p1 } => {
                    out.push(Segment::Line { p0: current, p1 });
                    current = p1;
                }
                PathVerb::Quad { p1, p2 } => {
                    out.push(Segment::Quad { p0: current, p1, p2 });
                    current = p2;
                }
                PathVerb::Cubic { p1, p2, p3 } => {
                    out.push(Segment::Cubic { p0: current, p1, p2, p3 });
                    current = p3;
                }
            }
        }

        out
    }
}

/// One segment of a path, with its start point made explicit. Used by the
/// path rasterizer, which needs both endpoints of every piece of geometry
/// it flattens into edges.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) enum Segment {
    Line { p0: Point, p1: Point },
    Quad { p0: Point, p1: Point, p2: Point },
    Cubic { p0: Point, p1: Point, p2: Point, p3: Point },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_builder::PathBuilder;

    #[test]
    fn empty_path_has_no_bounds() {
        assert!(Path::default().bounds().is_none());
    }

    #[test]
    fn triangle_bounds() {
        let mut pb = PathBuilder::new();
        pb.move_to(Point::from_xy(0.0, 0.0));
        pb.line_to(Point::from_xy(10.0, 0.0));
        pb.line_to(Point::from_xy(5.0, 10.0));
        pb.close();
        let path = pb.finish().unwrap();
        let (min, max) = path.bounds().unwrap();
        assert_eq!(min, Point::from_xy(0.0, 0.0));
        assert_eq!(max, Point::from_xy(10.0, 10.0));
    }

    #[test]
    fn segments_carry_explicit_start_points() {
        let mut pb = PathBuilder::new();
        pb.move_to(Point::from_xy(0.0, 0.0));
        pb.line_to(Point::from_xy(10.0, 0.0));
        pb.quad_to(Point::from_xy(15.0, 5.0), Point::from_xy(10.0, 10.0));
        let path = pb.finish().unwrap();
        let segs = path.segments();
        assert_eq!(segs.len(), 2);
        match segs[0] {
            Segment::Line { p0, p1 } => {
                assert_eq!(p0, Point::from_xy(0.0, 0.0));
                assert_eq!(p1, Point::from_xy(10.0, 0.0));
            }
            _ => panic!("expected a line segment"),
        }
        match segs[1] {
            Segment::Quad { p0, .. } => assert_eq!(p0, Point::from_xy(10.0, 0.0)),
            _ => panic!("expected a quad segment"),
        }
    }
}
