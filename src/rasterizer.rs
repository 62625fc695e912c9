// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The two scan converters: a fast path for convex polygons (two advancing
//! edges) and the general non-zero winding fill used by [`crate::Path`].

use crate::compositor::blend_row;
use crate::curve::{flatten_cubic_to_edges, flatten_quad_to_edges, cubic_subdivision_count, quad_subdivision_count};
use crate::edge::{create_edge, Edge};
use crate::edge_clipper::clip_edge_to;
use crate::paint::Paint;
use crate::path::{Path, Segment};
use crate::pixmap::Bitmap;
use crate::point::Point;
use crate::scalar::ScalarExt;
use crate::transform::Transform;

/// Scan converts a convex polygon (already device-space, pre-transform
/// applied by the caller) via two advancing edges.
///
/// `points` need at least 3 vertices to enclose any area; fewer, or a
/// polygon that clips away entirely, is degenerate geometry and a silent
/// no-op.
pub(crate) fn fill_convex_polygon(
    bitmap: &mut Bitmap,
    points: &[Point],
    transform: &Transform,
    paint: &Paint,
) {
    if points.len() < 3 {
        return;
    }

    let width = bitmap.width() as i32;
    let height = bitmap.height() as i32;

    let mut edges = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        let p0 = transform.map_point(points[i]);
        let p1 = transform.map_point(points[(i + 1) % points.len()]);
        let edge = create_edge(p0, p1);
        if !edge.is_horizontal() {
            clip_edge_to(&mut edges, width, height, edge);
        }
    }

    if edges.len() < 2 {
        return;
    }

    edges.sort_by_key(|e| e.top.y.round_to_int());

    let y_start = edges[0].top.y.round_to_int();
    let y_end = edges.iter().map(|e| e.bottom.y.round_to_int()).max().unwrap();

    let mut i = 0usize;
    let mut j = 1usize;
    let mut next = 2usize;
    let mut scratch = Vec::new();

    for row in y_start..=y_end {
        while !edges[i].is_valid_for(row) && next < edges.len() {
            i = next;
            next += 1;
        }
        while !edges[j].is_valid_for(row) && next < edges.len() {
            j = next;
            next += 1;
        }
        if !edges[i].is_valid_for(row) || !edges[j].is_valid_for(row) {
            continue;
        }

        let y = row as f32 + 0.5;
        let xi = edges[i].x_at(y);
        let xj = edges[j].x_at(y);
        let left = xi.min(xj).round_to_int();
        let right = xi.max(xj).round_to_int();
        blend_row(bitmap, left, row, right - left, paint, &mut scratch);
    }
}

/// Builds the clipped, flattened edge list for a path already mapped into
/// device space.
fn build_path_edges(path: &Path, width: i32, height: i32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for segment in path.segments() {
        match segment {
            Segment::Line { p0, p1 } => {
                let edge = create_edge(p0, p1);
                if !edge.is_horizontal() {
                    clip_edge_to(&mut edges, width, height, edge);
                }
            }
            Segment::Quad { p0, p1, p2 } => {
                let src = [p0, p1, p2];
                let n = quad_subdivision_count(src);
                flatten_quad_to_edges(&mut edges, width, height, src, n);
            }
            Segment::Cubic { p0, p1, p2, p3 } => {
                let src = [p0, p1, p2, p3];
                let n = cubic_subdivision_count(src);
                flatten_cubic_to_edges(&mut edges, width, height, src, n);
            }
        }
    }
    edges
}

/// Scan converts a general path (possibly concave or self-intersecting)
/// using the non-zero winding rule.
///
/// `path` is the already-transformed path (the caller applies the CTM
/// before calling in, the same as [`fill_convex_polygon`] does internally
/// via `transform`, since a path's curves must be flattened in device
/// space to get adaptive subdivision counts right).
pub(crate) fn fill_path(bitmap: &mut Bitmap, path: &Path, paint: &Paint) {
    let width = bitmap.width() as i32;
    let height = bitmap.height() as i32;

    let mut edges = build_path_edges(path, width, height);
    if edges.len() < 2 {
        return;
    }

    // Tie-break on x at the first scanline's sample center, so the initial
    // order already matches what the per-row re-sort would produce.
    edges.sort_by(|a, b| {
        let ay = a.top.y.round_to_int();
        let by = b.top.y.round_to_int();
        ay.cmp(&by).then_with(|| {
            let sample_y = ay.min(by) as f32 + 0.5;
            a.x_at(sample_y).partial_cmp(&b.x_at(sample_y)).unwrap()
        })
    });

    let y_start = edges[0].top.y.round_to_int();
    let y_end = edges.iter().map(|e| e.bottom.y.round_to_int()).max().unwrap();

    let mut active: Vec<Edge> = Vec::new();
    let mut next_edge = 0usize;
    let mut scratch = Vec::new();

    for row in y_start..=y_end {
        while next_edge < edges.len() && edges[next_edge].top.y.round_to_int() <= row {
            active.push(edges[next_edge]);
            next_edge += 1;
        }
        active.retain(|e| e.is_valid_for(row));

        let y = row as f32 + 0.5;
        active.sort_by(|a, b| a.x_at(y).partial_cmp(&b.x_at(y)).unwrap());

        let mut winding = 0i32;
        let mut span_left: Option<f32> = None;
        for edge in &active {
            let was_outside = winding == 0;
            winding += edge.winding;
            let x = edge.x_at(y).bound(0.0, (width - 1) as f32);

            if was_outside && winding != 0 {
                span_left = Some(x);
            } else if !was_outside && winding == 0 {
                if let Some(left) = span_left.take() {
                    let left = left.floor_to_int();
                    let right = x.floor_to_int();
                    blend_row(bitmap, left, row, right - left, paint, &mut scratch);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PremultipliedColor;
    use crate::path_builder::PathBuilder;

    fn opaque_white_paint() -> Paint {
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint
    }

    #[test]
    fn convex_triangle_fills_expected_rows() {
        let mut bmp = Bitmap::new(10, 10).unwrap();
        let points = [
            Point::from_xy(1.0, 1.0),
            Point::from_xy(8.0, 1.0),
            Point::from_xy(4.0, 8.0),
        ];
        fill_convex_polygon(&mut bmp, &points, &Transform::identity(), &opaque_white_paint());

        // Row y=1 should be filled roughly across columns [1, 8).
        let mut filled: Vec<u32> = Vec::new();
        for x in 0..10 {
            if bmp.pixel(x, 1).unwrap().a != 0 {
                filled.push(x);
            }
        }
        assert!(!filled.is_empty());
        assert_eq!(*filled.first().unwrap(), 1);
    }

    #[test]
    fn degenerate_polygon_is_noop() {
        let mut bmp = Bitmap::new(10, 10).unwrap();
        let points = [Point::from_xy(1.0, 1.0), Point::from_xy(2.0, 2.0)];
        fill_convex_polygon(&mut bmp, &points, &Transform::identity(), &opaque_white_paint());
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(bmp.pixel(x, y).unwrap(), PremultipliedColor::transparent());
            }
        }
    }

    #[test]
    fn self_intersecting_star_fills_inner_pentagon_with_nonzero_winding() {
        let mut bmp = Bitmap::new(40, 40).unwrap();
        // A 5-point star traced so every contour segment winds the same
        // direction: the inner pentagon gets winding count 2.
        let cx = 20.0f32;
        let cy = 20.0f32;
        let r_outer = 18.0f32;
        let mut pb = PathBuilder::new();
        let mut pts = Vec::new();
        for k in 0..5 {
            let angle = std::f32::consts::PI / 2.0 + (k as f32) * 4.0 * std::f32::consts::PI / 5.0;
            pts.push(Point::from_xy(cx + r_outer * angle.cos(), cy - r_outer * angle.sin()));
        }
        pb.move_to(pts[0]);
        for &p in &pts[1..] {
            pb.line_to(p);
        }
        pb.close();
        let path = pb.finish().unwrap();

        let mut paint = opaque_white_paint();
        paint.color = crate::color::Color::from_rgba(255, 255, 255, 255);
        fill_path(&mut bmp, &path, &paint);

        // The exact center of the star lies inside the inner pentagon for
        // non-zero winding (and would be empty under even-odd).
        assert_ne!(bmp.pixel(20, 20).unwrap(), PremultipliedColor::transparent());
    }

    #[test]
    fn path_entirely_outside_device_leaves_bitmap_unchanged() {
        let mut bmp = Bitmap::new(10, 10).unwrap();
        let mut pb = PathBuilder::new();
        pb.move_to(Point::from_xy(100.0, 100.0));
        pb.line_to(Point::from_xy(200.0, 100.0));
        pb.line_to(Point::from_xy(150.0, 200.0));
        pb.close();
        let path = pb.finish().unwrap();

        fill_path(&mut bmp, &path, &opaque_white_paint());

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(bmp.pixel(x, y).unwrap(), PremultipliedColor::transparent());
            }
        }
    }
}
