// Copyright 2009 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;

use crate::edge::{create_edge, Edge};
use crate::point::Point;
use crate::scalar::ScalarExt;

/// Clips `edge` against the device rectangle `[0, width-1] x [0, height-1]`
/// (inclusive, rounded bounds), pushing zero or more resulting edges into
/// `out`.
///
/// An edge that crosses a clip boundary is split into a vertical "filler"
/// edge running along the boundary plus a shortened edge continuing
/// in-bounds; both carry the original edge's winding, so the sum of
/// windings crossed by any scanline is unchanged by clipping. This is the
/// same cascade as the recursive original, rewritten as a work-stack loop
/// so Rust doesn't need to reason about recursion depth: every recursive
/// call in the source is already a tail call, so an explicit stack
/// produces identical results.
pub(crate) fn clip_edge_to(out: &mut Vec<Edge>, width: i32, height: i32, edge: Edge) {
    let min_x = 0.0f32;
    let max_x = (width - 1) as f32;
    let min_y = 0;
    let max_y = height - 1;

    // Small-vector: in practice only a handful of splits ever stack up for
    // one input edge (at most one per clip boundary crossed).
    let mut pending: ArrayVec<Edge, 16> = ArrayVec::new();
    pending.push(edge);

    while let Some(mut edge) = pending.pop() {
        let top_y = edge.top.y.round_to_int();
        let bottom_y = edge.bottom.y.round_to_int();

        if top_y < min_y && bottom_y < min_y {
            continue;
        }
        if top_y > max_y && bottom_y > max_y {
            continue;
        }
        if top_y < min_y {
            edge.top.x += edge.m * (min_y as f32 - edge.top.y);
            edge.top.y = min_y as f32;
            pending.push(edge);
            continue;
        }
        if bottom_y > max_y {
            edge.bottom.x += edge.m * (max_y as f32 - edge.bottom.y);
            edge.bottom.y = max_y as f32;
            pending.push(edge);
            continue;
        }

        let top_x = edge.top.x.round_to_int();
        let bottom_x = edge.bottom.x.round_to_int();
        let min_x_i = min_x.round_to_int();
        let max_x_i = max_x.round_to_int();

        if top_x < min_x_i && bottom_x < min_x_i {
            edge.top.x = min_x;
            edge.bottom.x = min_x;
            pending.push(edge);
            continue;
        }
        if top_x > max_x_i && bottom_x > max_x_i {
            edge.top.x = max_x;
            edge.bottom.x = max_x;
            pending.push(edge);
            continue;
        }
        if top_x < min_x_i {
            let split_y = (min_x - edge.b) / edge.m;
            let filler = create_edge(Point::from_xy(min_x, edge.top.y), Point::from_xy(min_x, split_y));
            pending.push(filler);
            edge.top.x = min_x;
            edge.top.y = split_y;
            pending.push(edge);
            continue;
        }
        if bottom_x < min_x_i {
            let split_y = (min_x - edge.b) / edge.m;
            let filler = create_edge(Point::from_xy(min_x, edge.bottom.y), Point::from_xy(min_x, split_y));
            pending.push(filler);
            edge.bottom.x = min_x;
            edge.bottom.y = split_y;
            pending.push(edge);
            continue;
        }
        if top_x > max_x_i {
            let split_y = (max_x - edge.b) / edge.m;
            let filler = create_edge(Point::from_xy(max_x, edge.top.y), Point::from_xy(max_x, split_y));
            pending.push(filler);
            edge.top.x = max_x;
            edge.top.y = split_y;
            pending.push(edge);
            continue;
        }
        if bottom_x > max_x_i {
            let split_y = (max_x - edge.b) / edge.m;
            let filler = create_edge(Point::from_xy(max_x, edge.bottom.y), Point::from_xy(max_x, split_y));
            pending.push(filler);
            edge.bottom.x = max_x;
            edge.bottom.y = split_y;
            pending.push(edge);
            continue;
        }

        edge.recompute_slope();
        if !edge.is_horizontal() {
            out.push(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_fully_inside_survives_unclipped() {
        let mut out = Vec::new();
        let e = create_edge(Point::from_xy(2.0, 2.0), Point::from_xy(2.0, 8.0));
        clip_edge_to(&mut out, 10, 10, e);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].top, Point::from_xy(2.0, 2.0));
        assert_eq!(out[0].bottom, Point::from_xy(2.0, 8.0));
    }

    #[test]
    fn edge_fully_outside_is_dropped() {
        let mut out = Vec::new();
        let e = create_edge(Point::from_xy(2.0, -20.0), Point::from_xy(2.0, -10.0));
        clip_edge_to(&mut out, 10, 10, e);
        assert!(out.is_empty());
    }

    #[test]
    fn edge_crossing_top_boundary_is_clamped() {
        let mut out = Vec::new();
        let e = create_edge(Point::from_xy(2.0, -5.0), Point::from_xy(2.0, 5.0));
        clip_edge_to(&mut out, 10, 10, e);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].top.y, 0.0);
    }

    #[test]
    fn diagonal_edge_crossing_left_boundary_splits_in_two() {
        let mut out = Vec::new();
        // Goes from x=-5 at y=0 to x=5 at y=10: crosses x=0 at y=5.
        let e = create_edge(Point::from_xy(-5.0, 0.0), Point::from_xy(5.0, 10.0));
        clip_edge_to(&mut out, 10, 20, e);
        // One vertical filler along x=0 plus the shortened interior edge.
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn horizontal_result_is_discarded() {
        let mut out = Vec::new();
        let e = create_edge(Point::from_xy(-5.0, 5.0), Point::from_xy(20.0, 5.01));
        clip_edge_to(&mut out, 10, 10, e);
        // Both endpoints round to the same scanline after clamping to x bounds.
        assert!(out.iter().all(|e| !e.is_horizontal()));
    }
}
