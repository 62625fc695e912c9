// Copyright 2024 tiny-raster contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Adaptive flattening of quadratic and cubic Bezier segments into the
//! straight [`Edge`]s the scan converters operate on.

use crate::edge::{create_edge, Edge};
use crate::edge_clipper::clip_edge_to;
use crate::point::Point;

/// Evaluates the de Casteljau midpoint split of a quadratic Bezier
/// `[A, B, C]` at `t`, returning the two new control polygons
/// `[A, D, P]` and `[P, E, C]` packed as `[A, D, P, E, C]`.
pub(crate) fn chop_quad_at(src: [Point; 3], t: f32) -> [Point; 5] {
    let [a, b, c] = src;
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    let p = d.lerp(e, t);
    [a, d, p, e, c]
}

/// Evaluates the de Casteljau midpoint split of a cubic Bezier
/// `[A, B, C, D]` at `t`, returning the two new control polygons packed as
/// `[A, E, H, J, I, G, D]`.
pub(crate) fn chop_cubic_at(src: [Point; 4], t: f32) -> [Point; 7] {
    let [a, b, c, d] = src;
    let e = a.lerp(b, t);
    let f = b.lerp(c, t);
    let g = c.lerp(d, t);
    let h = e.lerp(f, t);
    let i = f.lerp(g, t);
    let j = h.lerp(i, t);
    [a, e, h, j, i, g, d]
}

/// Number of recursive midpoint subdivisions needed to flatten a quadratic
/// Bezier within the implicit error tolerance baked into this formula.
pub(crate) fn quad_subdivision_count(src: [Point; 3]) -> u32 {
    let [a, b, c] = src;
    let e = a.sub(b.scale(2.0)).add(c);
    let err = (e.length() / 4.0).abs();
    let num_segs = (err * 4.0).sqrt().ceil();
    if num_segs <= 1.0 {
        0
    } else {
        num_segs.log2().ceil().max(0.0) as u32
    }
}

/// Number of recursive midpoint subdivisions needed to flatten a cubic
/// Bezier within the implicit error tolerance baked into this formula.
///
/// The error vector takes the component-wise max of the two segments'
/// second-derivative estimates, rather than e.g. their sum — kept exactly
/// as derived, since it is the formula this flattener's output is meant to
/// match.
pub(crate) fn cubic_subdivision_count(src: [Point; 4]) -> u32 {
    let [a, b, c, d] = src;
    let e0 = a.sub(b.scale(2.0)).add(c);
    let e1 = b.sub(c.scale(2.0)).add(d);
    let e = Point::from_xy(e0.x.max(e1.x), e0.y.max(e1.y));
    let err = e.length().abs();
    let num_segs = (3.0 * err).sqrt().ceil();
    if num_segs <= 1.0 {
        0
    } else {
        num_segs.log2().ceil().max(0.0) as u32
    }
}

/// Recursively flattens a quadratic Bezier into straight edges, clipping
/// each resulting edge to the device rectangle as it goes.
pub(crate) fn flatten_quad_to_edges(
    out: &mut Vec<Edge>,
    width: i32,
    height: i32,
    src: [Point; 3],
    num_to_chop: u32,
) {
    if num_to_chop == 0 {
        let edge = create_edge(src[0], src[2]);
        if !edge.is_horizontal() {
            clip_edge_to(out, width, height, edge);
        }
        return;
    }

    let dst = chop_quad_at(src, 0.5);
    flatten_quad_to_edges(out, width, height, [dst[0], dst[1], dst[2]], num_to_chop - 1);
    flatten_quad_to_edges(out, width, height, [dst[2], dst[3], dst[4]], num_to_chop - 1);
}

/// Recursively flattens a cubic Bezier into straight edges, clipping each
/// resulting edge to the device rectangle as it goes.
pub(crate) fn flatten_cubic_to_edges(
    out: &mut Vec<Edge>,
    width: i32,
    height: i32,
    src: [Point; 4],
    num_to_chop: u32,
) {
    if num_to_chop == 0 {
        let edge = create_edge(src[0], src[3]);
        if !edge.is_horizontal() {
            clip_edge_to(out, width, height, edge);
        }
        return;
    }

    let dst = chop_cubic_at(src, 0.5);
    flatten_cubic_to_edges(out, width, height, [dst[0], dst[1], dst[2], dst[3]], num_to_chop - 1);
    flatten_cubic_to_edges(out, width, height, [dst[3], dst[4], dst[5], dst[6]], num_to_chop - 1);
}
