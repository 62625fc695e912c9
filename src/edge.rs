// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::point::Point;
use crate::scalar::ScalarExt;

/// A single straight edge of a flattened, device-space polygon.
///
/// Stored in its parametric form `x = m*y + b` rather than as two
/// endpoints, since every scan conversion routine needs to evaluate `x` at
/// a sequence of scanline `y` values. `top`/`bottom` are the endpoints
/// ordered so `top.y <= bottom.y`; `winding` records which original
/// direction (`+1` or `-1`) this edge was traversed in, which is what the
/// non-zero winding rule sums over.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct Edge {
    pub m: f32,
    pub b: f32,
    pub top: Point,
    pub bottom: Point,
    pub winding: i32,
}

impl Edge {
    /// Returns `true` when this edge is horizontal, i.e. rounds to the
    /// same scanline at both ends and so never contributes a crossing.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.top.y.round_to_int() == self.bottom.y.round_to_int()
    }

    /// Returns `true` when scanline `y` falls within this edge's vertical
    /// span (inclusive, using rounded endpoints).
    #[inline]
    pub fn is_valid_for(&self, y: i32) -> bool {
        y >= self.top.y.round_to_int() && y <= self.bottom.y.round_to_int()
    }

    /// Evaluates `x` at scanline `y`.
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        self.m * y + self.b
    }

    /// Recomputes `m`/`b` after `top`/`bottom` have been mutated in place
    /// (used by the clipper, which adjusts endpoints as it clips).
    pub fn recompute_slope(&mut self) {
        debug_assert!(self.top.y <= self.bottom.y);
        self.m = (self.top.x - self.bottom.x) / (self.top.y - self.bottom.y);
        self.b = self.top.x - self.m * self.top.y;
    }
}

/// Builds an `Edge` from two path points, ordering them by `y` and
/// recording which direction was reversed (if any) as the winding sign.
pub(crate) fn create_edge(p1: Point, p2: Point) -> Edge {
    let (top, bottom, winding) = if p1.y.round_to_int() < p2.y.round_to_int() {
        (p1, p2, -1)
    } else {
        (p2, p1, 1)
    };

    let m = (top.x - bottom.x) / (top.y - bottom.y);
    let b = top.x - m * top.y;
    Edge { m, b, top, bottom, winding }
}
