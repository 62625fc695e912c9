// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The caller-facing façade: a device bitmap, a transform stack, and the
//! three draw operations (`clear`, `drawRect`, `drawConvexPolygon`,
//! `drawPath`) that hand off to the rasterizer core.

use crate::color::Color;
use crate::paint::Paint;
use crate::path::Path;
use crate::pixmap::Bitmap;
use crate::point::Point;
use crate::rasterizer::{fill_convex_polygon, fill_path};
use crate::rect::Rect;
use crate::scalar::ScalarExt;
use crate::transform::Transform;

/// A device bitmap plus an affine transform stack: the entry point for
/// every draw operation this crate exposes.
#[derive(Clone, Debug)]
pub struct Canvas {
    /// The bitmap this canvas draws into.
    pub bitmap: Bitmap,
    transform: Transform,
    stack: Vec<Transform>,
}

impl From<Bitmap> for Canvas {
    #[inline]
    fn from(bitmap: Bitmap) -> Self {
        Canvas { bitmap, transform: Transform::identity(), stack: Vec::new() }
    }
}

impl Canvas {
    /// Creates a new canvas over a freshly allocated, transparent bitmap.
    ///
    /// Returns `None` if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Canvas::from(Bitmap::new(width, height)?))
    }

    /// Returns the current transform.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Pushes a copy of the current transform onto the stack.
    #[inline]
    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    /// Pops the transform stack, restoring the transform active at the
    /// matching `save`.
    ///
    /// A `restore` with no matching `save` is a contract violation, not
    /// degenerate geometry: it signals a caller bug, so it asserts rather
    /// than silently doing nothing.
    pub fn restore(&mut self) {
        let transform = self.stack.pop().expect("restore() called without a matching save()");
        self.transform = transform;
    }

    /// Pre-concatenates `m` onto the current transform: points are mapped
    /// by `m` first, then by whatever was already current.
    #[inline]
    pub fn concat(&mut self, m: Transform) {
        self.transform = self.transform.concat(&m);
    }

    /// Fills every pixel with `color`, replacing (not blending with) the
    /// existing contents.
    pub fn clear(&mut self, color: Color) {
        self.bitmap.fill(color.premultiply());
    }

    /// Fills a rectangle.
    ///
    /// If the current transform is the identity and the paint has no
    /// shader, this fills row by row directly; otherwise it is equivalent
    /// to converting the rectangle into a 4-point polygon and calling
    /// [`Canvas::draw_convex_polygon`].
    pub fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        if self.transform.is_identity() && paint.shader.is_none() {
            self.fill_rect_directly(rect, paint);
        } else {
            self.draw_convex_polygon(&rect.to_points(), paint);
        }
    }

    fn fill_rect_directly(&mut self, rect: Rect, paint: &Paint) {
        let width = self.bitmap.width() as i32;
        let height = self.bitmap.height() as i32;

        let left = rect.left.round_to_int().max(0);
        let top = rect.top.round_to_int().max(0);
        let right = rect.right.round_to_int().min(width);
        let bottom = rect.bottom.round_to_int().min(height);

        if left >= right || top >= bottom {
            return;
        }

        let mut scratch = Vec::new();
        for y in top..bottom {
            crate::compositor::blend_row(&mut self.bitmap, left, y, right - left, paint, &mut scratch);
        }
    }

    /// Fills a convex polygon.
    ///
    /// `points` must describe a convex polygon in either winding order;
    /// behavior for a non-convex input is unspecified (use
    /// [`Canvas::draw_path`] for concave or self-intersecting shapes).
    pub fn draw_convex_polygon(&mut self, points: &[Point], paint: &Paint) {
        let mut paint = paint.clone();
        if let Some(shader) = &mut paint.shader {
            if !shader.bind(&self.transform) {
                return;
            }
        }

        fill_convex_polygon(&mut self.bitmap, points, &self.transform, &paint);
    }

    /// Fills a path using the non-zero winding rule.
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let mut paint = paint.clone();
        if let Some(shader) = &mut paint.shader {
            if !shader.bind(&self.transform) {
                return;
            }
        }

        let device_path = path.transform(&self.transform);
        fill_path(&mut self.bitmap, &device_path, &paint);
    }
}
