// Copyright 2024 tiny-raster contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Blends one scanline span of a paint into a bitmap.

use crate::color::PremultipliedColor;
use crate::paint::Paint;
use crate::pixmap::Bitmap;

/// Blends `count` consecutive pixels starting at `(x, y)` with `paint`,
/// writing the result into `bitmap`.
///
/// `scratch` is a caller-owned buffer reused across every span in a draw
/// call, so shading a row never allocates: the canvas sizes it once (to
/// the bitmap's width) before the scan loop begins.
pub(crate) fn blend_row(
    bitmap: &mut Bitmap,
    x: i32,
    y: i32,
    count: i32,
    paint: &Paint,
    scratch: &mut Vec<PremultipliedColor>,
) {
    if count <= 0 || y < 0 || y as u32 >= bitmap.height() {
        return;
    }
    let x = x.max(0);
    let count = count.min(bitmap.width() as i32 - x);
    if count <= 0 {
        return;
    }

    let row = bitmap.row_mut(y as u32);
    let row = &mut row[x as usize..x as usize + count as usize];

    if let Some(shader) = &paint.shader {
        if scratch.len() < count as usize {
            scratch.resize(count as usize, PremultipliedColor::transparent());
        }
        shader.shade_row(x, y, count as usize, scratch);

        let mode = if shader.is_opaque() {
            paint.blend_mode.specialize_for_opaque_source()
        } else {
            paint.blend_mode
        };

        for (dst, src) in row.iter_mut().zip(scratch.iter()) {
            let blended = mode.blend(*src, PremultipliedColor::from_u32(*dst));
            *dst = blended.to_u32();
        }
    } else {
        let src = paint.color.premultiply();
        let mode = if src.is_opaque() {
            paint.blend_mode.specialize_for_opaque_source()
        } else if src.is_transparent() {
            paint.blend_mode.specialize_for_transparent_source()
        } else {
            paint.blend_mode
        };

        for dst in row.iter_mut() {
            let blended = mode.blend(src, PremultipliedColor::from_u32(*dst));
            *dst = blended.to_u32();
        }
    }
}
