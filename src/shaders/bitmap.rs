// Copyright 2024 tiny-raster contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::rc::Rc;

use crate::color::PremultipliedColor;
use crate::pixmap::Bitmap;
use crate::scalar::ScalarExt;
use crate::shaders::TileMode;
use crate::transform::Transform;

/// Samples a bitmap with nearest-neighbor filtering, tiled per
/// [`TileMode`].
#[derive(Clone, Debug)]
pub struct BitmapShader {
    bitmap: Rc<Bitmap>,
    inv_local: Transform,
    tile_mode: TileMode,
    opaque: bool,
}

impl BitmapShader {
    /// Creates a bitmap shader. `local_matrix` maps shader space (the
    /// bitmap's own pixel grid) into the coordinate space the shape was
    /// specified in; returns `None` if it is singular.
    pub fn new(bitmap: Rc<Bitmap>, local_matrix: Transform, tile_mode: TileMode) -> Option<Self> {
        let inv_local = local_matrix.invert()?;
        let opaque = bitmap.data().iter().all(|&p| (p >> 24) == 0xFF);
        Some(BitmapShader { bitmap, inv_local, tile_mode, opaque })
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.opaque
    }

    pub(crate) fn bind(&mut self, ctm: &Transform) -> bool {
        match ctm.invert() {
            Some(inv_ctm) => {
                self.inv_local = self.inv_local.concat(&inv_ctm);
                true
            }
            None => false,
        }
    }

    pub(crate) fn shade_row(&self, x: i32, y: i32, count: usize, out: &mut [PremultipliedColor]) {
        let width = self.bitmap.width() as i32;
        let height = self.bitmap.height() as i32;

        let mut px = self.inv_local.a * (x as f32 + 0.5) + self.inv_local.c * (y as f32 + 0.5) + self.inv_local.e;
        let mut py = self.inv_local.b * (x as f32 + 0.5) + self.inv_local.d * (y as f32 + 0.5) + self.inv_local.f;

        for slot in out.iter_mut().take(count) {
            let (ix, iy) = tile_point(px, py, width, height, self.tile_mode);
            *slot = self.bitmap.pixel(ix as u32, iy as u32).unwrap_or(PremultipliedColor::transparent());

            px += self.inv_local.a;
            py += self.inv_local.b;
        }
    }
}

/// Maps a continuous shader-space coordinate to an integer bitmap pixel
/// index according to `mode`, clamping/repeating/mirroring each axis
/// independently.
fn tile_point(px: f32, py: f32, width: i32, height: i32, mode: TileMode) -> (i32, i32) {
    (tile_axis(px, width, mode), tile_axis(py, height, mode))
}

fn tile_axis(v: f32, extent: i32, mode: TileMode) -> i32 {
    let ext = extent as f32;
    let tiled = match mode {
        TileMode::Clamp => v.bound(0.0, ext - 1.0),
        TileMode::Repeat => v.rem_euclid(ext),
        TileMode::Mirror => {
            let period = 2.0 * ext;
            let m = v.rem_euclid(period);
            if m >= ext { period - 1.0 - m } else { m }
        }
    };
    tiled.floor_to_int()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn make_bitmap() -> Rc<Bitmap> {
        let mut bmp = Bitmap::new(2, 1).unwrap();
        bmp.set_pixel(0, 0, Color::from_rgba(255, 0, 0, 255).premultiply());
        bmp.set_pixel(1, 0, Color::from_rgba(0, 0, 255, 255).premultiply());
        Rc::new(bmp)
    }

    #[test]
    fn clamp_holds_edge_value_past_bounds() {
        assert_eq!(tile_axis(-5.0, 2, TileMode::Clamp), 0);
        assert_eq!(tile_axis(5.0, 2, TileMode::Clamp), 1);
    }

    #[test]
    fn repeat_wraps_around() {
        assert_eq!(tile_axis(2.0, 2, TileMode::Repeat), 0);
        assert_eq!(tile_axis(3.0, 2, TileMode::Repeat), 1);
    }

    #[test]
    fn mirror_reflects_past_bounds() {
        assert_eq!(tile_axis(0.0, 2, TileMode::Mirror), 0);
        assert_eq!(tile_axis(2.0, 2, TileMode::Mirror), 1);
        assert_eq!(tile_axis(3.0, 2, TileMode::Mirror), 0);
    }

    #[test]
    fn shade_row_samples_nearest_texel() {
        let shader = BitmapShader::new(make_bitmap(), Transform::identity(), TileMode::Clamp).unwrap();
        let mut out = vec![PremultipliedColor::transparent(); 2];
        shader.shade_row(0, 0, 2, &mut out);
        assert_eq!(out[0].r, 255);
        assert_eq!(out[1].b, 255);
    }

    #[test]
    fn opaque_bitmap_reports_opaque() {
        let shader = BitmapShader::new(make_bitmap(), Transform::identity(), TileMode::Clamp).unwrap();
        assert!(shader.is_opaque());
    }

    #[test]
    fn singular_local_matrix_rejected() {
        assert!(BitmapShader::new(make_bitmap(), Transform::from_scale(0.0, 1.0), TileMode::Clamp).is_none());
    }
}
