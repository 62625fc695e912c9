// Copyright 2024 tiny-raster contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::{Color, PremultipliedColor};
use crate::point::Point;
use crate::shaders::TileMode;
use crate::transform::Transform;

/// A straight-alpha gradient stop, stored as `[0, 1]` floats so
/// interpolation between stops stays smooth at 8-bit output precision.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Stop {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl From<Color> for Stop {
    fn from(c: Color) -> Self {
        Stop { r: c.r as f32 / 255.0, g: c.g as f32 / 255.0, b: c.b as f32 / 255.0, a: c.a as f32 / 255.0 }
    }
}

impl Stop {
    fn lerp(a: Stop, b: Stop, t: f32) -> Stop {
        Stop {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    fn to_premultiplied(self) -> PremultipliedColor {
        let a = (self.a * 255.0).round() as u8;
        PremultipliedColor {
            a,
            r: (self.r * self.a * 255.0).round() as u8,
            g: (self.g * self.a * 255.0).round() as u8,
            b: (self.b * self.a * 255.0).round() as u8,
        }
    }
}

/// A linear gradient between two or more colors along the line `p0 -> p1`.
#[derive(Clone, Debug)]
pub struct LinearGradientShader {
    stops: Vec<Stop>,
    inv_local: Transform,
    tile_mode: TileMode,
}

impl LinearGradientShader {
    /// Creates a linear gradient shader.
    ///
    /// Returns `None` if fewer than two colors are given, if `p0` and `p1`
    /// are coincident (a zero-length gradient axis, which makes the
    /// mapping matrix singular), or as a general guard against a singular
    /// local matrix.
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile_mode: TileMode) -> Option<Self> {
        if colors.len() < 2 {
            return None;
        }

        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        // Maps the unit interval along the gradient axis back to device
        // space: (0,0) -> p0, (1,0) -> p1, with (0,1) perpendicular.
        let axis_to_device = Transform::from_row(dx, dy, -dy, dx, p0.x, p0.y);
        let device_to_axis = axis_to_device.invert()?;

        let n = (colors.len() - 1) as f32;
        let scale_to_stops = Transform::from_scale(n, n);
        let inv_local = scale_to_stops.concat(&device_to_axis);

        let stops = colors.iter().copied().map(Stop::from).collect();
        Some(LinearGradientShader { stops, inv_local, tile_mode })
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.stops.iter().all(|s| s.a >= 1.0)
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
        let n = (self.stops.len() - 1) as f32;
        let mut t = self.inv_local.a * (x as f32 + 0.5) + self.inv_local.c * (y as f32 + 0.5) + self.inv_local.e;

        for slot in out.iter_mut().take(count) {
            let tiled = self.tile(t, n);
            let lo = tiled.floor() as usize;
            let lo = lo.min(self.stops.len() - 2);
            let frac = tiled - lo as f32;
            *slot = Stop::lerp(self.stops[lo], self.stops[lo + 1], frac).to_premultiplied();
            t += self.inv_local.a;
        }
    }

    /// Folds a raw axis coordinate `t` (which ranges over all of `f32`)
    /// back into `[0, n]`, per this shader's tile mode.
    fn tile(&self, t: f32, n: f32) -> f32 {
        match self.tile_mode {
            TileMode::Clamp => t.max(0.0).min(n),
            TileMode::Repeat => {
                let shifted = if t < 0.0 { (n + 1.0) + t } else { t };
                shifted.abs().rem_euclid(n)
            }
            TileMode::Mirror => {
                let period = 2.0 * n;
                let mut m = t.abs().rem_euclid(period);
                if m >= n {
                    m = period - m;
                }
                m
            }
        }
    }
}
