// Copyright 2024 tiny-raster contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::blend_mode::BlendMode;
use crate::color::Color;
use crate::shaders::Shader;

/// Describes how a shape is filled: a color, an optional shader
/// overriding that color, and a Porter-Duff blend mode.
#[derive(Clone, Debug)]
pub struct Paint {
    /// The fill color, used directly when `shader` is `None`.
    pub color: Color,
    /// An optional shader; when present it supersedes `color` entirely.
    pub shader: Option<Shader>,
    /// The compositing mode used to combine the fill with the
    /// destination.
    pub blend_mode: BlendMode,
}

impl Default for Paint {
    fn default() -> Self {
        Paint {
            color: Color::from_rgba(0, 0, 0, 255),
            shader: None,
            blend_mode: BlendMode::SrcOver,
        }
    }
}

impl Paint {
    /// Creates a paint with an opaque black color and `SrcOver` blending.
    #[inline]
    pub fn new() -> Self {
        Paint::default()
    }

    /// Sets the fill color from straight 8-bit RGBA components.
    #[inline]
    pub fn set_color_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.color = Color::from_rgba(r, g, b, a);
    }
}
