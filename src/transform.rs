// Copyright 2006 The Android Open Source Project
// Copyright 2020 Evgeniy Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::point::Point;

/// An affine transformation matrix.
///
/// Stored as six scalars `[a, b, c, d, e, f]` mapping a point `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`. This is the same row layout used
/// throughout the rest of the crate: `a`/`d` scale, `c`/`b` skew, `e`/`f`
/// translate.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Transform::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    /// Creates a transform from its six raw components.
    #[inline]
    pub fn from_row(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Transform { a, b, c, d, e, f }
    }

    /// Creates a translation transform.
    #[inline]
    pub fn from_translate(tx: f32, ty: f32) -> Self {
        Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: tx, f: ty }
    }

    /// Creates a scaling transform.
    #[inline]
    pub fn from_scale(sx: f32, sy: f32) -> Self {
        Transform { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 }
    }

    /// Creates a rotation transform, in radians.
    pub fn from_rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Transform { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Returns `true` when this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Transform::identity()
    }

    /// Maps a single point through this transform.
    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        Point::from_xy(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Maps every point in `points` through this transform, in place.
    pub fn map_points(&self, points: &mut [Point]) {
        for p in points {
            *p = self.map_point(*p);
        }
    }

    /// The matrix determinant, `a*d - c*b`.
    #[inline]
    fn determinant(&self) -> f32 {
        self.a * self.d - self.c * self.b
    }

    /// Inverts the transform, returning `None` when it is singular
    /// (determinant of zero, e.g. a zero scale).
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        Some(Transform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    /// Concatenates `self` with `other`, matching `ctm * other`: points are
    /// mapped by `other` first, then by `self`. Used by `Canvas::concat`,
    /// which calls `ctm.concat(user_matrix)` so the newly applied transform
    /// takes effect before whatever was already on the canvas.
    pub fn concat(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }
}
