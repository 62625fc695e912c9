/*!
`tiny-raster` is a small, aliased, CPU-based 2D raster graphics engine: an
edge-based polygon rasterizer, adaptive Bezier flattening, and a
Porter-Duff pixel pipeline, in the spirit of `tiny-skia`'s own rasterizer
core but without anti-aliasing, stroking, or clip regions beyond the
device rectangle.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

mod blend_mode;
mod canvas;
mod color;
mod compositor;
mod curve;
mod edge;
mod edge_clipper;
mod paint;
mod path;
mod path_builder;
mod pixmap;
mod point;
mod rasterizer;
mod rect;
mod scalar;
mod shaders;
mod transform;

pub use blend_mode::BlendMode;
pub use canvas::Canvas;
pub use color::{Color, PremultipliedColor};
pub use paint::Paint;
pub use path::{Path, PathVerb};
pub use path_builder::{PathBuilder, PathDirection};
pub use pixmap::Bitmap;
pub use point::{Point, Vector};
pub use rect::Rect;
pub use shaders::{BitmapShader, LinearGradientShader, Shader, TileMode};
pub use transform::Transform;
