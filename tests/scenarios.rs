//! End-to-end scenarios, one per concrete example in the design spec.

use std::rc::Rc;

use tiny_raster::{
    BitmapShader, Bitmap, Canvas, Color, LinearGradientShader, Paint, Point, Rect, TileMode,
};

#[test]
fn clear_fills_2x2_bitmap_with_opaque_red() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.clear(Color::from_rgba(255, 0, 0, 255));

    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(canvas.bitmap.pixel(x, y).unwrap().to_u32(), 0xFFFF0000);
        }
    }
}

#[test]
fn rect_src_fills_only_the_interior() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 255, 0, 255);
    paint.blend_mode = tiny_raster::BlendMode::Src;

    canvas.draw_rect(Rect::from_ltrb(1.0, 1.0, 3.0, 3.0), &paint);

    for y in 0..4u32 {
        for x in 0..4u32 {
            let expected = if (1..3).contains(&x) && (1..3).contains(&y) {
                0xFF00FF00
            } else {
                0
            };
            assert_eq!(canvas.bitmap.pixel(x, y).unwrap().to_u32(), expected, "at ({x}, {y})");
        }
    }
}

#[test]
fn src_over_semi_transparent_red_onto_opaque_white() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.clear(Color::from_rgba(255, 255, 255, 255));

    let mut paint = Paint::default();
    paint.color = Color::from_rgba(255, 0, 0, 128);
    canvas.draw_rect(Rect::from_ltrb(0.0, 0.0, 1.0, 1.0), &paint);

    let p = canvas.bitmap.pixel(0, 0).unwrap();
    assert_eq!(p.a, 255);
    assert!((p.r as i32 - 255).abs() <= 1);
    assert!((p.g as i32 - 127).abs() <= 1);
    assert!((p.b as i32 - 127).abs() <= 1);
}

#[test]
fn convex_triangle_matches_expected_rows() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);

    let points = [
        Point::from_xy(1.0, 1.0),
        Point::from_xy(8.0, 1.0),
        Point::from_xy(4.0, 8.0),
    ];
    canvas.draw_convex_polygon(&points, &paint);

    let row1_filled: Vec<u32> = (0..10).filter(|&x| canvas.bitmap.pixel(x, 1).unwrap().a != 0).collect();
    assert_eq!(row1_filled.first(), Some(&1));
    assert!(*row1_filled.last().unwrap() <= 8);

    let row7_filled: Vec<u32> = (0..10).filter(|&x| canvas.bitmap.pixel(x, 7).unwrap().a != 0).collect();
    if !row7_filled.is_empty() {
        assert!(*row7_filled.first().unwrap() >= 2 && *row7_filled.first().unwrap() <= 4);
        assert!(*row7_filled.last().unwrap() <= 6);
    }
}

#[test]
fn nonzero_winding_star_fills_inner_pentagon() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let mut pb = tiny_raster::PathBuilder::new();

    let cx = 20.0f32;
    let cy = 20.0f32;
    let r = 18.0f32;
    let mut pts = Vec::new();
    for k in 0..5 {
        let angle = std::f32::consts::PI / 2.0 + (k as f32) * 4.0 * std::f32::consts::PI / 5.0;
        pts.push(Point::from_xy(cx + r * angle.cos(), cy - r * angle.sin()));
    }
    pb.move_to(pts[0]);
    for &p in &pts[1..] {
        pb.line_to(p);
    }
    pb.close();
    let path = pb.finish().unwrap();

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    canvas.draw_path(&path, &paint);

    assert_ne!(canvas.bitmap.pixel(20, 20).unwrap().a, 0);
}

#[test]
fn bitmap_shader_repeats_a_single_red_dot_across_tiles() {
    let mut source = Bitmap::new(4, 4).unwrap();
    source.set_pixel(0, 0, Color::from_rgba(255, 0, 0, 255).premultiply());

    let shader = BitmapShader::new(Rc::new(source), tiny_raster::Transform::identity(), TileMode::Repeat).unwrap();

    let mut canvas = Canvas::new(12, 12).unwrap();
    let mut paint = Paint::default();
    paint.shader = Some(tiny_raster::Shader::Bitmap(shader));
    canvas.draw_rect(Rect::from_ltrb(0.0, 0.0, 12.0, 12.0), &paint);

    for &y in &[0u32, 4, 8] {
        for &x in &[0u32, 4, 8] {
            let p = canvas.bitmap.pixel(x, y).unwrap();
            assert_eq!((p.a, p.r, p.g, p.b), (255, 255, 0, 0), "dot missing at ({x}, {y})");
        }
    }
    // A non-dot texel stays transparent.
    assert_eq!(canvas.bitmap.pixel(1, 1).unwrap().a, 0);
}

#[test]
fn linear_gradient_mirror_folds_back_at_the_axis_length() {
    let shader = LinearGradientShader::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(10.0, 0.0),
        &[Color::from_rgba(0, 0, 0, 255), Color::from_rgba(255, 255, 255, 255)],
        TileMode::Mirror,
    ).unwrap();

    let mut canvas = Canvas::new(21, 1).unwrap();
    let mut paint = Paint::default();
    paint.shader = Some(tiny_raster::Shader::LinearGradient(shader));
    canvas.draw_rect(Rect::from_ltrb(0.0, 0.0, 21.0, 1.0), &paint);

    // Sampling happens at pixel centers (x+0.5), so the mirror fold point
    // at x=10 lands slightly past the reflection — these stay directional
    // (bright near x=10, dark near x=20, mid gray at the halfway point)
    // rather than pinned to the exact endpoints.
    let at = |x: u32| canvas.bitmap.pixel(x, 0).unwrap().r;
    assert!(at(10) > 200, "pixel 10 should be near-white, got {}", at(10));
    assert!(at(20) < 60, "pixel 20 should be near-black, got {}", at(20));
    let mid = at(15);
    assert!((mid as i32 - 127).abs() <= 40, "pixel 15 should be mid-gray, got {}", mid);
}
