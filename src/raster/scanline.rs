//! Scanline triangle fill with a depth test.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate.
//! 2. **Interpolate edges**: X and `1/z` along the long edge (top to bottom)
//!    and along the two short edges joined at the middle vertex. Both lists
//!    hold one sample per scanline.
//! 3. **Pick sides**: whichever list has the smaller X at the middle row is
//!    the left boundary.
//! 4. **Fill spans**: for each row, step `1/z` from the left to the right
//!    boundary with a [`Stepper`] and write every pixel that passes the depth
//!    test.
//!
//! ```text
//!        v0
//!        /\
//!       /  \   short edges v0->v1->v2
//!  v1  <    \
//!       \    \ long edge v0->v2
//!        \____\
//!             v2
//! ```
//!
//! `1/z` is linear in screen space, so interpolating it per pixel gives
//! correct occlusion without a perspective divide per pixel.

use crate::color::Color;
use crate::render::{edge_interpolate, DepthBuffer, FrameBuffer, Stepper};

/// A projected vertex: integer canvas coordinates plus camera-space depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub z: f32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Fills a triangle given in centered, Y-up canvas coordinates.
///
/// Only pixels strictly closer than what the depth buffer already holds are
/// written. Returns the number of pixels written.
pub fn fill_triangle(
    points: [ScreenPoint; 3],
    color: Color,
    depth: &mut DepthBuffer,
    buffer: &mut FrameBuffer,
) -> usize {
    let mut sorted = points;
    sorted.sort_by_key(|p| p.y);
    let [p0, p1, p2] = sorted;

    let (x02, x012) = edge_interpolate(
        p0.y,
        p0.x as f32,
        p1.y,
        p1.x as f32,
        p2.y,
        p2.x as f32,
    );
    let (z02, z012) = edge_interpolate(p0.y, 1.0 / p0.z, p1.y, 1.0 / p1.z, p2.y, 1.0 / p2.z);

    let middle = x02.len() / 2;
    let (x_left, x_right, z_left, z_right) = if x02[middle] < x012[middle] {
        (x02, x012, z02, z012)
    } else {
        (x012, x02, z012, z02)
    };

    let mut written = 0;
    for (row, y) in (p0.y..=p2.y).enumerate() {
        let xl = x_left[row] as i32;
        let xr = x_right[row] as i32;

        let mut inv_z = Stepper::new(z_left[row], z_right[row], xl.abs_diff(xr));
        for x in xl..=xr {
            let (sx, sy) = buffer.canvas_to_screen(x, y);
            if depth.test_and_set(sx, sy, inv_z.value) {
                buffer.set_pixel(sx, sy, color);
                written += 1;
            }
            inv_z.advance();
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Canvas;

    fn triangle(z: f32) -> [ScreenPoint; 3] {
        [
            ScreenPoint::new(-3, -3, z),
            ScreenPoint::new(3, -3, z),
            ScreenPoint::new(0, 3, z),
        ]
    }

    #[test]
    fn fills_interior_and_leaves_outside() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let mut depth = DepthBuffer::new(10, 10);
        let mut fb = canvas.as_framebuffer();

        let written = fill_triangle(triangle(2.0), Color::RED, &mut depth, &mut fb);
        assert!(written > 0);

        let (cx, cy) = fb.canvas_to_screen(0, 0);
        assert_eq!(fb.get_pixel(cx, cy), Some([255, 0, 0]));
        let (x, y) = fb.canvas_to_screen(-4, 3);
        assert_eq!(fb.get_pixel(x, y), Some([0, 0, 0]));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let mut a = Canvas::new(12, 12).unwrap();
        let mut b = Canvas::new(12, 12).unwrap();
        let [p, q, r] = triangle(2.0);

        fill_triangle([p, q, r], Color::BLUE, &mut DepthBuffer::new(12, 12), &mut a.as_framebuffer());
        fill_triangle([r, p, q], Color::BLUE, &mut DepthBuffer::new(12, 12), &mut b.as_framebuffer());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        for near_first in [true, false] {
            let mut canvas = Canvas::new(10, 10).unwrap();
            let mut depth = DepthBuffer::new(10, 10);
            let mut fb = canvas.as_framebuffer();

            let draws = [(triangle(2.0), Color::GREEN), (triangle(5.0), Color::RED)];
            let order: Vec<_> = if near_first {
                draws.to_vec()
            } else {
                draws.iter().rev().copied().collect()
            };
            for (points, color) in order {
                fill_triangle(points, color, &mut depth, &mut fb);
            }

            let (cx, cy) = fb.canvas_to_screen(0, 0);
            assert_eq!(fb.get_pixel(cx, cy), Some([0, 255, 0]));
        }
    }

    #[test]
    fn degenerate_row_draws_a_line() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        let mut depth = DepthBuffer::new(8, 8);
        let points = [
            ScreenPoint::new(-2, 0, 1.0),
            ScreenPoint::new(2, 0, 1.0),
            ScreenPoint::new(0, 0, 1.0),
        ];
        let written = fill_triangle(points, Color::WHITE, &mut depth, &mut canvas.as_framebuffer());
        assert_eq!(written, 5);
    }

    #[test]
    fn off_canvas_triangle_writes_nothing() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let mut depth = DepthBuffer::new(4, 4);
        let points = [
            ScreenPoint::new(20, 20, 1.0),
            ScreenPoint::new(30, 20, 1.0),
            ScreenPoint::new(25, 30, 1.0),
        ];
        assert_eq!(
            fill_triangle(points, Color::WHITE, &mut depth, &mut canvas.as_framebuffer()),
            0
        );
    }
}
