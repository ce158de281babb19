//! CPU raster surface: an ARGB color buffer implementing [`DrawTarget`]
//! with Bresenham line drawing.

use crate::math::vec2::Vec2;
use crate::renderer::DrawTarget;

pub(crate) const COLOR_BACKGROUND: u32 = 0xFF1E1E1E;
pub(crate) const COLOR_LINE: u32 = 0xFFE0E0E0;

pub struct RasterTarget {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl RasterTarget {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![COLOR_BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            // Flip y so pixel row 0 is the top of the buffer while the
            // pipeline's y axis points up.
            let row = self.height as i32 - 1 - y;
            let index = (row as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm:
    /// integer arithmetic only, stepping along the major axis and tracking
    /// an error term to decide when to also step along the minor axis.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_step = if x0 < x1 { 1 } else { -1 };
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }
    }

    /// The buffer as ARGB8888 bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl DrawTarget for RasterTarget {
    fn clear(&mut self) {
        self.color_buffer.fill(COLOR_BACKGROUND);
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.draw_line(
            from.x.round() as i32,
            from.y.round() as i32,
            to.x.round() as i32,
            to.y.round() as i32,
            COLOR_LINE,
        );
    }
}
