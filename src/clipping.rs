//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! Each endpoint is classified with a 4-bit region code; a segment is
//! accepted once both codes are zero, rejected as soon as the codes share a
//! set bit (both endpoints outside on the same side), and otherwise pulled
//! toward the rectangle one edge intersection at a time.

use crate::math::vec2::Vec2;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Each iteration resolves one rectangle edge, so four suffice; anything
/// beyond that means a degenerate input and the segment is dropped.
const MAX_ITERATIONS: u32 = 4;

/// The clip rectangle `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug)]
pub struct ClipRect {
    pub width: f32,
    pub height: f32,
}

impl ClipRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn out_code(&self, x: f32, y: f32) -> u8 {
        let mut code = INSIDE;
        if x < 0.0 {
            code |= LEFT;
        } else if x > self.width {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= BOTTOM;
        } else if y > self.height {
            code |= TOP;
        }
        code
    }

    /// Clips the segment `p0-p1` against the rectangle.
    ///
    /// Returns the visible sub-segment, or `None` if nothing of the segment
    /// lies inside.
    pub fn clip_segment(&self, p0: Vec2, p1: Vec2) -> Option<(Vec2, Vec2)> {
        // NaN endpoints compare false against every bound and would be
        // classified as inside.
        if [p0.x, p0.y, p1.x, p1.y].iter().any(|v| !v.is_finite()) {
            return None;
        }

        let (mut x0, mut y0) = (p0.x, p0.y);
        let (mut x1, mut y1) = (p1.x, p1.y);
        let mut code0 = self.out_code(x0, y0);
        let mut code1 = self.out_code(x1, y1);

        for _ in 0..=MAX_ITERATIONS {
            if (code0 | code1) == 0 {
                return Some((Vec2::new(x0, y0), Vec2::new(x1, y1)));
            }
            if (code0 & code1) != 0 {
                return None;
            }

            // Pick an endpoint that is outside and slide it onto the
            // violated rectangle edge.
            let out_code = if code0 != 0 { code0 } else { code1 };
            let (x, y) = if out_code & TOP != 0 {
                (x0 + (x1 - x0) * (self.height - y0) / (y1 - y0), self.height)
            } else if out_code & BOTTOM != 0 {
                (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
            } else if out_code & RIGHT != 0 {
                (self.width, y0 + (y1 - y0) * (self.width - x0) / (x1 - x0))
            } else {
                (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
            };

            if out_code == code0 {
                x0 = x;
                y0 = y;
                code0 = self.out_code(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = self.out_code(x1, y1);
            }
        }

        // Ran out of edges to intersect; treat as not visible.
        None
    }
}
