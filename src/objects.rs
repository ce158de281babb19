//! Wireframe cuboids: the one object family the maze is built from.
//!
//! All variants share the unit-cube vertex list and differ only in edge
//! topology (full cage vs. top/bottom outline) and collision margin. Side
//! effects on collision (winning the game when the goal is touched) belong
//! to the host layer; objects only answer yes/no.

use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::scene::Renderable;

/// Unit cube corners, top face first. The collision footprint is derived
/// from the first four (the top face).
const CUBE_VERTICES: [Vec4; 8] = [
    Vec4::point(-0.5, 0.5, 0.5),
    Vec4::point(0.5, 0.5, 0.5),
    Vec4::point(0.5, 0.5, -0.5),
    Vec4::point(-0.5, 0.5, -0.5),
    Vec4::point(-0.5, -0.5, 0.5),
    Vec4::point(0.5, -0.5, 0.5),
    Vec4::point(0.5, -0.5, -0.5),
    Vec4::point(-0.5, -0.5, -0.5),
];

/// Top ring, bottom ring, four verticals.
const SOLID_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Top and bottom rings only; walls read better without verticals.
const OUTLINE_EDGES: [[usize; 2]; 8] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
];

/// Which edges of the cube are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
    /// All twelve edges.
    Solid,
    /// Top and bottom rings only.
    Outline,
}

/// An axis-aligned wireframe cuboid with a cached ground-plane footprint.
pub struct Cuboid {
    edges: &'static [[usize; 2]],
    model: Mat4,
    /// World-space footprints of the top-face corners, in vertex order.
    collision_points: [Vec2; 4],
    margin: f32,
}

impl Cuboid {
    /// Generic constructor; prefer [`Cuboid::pillar`], [`Cuboid::wall`] or
    /// [`Cuboid::goal`].
    pub fn new(location: Vec3, scale: Option<Vec3>, style: EdgeStyle, margin: f32) -> Self {
        let model = match scale {
            Some(s) => {
                Mat4::translation(location.x, location.y, location.z) * Mat4::scaling(s.x, s.y, s.z)
            }
            None => Mat4::translation(location.x, location.y, location.z),
        };

        let collision_points = [
            Vec2::from_xz4(model * CUBE_VERTICES[0]),
            Vec2::from_xz4(model * CUBE_VERTICES[1]),
            Vec2::from_xz4(model * CUBE_VERTICES[2]),
            Vec2::from_xz4(model * CUBE_VERTICES[3]),
        ];

        Self {
            edges: match style {
                EdgeStyle::Solid => &SOLID_EDGES,
                EdgeStyle::Outline => &OUTLINE_EDGES,
            },
            model,
            collision_points,
            margin,
        }
    }

    /// Free-standing obstacle: full cage, tight collision margin.
    pub fn pillar(location: Vec3, scale: Option<Vec3>) -> Self {
        Self::new(location, scale, EdgeStyle::Solid, 1.0)
    }

    /// Arena wall segment: outline only, wide margin so the camera cannot
    /// poke through a corner.
    pub fn wall(location: Vec3, scale: Option<Vec3>) -> Self {
        Self::new(location, scale, EdgeStyle::Outline, 1.5)
    }

    /// The collectable the player must reach. Same wide margin as walls so
    /// touching it from any side registers.
    pub fn goal(location: Vec3, scale: Option<Vec3>) -> Self {
        Self::new(location, scale, EdgeStyle::Solid, 1.5)
    }
}

impl Renderable for Cuboid {
    fn vertices(&self) -> &[Vec4] {
        &CUBE_VERTICES
    }

    fn edges(&self) -> &[[usize; 2]] {
        self.edges
    }

    fn model(&self) -> &Mat4 {
        &self.model
    }

    fn check_collision(&self, eye: Vec3) -> bool {
        let eye = Vec2::from_xz(eye);
        let m = self.margin;
        let [p0, p1, p2, _] = self.collision_points;

        p0.x <= eye.x + m && eye.x - m <= p1.x && p2.y <= eye.y + m && eye.y - m <= p1.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn model_carries_translation_and_scale() {
        let c = Cuboid::pillar(Vec3::new(2.0, 0.0, -3.0), Some(Vec3::new(1.0, 2.0, 1.0)));
        let top = *c.model() * CUBE_VERTICES[0];
        assert_relative_eq!(top.x, 1.5);
        assert_relative_eq!(top.y, 1.0);
        assert_relative_eq!(top.z, -2.5);
        assert_relative_eq!(top.w, 1.0);
    }

    #[test]
    fn pillar_footprint_with_margin() {
        // Footprint x,z in [-0.5, 0.5]; margin 1.0 extends it to [-1.5, 1.5].
        let c = Cuboid::pillar(Vec3::ZERO, None);
        assert!(c.check_collision(Vec3::new(1.4, 0.0, 0.0)));
        assert!(!c.check_collision(Vec3::new(1.6, 0.0, 0.0)));
        assert!(c.check_collision(Vec3::new(0.0, 0.0, -1.4)));
        assert!(!c.check_collision(Vec3::new(0.0, 0.0, -1.6)));
    }

    #[test]
    fn wall_margin_is_wider() {
        let c = Cuboid::wall(Vec3::ZERO, None);
        assert!(c.check_collision(Vec3::new(1.9, 0.0, 0.0)));
        assert!(!c.check_collision(Vec3::new(2.1, 0.0, 0.0)));
    }

    #[test]
    fn collision_ignores_height() {
        let c = Cuboid::pillar(Vec3::ZERO, None);
        assert!(c.check_collision(Vec3::new(0.0, 50.0, 0.0)));
    }

    #[test]
    fn edge_styles_differ_in_topology() {
        let solid = Cuboid::pillar(Vec3::ZERO, None);
        let outline = Cuboid::wall(Vec3::ZERO, None);
        assert_eq!(solid.edges().len(), 12);
        assert_eq!(outline.edges().len(), 8);
        // Every edge index refers to an existing vertex.
        for edge in solid.edges() {
            assert!(edge[0] < solid.vertices().len());
            assert!(edge[1] < solid.vertices().len());
        }
    }
}
