//! First-person camera.
//!
//! # Coordinate System
//!
//! Right-handed, OpenGL style:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera starts looking down -Z)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles in degrees; the front, right
//! and up basis vectors are recomputed from them after every look change,
//! so the basis stays orthonormal by construction.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::scene::{ObjectId, Scene};

/// Distance of one movement step in world units.
const MOVE_STEP: f32 = 0.2;
/// Angle of one look step in degrees.
const LOOK_STEP: f32 = 5.0;
/// Pitch is clamped to +/- this many degrees.
const PITCH_LIMIT: f32 = 50.0;

const FOV_DEGREES: f32 = 90.0;
const Z_NEAR: f32 = 0.2;
const Z_FAR: f32 = 100.0;

/// Result of pushing a view-space point through the projection matrix.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint {
    /// False when the point sits behind the near half-space; the divided
    /// coordinates are then meaningless and must not be trusted alone.
    pub valid: bool,
    /// Perspective-divided normalized device coordinates.
    pub ndc: Vec3,
}

/// First-person camera with position, yaw/pitch orientation and a fixed
/// perspective projection.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,   // degrees
    pitch: f32, // degrees, clamped to [-PITCH_LIMIT, PITCH_LIMIT]
    projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a camera at (0, 0, 3) looking down -Z.
    pub fn new() -> Self {
        let front = Vec3::new(0.0, 0.0, -1.0);
        let world_up = Vec3::UP;
        let right = front.cross(world_up).normalize();
        let up = right.cross(front).normalize();

        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            front,
            right,
            up,
            world_up,
            yaw: -90.0,
            pitch: 0.0,
            projection: Self::projection_matrix(FOV_DEGREES, Z_NEAR, Z_FAR),
        }
    }

    /// Builds the fixed perspective projection matrix.
    ///
    /// Only five entries are non-zero; the identity default is replaced, not
    /// augmented. The pre-divide depth term lands in row 2 and the w
    /// denominator in row 3.
    fn projection_matrix(fov_degrees: f32, near: f32, far: f32) -> Mat4 {
        let scale = 1.0 / (fov_degrees * 0.5).to_radians().tan();
        let mut m = Mat4::new([[0.0; 4]; 4]);
        m.set(0, 0, scale);
        m.set(1, 1, scale);
        m.set(2, 2, -far / (far - near));
        m.set(3, 2, -far * near / (far - near));
        m.set(2, 3, -1.0);
        m
    }

    /// Projects a view-space point into normalized device coordinates.
    ///
    /// The validity flag is the near-plane guard: when the pre-divide depth
    /// term is negative the perspective divide is numerically unstable, so
    /// callers must consult `valid` before trusting `ndc`.
    pub fn project_point(&self, v: Vec4) -> ProjectedPoint {
        let clip = self.projection * v;
        ProjectedPoint {
            valid: clip.z >= 0.0,
            ndc: clip.retro_project(),
        }
    }

    /// Builds the view matrix from the current pose. Rebuilt on every call;
    /// two calls with no pose change in between return identical matrices.
    pub fn look_at(&self) -> Mat4 {
        let target = self.position + self.front;
        let direction = (self.position - target).normalize();
        let right = self.world_up.cross(direction).normalize();
        let up = direction.cross(right);

        let mut rotation = Mat4::identity();
        let mut translation = Mat4::identity();
        for (i, axis) in [right, up, direction].into_iter().enumerate() {
            rotation.set(i, 0, axis.x);
            rotation.set(i, 1, axis.y);
            rotation.set(i, 2, axis.z);
        }
        translation.set(0, 3, -self.position.x);
        translation.set(1, 3, -self.position.y);
        translation.set(2, 3, -self.position.z);

        rotation * translation
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Steps forward along the horizontally flattened front vector.
    ///
    /// The move is committed only if no scene object collides with the
    /// candidate position; otherwise the position is unchanged and the
    /// blocking object's id is returned.
    pub fn move_forward(&mut self, scene: &Scene) -> Option<ObjectId> {
        self.try_move(scene, self.front.flattened() * MOVE_STEP)
    }

    /// Steps backward along the horizontally flattened front vector.
    pub fn move_backward(&mut self, scene: &Scene) -> Option<ObjectId> {
        self.try_move(scene, -(self.front.flattened() * MOVE_STEP))
    }

    /// Strafes left along the horizontally flattened right vector.
    pub fn move_left(&mut self, scene: &Scene) -> Option<ObjectId> {
        self.try_move(scene, -(self.right.flattened() * MOVE_STEP))
    }

    /// Strafes right along the horizontally flattened right vector.
    pub fn move_right(&mut self, scene: &Scene) -> Option<ObjectId> {
        self.try_move(scene, self.right.flattened() * MOVE_STEP)
    }

    /// Teleports the camera without changing orientation. No collision
    /// check; intended for host-side setup.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn try_move(&mut self, scene: &Scene, step: Vec3) -> Option<ObjectId> {
        let candidate = self.position + step;
        match scene.first_hit(candidate) {
            Some(blocker) => Some(blocker),
            None => {
                self.position = candidate;
                None
            }
        }
    }

    // =========================================================================
    // Look
    // =========================================================================

    /// Pitches up by one look step, clamped.
    pub fn look_up(&mut self) {
        self.pitch = (self.pitch + LOOK_STEP).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Pitches down by one look step, clamped.
    pub fn look_down(&mut self) {
        self.pitch = (self.pitch - LOOK_STEP).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Yaws left by one look step. Yaw is unclamped and wraps through trig.
    pub fn look_left(&mut self) {
        self.yaw -= LOOK_STEP;
        self.update_vectors();
    }

    /// Yaws right by one look step.
    pub fn look_right(&mut self) {
        self.yaw += LOOK_STEP;
        self.update_vectors();
    }

    /// Recomputes the orthonormal basis from yaw and pitch.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw angle in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Cuboid;
    use approx::assert_relative_eq;

    fn assert_orthonormal(camera: &Camera) {
        assert_relative_eq!(camera.front().magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.right().magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.up().magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front().dot(camera.right()), 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front().dot(camera.up()), 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.right().dot(camera.up()), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = Camera::new();
        assert_relative_eq!(camera.front().z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().z, 3.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn pitch_clamps_at_fifty_degrees() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.look_up();
        }
        assert_eq!(camera.pitch(), 50.0);
        for _ in 0..100 {
            camera.look_down();
        }
        assert_eq!(camera.pitch(), -50.0);
    }

    #[test]
    fn basis_stays_orthonormal_under_look_sequences() {
        let mut camera = Camera::new();
        for i in 0..60 {
            match i % 4 {
                0 => camera.look_left(),
                1 => camera.look_up(),
                2 => camera.look_right(),
                _ => camera.look_down(),
            }
            assert_orthonormal(&camera);
        }
        // Long yaw sweep past 360 degrees.
        for _ in 0..100 {
            camera.look_right();
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn projection_matches_closed_form() {
        // fov 90 => scale = 1. For a view-space point (x, y, z, 1):
        // w = -far*near/(far-near) * z.
        let camera = Camera::new();
        let p = Vec4::point(1.0, 0.5, -5.0);
        let out = camera.project_point(p);
        assert!(out.valid);

        let far = 100.0f32;
        let near = 0.2f32;
        let w = -far * near / (far - near) * p.z;
        assert_relative_eq!(out.ndc.x, p.x / w, epsilon = 1e-5);
        assert_relative_eq!(out.ndc.y, p.y / w, epsilon = 1e-5);
    }

    #[test]
    fn points_behind_near_plane_are_invalid() {
        let camera = Camera::new();
        // Positive view-space z is behind the camera in this convention;
        // the pre-divide depth term goes negative.
        let out = camera.project_point(Vec4::point(0.0, 0.0, 1.0));
        assert!(!out.valid);
    }

    #[test]
    fn look_at_is_idempotent() {
        let mut camera = Camera::new();
        camera.look_right();
        camera.look_up();
        let a = camera.look_at();
        let b = camera.look_at();
        assert_eq!(a, b);
    }

    #[test]
    fn look_at_maps_world_to_camera_space() {
        let camera = Camera::new();
        // A point two units straight ahead of the eye.
        let out = camera.look_at() * Vec4::point(0.0, 0.0, 1.0);
        assert_relative_eq!(out.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(out.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(out.z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn movement_is_gated_by_collision() {
        let mut scene = Scene::new();
        // Footprint x,z in [-1, 1] with margin 1.0 => blocks within 2 units.
        scene.add(Box::new(Cuboid::pillar(
            Vec3::ZERO,
            Some(Vec3::new(2.0, 2.0, 2.0)),
        )));

        let mut camera = Camera::new();
        // Walk forward (toward z = 0) from z = 3 until blocked.
        let mut blocked = None;
        for _ in 0..50 {
            blocked = camera.move_forward(&scene);
            if blocked.is_some() {
                break;
            }
        }
        assert!(blocked.is_some());
        let frozen = camera.position();
        assert!(frozen.z > 2.0 - 1e-4);

        // Further attempts leave the position frozen.
        camera.move_forward(&scene);
        assert_eq!(camera.position(), frozen);

        // Moving away again is free.
        assert!(camera.move_backward(&scene).is_none());
        assert!(camera.position().z > frozen.z);
    }

    #[test]
    fn blocked_strafe_keeps_position() {
        let mut scene = Scene::new();
        scene.add(Box::new(Cuboid::pillar(
            Vec3::new(-1.5, 0.0, 3.0),
            Some(Vec3::new(1.0, 2.0, 1.0)),
        )));

        let mut camera = Camera::new();
        let before = camera.position();
        assert!(camera.move_left(&scene).is_some());
        assert_eq!(camera.position(), before);
        assert!(camera.move_right(&scene).is_none());
    }
}
