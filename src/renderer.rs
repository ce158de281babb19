//! Per-edge wireframe rendering pipeline.
//!
//! One [`Renderer::render`] call is one frame: every edge of every scene
//! object is taken through model -> view -> projection -> perspective
//! divide -> viewport, then clipped to the canvas rectangle and handed to
//! the drawing sink as a 2D line segment.

use crate::camera::Camera;
use crate::clipping::ClipRect;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::scene::Scene;

/// A perspective divide by a near-zero w produces pixel coordinates this
/// far outside any real canvas; such segments are spurious and dropped
/// before clipping.
const DEGENERATE_COORD: f32 = 1000.0;

/// Sink for the renderer's output: one clear per frame, then line segments
/// in pixel coordinates. The host owns the actual raster surface.
pub trait DrawTarget {
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2);
}

/// One projected edge endpoint: pixel coordinates plus the near-plane
/// validity flag.
#[derive(Clone, Copy)]
struct Endpoint {
    valid: bool,
    pixel: Vec2,
}

pub struct Renderer {
    viewport: Mat4,
    clip: ClipRect,
}

impl Renderer {
    /// Builds a renderer for a `width x height` pixel canvas.
    ///
    /// The viewport matrix maps normalized device coordinates in [-1, 1]
    /// to pixel coordinates [0, width] x [0, height]; the depth channel is
    /// carried through at half scale but takes no part in any decision.
    pub fn new(width: u32, height: u32) -> Self {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;

        let mut viewport = Mat4::identity();
        viewport.set(0, 0, half_w);
        viewport.set(0, 3, half_w);
        viewport.set(1, 1, half_h);
        viewport.set(1, 3, half_h);
        viewport.set(2, 2, 0.5);
        viewport.set(2, 3, 0.5);

        Self {
            viewport,
            clip: ClipRect::new(width as f32, height as f32),
        }
    }

    /// Renders one frame of `scene` as seen by `camera` into `target`.
    pub fn render(&self, scene: &Scene, camera: &Camera, target: &mut impl DrawTarget) {
        target.clear();

        let view = camera.look_at();
        for object in scene.objects() {
            let model_view = view * *object.model();
            let vertices = object.vertices();

            for edge in object.edges() {
                let (Some(v0), Some(v1)) = (vertices.get(edge[0]), vertices.get(edge[1])) else {
                    // Malformed edge index; nothing to draw.
                    continue;
                };
                let e0 = self.project(camera, model_view, *v0);
                let e1 = self.project(camera, model_view, *v1);

                // Both endpoints behind the near plane: the edge is fully
                // invisible. One valid endpoint is enough to attempt a draw.
                if !(e0.valid || e1.valid) {
                    continue;
                }

                if Self::is_degenerate(e0.pixel) || Self::is_degenerate(e1.pixel) {
                    continue;
                }

                if let Some((from, to)) = self.clip.clip_segment(e0.pixel, e1.pixel) {
                    target.line(from, to);
                }
            }
        }
    }

    /// Takes one model-space vertex to pixel coordinates.
    fn project(&self, camera: &Camera, model_view: Mat4, vertex: Vec4) -> Endpoint {
        let projected = camera.project_point(model_view * vertex);
        let pixel = self.viewport * projected.ndc.expand();
        Endpoint {
            valid: projected.valid,
            pixel: Vec2::new(pixel.x, pixel.y),
        }
    }

    fn is_degenerate(p: Vec2) -> bool {
        p.x.abs() > DEGENERATE_COORD && p.y.abs() > DEGENERATE_COORD
    }

    /// Viewport transform of a normalized-device-coordinate point. The
    /// returned z is the half-scaled depth channel.
    pub fn ndc_to_pixel(&self, ndc: Vec3) -> Vec3 {
        (self.viewport * ndc.expand()).to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Cuboid;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Recorder {
        clears: u32,
        lines: Vec<(Vec2, Vec2)>,
    }

    impl DrawTarget for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.lines.clear();
        }

        fn line(&mut self, from: Vec2, to: Vec2) {
            self.lines.push((from, to));
        }
    }

    #[test]
    fn viewport_maps_ndc_to_pixels() {
        let renderer = Renderer::new(800, 600);

        let center = renderer.ndc_to_pixel(Vec3::ZERO);
        assert_relative_eq!(center.x, 400.0);
        assert_relative_eq!(center.y, 300.0);

        let top_right = renderer.ndc_to_pixel(Vec3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(top_right.x, 800.0);
        assert_relative_eq!(top_right.y, 600.0);

        let bottom_left = renderer.ndc_to_pixel(Vec3::new(-1.0, -1.0, 0.0));
        assert_relative_eq!(bottom_left.x, 0.0);
        assert_relative_eq!(bottom_left.y, 0.0);
    }

    #[test]
    fn cube_in_front_of_camera_is_drawn() {
        let mut scene = Scene::new();
        scene.add(Box::new(Cuboid::pillar(Vec3::ZERO, None)));
        let camera = Camera::new();
        let renderer = Renderer::new(800, 600);

        let mut out = Recorder::default();
        renderer.render(&scene, &camera, &mut out);

        assert_eq!(out.clears, 1);
        assert!(!out.lines.is_empty());
        for (from, to) in &out.lines {
            for p in [from, to] {
                assert!(p.x >= 0.0 && p.x <= 800.0);
                assert!(p.y >= 0.0 && p.y <= 600.0);
            }
        }
    }

    #[test]
    fn cube_behind_camera_is_skipped_entirely() {
        let mut scene = Scene::new();
        // Camera sits at z = 3 looking down -Z; z = 10 is behind it.
        scene.add(Box::new(Cuboid::pillar(Vec3::new(0.0, 0.0, 10.0), None)));
        let camera = Camera::new();
        let renderer = Renderer::new(800, 600);

        let mut out = Recorder::default();
        renderer.render(&scene, &camera, &mut out);

        assert_eq!(out.clears, 1);
        assert!(out.lines.is_empty());
    }

    #[test]
    fn cube_off_to_the_side_is_clipped_away() {
        let mut scene = Scene::new();
        // In front of the camera but far outside the 90 degree frustum.
        scene.add(Box::new(Cuboid::pillar(Vec3::new(80.0, 0.0, -3.0), None)));
        let camera = Camera::new();
        let renderer = Renderer::new(800, 600);

        let mut out = Recorder::default();
        renderer.render(&scene, &camera, &mut out);

        assert!(out.lines.is_empty());
    }

    #[test]
    fn degenerate_guard_rejects_huge_coordinates() {
        assert!(Renderer::is_degenerate(Vec2::new(5000.0, -4000.0)));
        // Only one huge axis is not degenerate; clipping handles it.
        assert!(!Renderer::is_degenerate(Vec2::new(5000.0, 10.0)));
        assert!(!Renderer::is_degenerate(Vec2::new(10.0, 10.0)));
    }
}
