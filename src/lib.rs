//! A CPU-rendered navigable 3D wireframe world.
//!
//! This crate projects and clips every edge of every scene object on the
//! CPU, each frame, and emits 2D line segments; SDL2 is used only for
//! window management and display. No hardware 3D pipeline, no shading, no
//! hidden-surface removal.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirewalk::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.add(Box::new(Cuboid::pillar(Vec3::ZERO, None)));
//! let camera = Camera::new();
//! let renderer = Renderer::new(800, 600);
//! let mut target = RasterTarget::new(800, 600);
//! renderer.render(&scene, &camera, &mut target);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipping;
pub mod game;
pub mod math;
pub mod objects;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, ProjectedPoint};
pub use renderer::{DrawTarget, Renderer};
pub use scene::{ObjectId, Renderable, Scene};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirewalk::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, ProjectedPoint};

    // Scene
    pub use crate::objects::{Cuboid, EdgeStyle};
    pub use crate::scene::{ObjectId, Renderable, Scene};

    // Rendering
    pub use crate::clipping::ClipRect;
    pub use crate::raster::RasterTarget;
    pub use crate::renderer::{DrawTarget, Renderer};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Game & Window
    pub use crate::game::Game;
    pub use crate::window::{FrameLimiter, InputAction, Window, WindowEvent};
}
