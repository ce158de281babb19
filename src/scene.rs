//! Scene graph: a flat, ordered collection of renderable objects.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Stable handle for an object added to a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

/// Contract every renderable object satisfies: a wireframe (homogeneous
/// model-space vertices plus vertex-index edge pairs), a model transform,
/// and a ground-plane collision test against a candidate eye position.
pub trait Renderable {
    /// Model-space vertex positions, w = 1.
    fn vertices(&self) -> &[Vec4];

    /// Edges as pairs of indices into [`Renderable::vertices`].
    fn edges(&self) -> &[[usize; 2]];

    /// Model-to-world transform (translation plus optional scale).
    fn model(&self) -> &Mat4;

    /// Whether a candidate eye position collides with this object's
    /// flattened XZ footprint.
    fn check_collision(&self, eye: Vec3) -> bool;
}

/// Ordered, mutable collection of renderable objects.
///
/// Orchestration adds and removes objects; the render and collision paths
/// only read it.
#[derive(Default)]
pub struct Scene {
    objects: Vec<(ObjectId, Box<dyn Renderable>)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object, returning its handle.
    pub fn add(&mut self, object: Box<dyn Renderable>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, object));
        id
    }

    /// Removes the object with the given handle, if present.
    pub fn remove(&mut self, id: ObjectId) {
        self.objects.retain(|(oid, _)| *oid != id);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &dyn Renderable> {
        self.objects.iter().map(|(_, o)| o.as_ref())
    }

    /// First object whose footprint contains `eye`, scanning in insertion
    /// order and short-circuiting on the first hit.
    pub fn first_hit(&self, eye: Vec3) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, o)| o.check_collision(eye))
            .map(|(id, _)| *id)
    }
}
