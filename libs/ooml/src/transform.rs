//! # Transform
//!
//! Shared position/rotation state composed into every DSL object and applied
//! to meshes at materialization time.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::backend::GeometryBackend;

/// Accumulated spatial state shared by every solid variant.
///
/// Translation *accumulates*: each call adds its offset to the running total.
/// Rotation is *replaced*: the most recent call wins. Angles are Euler
/// radians and intentionally unvalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    translation: DVec3,
    rotation: DVec3,
}

impl Transform {
    /// Identity transform: zero offset, zero rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given offset to the accumulated translation.
    pub fn translate(&mut self, offset: DVec3) {
        self.translation += offset;
    }

    /// Sets the absolute Euler rotation, discarding any earlier value.
    pub fn rotate(&mut self, angles: DVec3) {
        self.rotation = angles;
    }

    /// Returns the accumulated translation offset.
    #[inline]
    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    /// Returns the current Euler rotation triple.
    #[inline]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    /// Writes the accumulated offset and rotation onto a backend mesh.
    ///
    /// The mesh is mutated in place; position and rotation are set as
    /// absolute values, never added to whatever the mesh held before.
    pub fn apply<G: GeometryBackend>(&self, geometry: &G, mesh: &mut G::Mesh) {
        geometry.set_position(mesh, self.translation);
        geometry.set_rotation(mesh, self.rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubGeometry;

    #[test]
    fn translation_accumulates_across_calls() {
        let mut transform = Transform::new();
        transform.translate(DVec3::new(1.0, 0.0, 0.0));
        transform.translate(DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(transform.translation(), DVec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_overwrites_previous_value() {
        let mut transform = Transform::new();
        transform.rotate(DVec3::new(1.0, 0.0, 0.0));
        transform.rotate(DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.rotation(), DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn apply_sets_absolute_spatial_fields() {
        let geometry = StubGeometry::new();
        let shape = geometry
            .box_geometry(DVec3::splat(1.0))
            .expect("valid box dimensions");
        let mut mesh = geometry.mesh(shape, geometry.normal_material());

        let mut transform = Transform::new();
        transform.translate(DVec3::new(5.0, -2.0, 0.5));
        transform.rotate(DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));

        transform.apply(&geometry, &mut mesh);
        assert_eq!(mesh.position, DVec3::new(5.0, -2.0, 0.5));
        approx::assert_relative_eq!(mesh.rotation.y, std::f64::consts::FRAC_PI_2);

        // Applying twice does not double the offset.
        transform.apply(&geometry, &mut mesh);
        assert_eq!(mesh.position, DVec3::new(5.0, -2.0, 0.5));
    }
}
