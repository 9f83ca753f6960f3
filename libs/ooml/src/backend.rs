//! # Backend Traits
//!
//! Abstract interfaces over the two external collaborators: the scene-graph
//! geometry library and the BSP boolean-mesh library. The DSL core never
//! tessellates geometry or splits polygons itself; it only drives these
//! traits, so it can be exercised against the in-memory stubs in
//! [`crate::stub`] as well as a real rendering engine.

use glam::DVec3;

use crate::boolean::BooleanOp;

/// Scene-graph geometry capabilities consumed by the DSL.
///
/// Mirrors the surface of a rendering library: construct raw primitive
/// geometry, wrap it with a material into a mesh, and mutate the mesh's
/// spatial fields.
pub trait GeometryBackend {
    /// Raw primitive geometry before it is wrapped into a mesh.
    type Geometry;
    /// Surface material attached when wrapping geometry into a mesh.
    type Material;
    /// Renderable mesh object with mutable spatial fields.
    type Mesh;
    /// Failure surface of geometry construction.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Constructs rectangular-prism geometry with the given XYZ extents.
    fn box_geometry(&self, size: DVec3) -> Result<Self::Geometry, Self::Error>;

    /// Constructs sphere geometry tessellated into the given latitude and
    /// longitude segment counts.
    fn sphere_geometry(
        &self,
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    ) -> Result<Self::Geometry, Self::Error>;

    /// Constructs cylinder or cone geometry. Equal radii give a cylinder, a
    /// zero radius gives a cone.
    fn cylinder_geometry(
        &self,
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    ) -> Result<Self::Geometry, Self::Error>;

    /// Normal-visualization debug material; takes no configuration.
    fn normal_material(&self) -> Self::Material;

    /// Wraps geometry and a material into a renderable mesh.
    fn mesh(&self, geometry: Self::Geometry, material: Self::Material) -> Self::Mesh;

    /// Sets the mesh's absolute position.
    fn set_position(&self, mesh: &mut Self::Mesh, position: DVec3);

    /// Sets the mesh's absolute Euler rotation (radians).
    fn set_rotation(&self, mesh: &mut Self::Mesh, rotation: DVec3);

    /// Recomputes vertex normals in place.
    ///
    /// Boolean results need this: faces created by polygon splitting carry
    /// stale normals.
    fn recompute_normals(&self, mesh: &mut Self::Mesh);
}

/// BSP boolean-mesh capabilities consumed by the DSL.
///
/// Parameterized over the geometry backend whose meshes and materials it
/// consumes, the way a BSP library wraps the scene-graph library's mesh type.
pub trait BspBackend<G: GeometryBackend> {
    /// Boolean-result tree retained by composites between construction and
    /// materialization.
    type Tree;
    /// Failure surface of tree construction and conversion.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Wraps a mesh into a BSP tree representation.
    fn build(&self, mesh: &G::Mesh) -> Result<Self::Tree, Self::Error>;

    /// Applies a binary boolean operator to two trees, returning a new tree.
    ///
    /// [`BooleanOp::Difference`] is ordered: `lhs` minus `rhs`. Union and
    /// intersection inherit whatever ordering policy the backend implements.
    fn combine(
        &self,
        op: BooleanOp,
        lhs: &Self::Tree,
        rhs: &Self::Tree,
    ) -> Result<Self::Tree, Self::Error>;

    /// Converts a tree back into a renderable mesh with the given material.
    fn extract(&self, tree: &Self::Tree, material: G::Material) -> Result<G::Mesh, Self::Error>;
}
