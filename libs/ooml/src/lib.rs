//! # OOML
//!
//! A tiny object-oriented modeling DSL for constructive solid geometry.
//! Callers describe primitive solids (cubes, spheres, cylinders), combine
//! them with boolean set operations, and materialize renderable meshes.
//!
//! ## Architecture
//!
//! ```text
//! factory functions → Solid (Primitive | Composite) → materialize → Mesh
//!                                   │
//!                     GeometryBackend + BspBackend (external collaborators)
//! ```
//!
//! All geometry tessellation and boolean algebra is delegated: a scene-graph
//! geometry library behind [`GeometryBackend`] and a BSP boolean-mesh
//! library behind [`BspBackend`]. This crate is the adapter between the DSL
//! surface and those two traits. The [`stub`] module ships symbolic
//! in-memory implementations so everything is testable without a rendering
//! engine.
//!
//! Boolean composites are built *eagerly*: `union`, `difference` and
//! `intersection` materialize both operands and compute the boolean result
//! at call time, retaining only the result tree. Materializing the composite
//! later only converts that stored tree back into a mesh.
//!
//! ## Usage
//!
//! ```rust
//! use ooml::stub::{StubBsp, StubGeometry};
//!
//! let geometry = StubGeometry::new();
//! let bsp = StubBsp::new();
//!
//! let plate = ooml::cube(10.0, 10.0, 2.0);
//! let hole = ooml::cylinder(3.0, 4.0).translate(0.0, 0.0, -1.0);
//! let part = ooml::difference(&geometry, &bsp, plate, hole)?;
//!
//! let mesh = part.translate(5.0, 0.0, 0.0).materialize(&geometry, &bsp)?;
//! assert_eq!(mesh.position.x, 5.0);
//! # Ok::<(), ooml::OomlError>(())
//! ```

pub mod backend;
pub mod boolean;
pub mod error;
pub mod solid;
pub mod stub;
pub mod transform;

pub use backend::{BspBackend, GeometryBackend};
pub use boolean::{build_boolean, compose, BooleanOp};
pub use error::OomlError;
pub use solid::{Primitive, Solid};
pub use transform::Transform;

use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;

/// Builds a rectangular prism with the given XYZ extents.
pub fn cube<Tree>(sx: f64, sy: f64, sz: f64) -> Solid<Tree> {
    Solid::primitive(Primitive::Cube {
        size: DVec3::new(sx, sy, sz),
    })
}

/// Builds a sphere with the given radius.
///
/// Tessellation resolution is fixed at 20x20 segments and is not
/// configurable through the DSL.
pub fn sphere<Tree>(radius: f64) -> Solid<Tree> {
    Solid::primitive(Primitive::Sphere { radius })
}

/// Builds a straight cylinder: equal top and bottom radii, default radial
/// segment count.
pub fn cylinder<Tree>(radius: f64, height: f64) -> Solid<Tree> {
    Solid::primitive(Primitive::Cylinder {
        radius_top: radius,
        radius_bottom: radius,
        height,
        segments: DEFAULT_SEGMENTS,
    })
}

/// Builds a cone section with distinct top and bottom radii, default radial
/// segment count.
pub fn cylinder_cone<Tree>(radius_top: f64, radius_bottom: f64, height: f64) -> Solid<Tree> {
    Solid::primitive(Primitive::Cylinder {
        radius_top,
        radius_bottom,
        height,
        segments: DEFAULT_SEGMENTS,
    })
}

/// Builds a cylinder or cone with every parameter explicit.
pub fn cylinder_full<Tree>(
    radius_top: f64,
    radius_bottom: f64,
    height: f64,
    segments: u32,
) -> Solid<Tree> {
    Solid::primitive(Primitive::Cylinder {
        radius_top,
        radius_bottom,
        height,
        segments,
    })
}

/// Builds a cylinder from a positional argument list.
///
/// Rejects argument counts other than 2, 3 or 4 with
/// [`OomlError::InvalidArgument`] instead of deferring the failure to
/// materialization. See [`Primitive::cylinder_from_args`] for the mapping.
pub fn cylinder_from_args<Tree>(args: &[f64]) -> Result<Solid<Tree>, OomlError> {
    Primitive::cylinder_from_args(args).map(Solid::primitive)
}

/// Builds the union of two solids: all geometry from both operands.
///
/// Operands are materialized and combined now; see [`compose`].
pub fn union<G, B>(
    geometry: &G,
    bsp: &B,
    lhs: Solid<B::Tree>,
    rhs: Solid<B::Tree>,
) -> Result<Solid<B::Tree>, OomlError>
where
    G: GeometryBackend,
    B: BspBackend<G>,
{
    compose(geometry, bsp, BooleanOp::Union, lhs, rhs)
}

/// Builds the difference of two solids: `lhs` minus `rhs`. Ordered.
///
/// Operands are materialized and combined now; see [`compose`].
pub fn difference<G, B>(
    geometry: &G,
    bsp: &B,
    lhs: Solid<B::Tree>,
    rhs: Solid<B::Tree>,
) -> Result<Solid<B::Tree>, OomlError>
where
    G: GeometryBackend,
    B: BspBackend<G>,
{
    compose(geometry, bsp, BooleanOp::Difference, lhs, rhs)
}

/// Builds the intersection of two solids: geometry present in both.
///
/// Operands are materialized and combined now; see [`compose`].
pub fn intersection<G, B>(
    geometry: &G,
    bsp: &B,
    lhs: Solid<B::Tree>,
    rhs: Solid<B::Tree>,
) -> Result<Solid<B::Tree>, OomlError>
where
    G: GeometryBackend,
    B: BspBackend<G>,
{
    compose(geometry, bsp, BooleanOp::Intersection, lhs, rhs)
}
