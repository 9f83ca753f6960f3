//! # Solids
//!
//! The DSL object model: primitive shapes and boolean composites as a tagged
//! enum body, each composed with its own [`Transform`]. No inheritance; code
//! that must dispatch on shape kind matches on the variant tag.

use config::constants::{DEFAULT_SEGMENTS, SPHERE_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::backend::{BspBackend, GeometryBackend};
use crate::boolean::BooleanOp;
use crate::error::OomlError;
use crate::transform::Transform;

/// Dimensional description of a primitive shape.
///
/// Immutable once constructed. Materialization re-reads these fields on
/// every call and asks the geometry backend for fresh geometry, so repeated
/// materialization is idempotent but never shares mesh identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Rectangular prism with the given XYZ extents.
    Cube { size: DVec3 },
    /// Sphere, always tessellated at [`SPHERE_SEGMENTS`] resolution.
    Sphere { radius: f64 },
    /// Cylinder or cone section.
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        segments: u32,
    },
}

impl Primitive {
    /// Maps positional cylinder arguments onto an explicit description.
    ///
    /// Two values are radius and height (both radii equal), three are top
    /// radius, bottom radius and height, four add the radial segment count.
    /// Any other length is rejected here, at construction time, rather than
    /// surfacing as undefined dimensions when the shape is materialized.
    pub fn cylinder_from_args(args: &[f64]) -> Result<Self, OomlError> {
        match args {
            &[radius, height] => Ok(Self::Cylinder {
                radius_top: radius,
                radius_bottom: radius,
                height,
                segments: DEFAULT_SEGMENTS,
            }),
            &[radius_top, radius_bottom, height] => Ok(Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments: DEFAULT_SEGMENTS,
            }),
            &[radius_top, radius_bottom, height, segments] => Ok(Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments: segments as u32,
            }),
            _ => Err(OomlError::invalid_argument(format!(
                "cylinder expects 2, 3, or 4 arguments, got {}",
                args.len()
            ))),
        }
    }
}

/// A DSL object: a primitive shape or an eagerly-built boolean composite,
/// plus the transform applied whenever it is materialized.
///
/// `Tree` is the boolean-result representation of whichever BSP backend
/// built the composite; purely primitive expressions never inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid<Tree> {
    transform: Transform,
    body: Body<Tree>,
}

#[derive(Debug, Clone, PartialEq)]
enum Body<Tree> {
    Primitive(Primitive),
    Composite { op: BooleanOp, tree: Tree },
}

impl<Tree> Solid<Tree> {
    pub(crate) fn primitive(primitive: Primitive) -> Self {
        Self {
            transform: Transform::new(),
            body: Body::Primitive(primitive),
        }
    }

    pub(crate) fn composite(op: BooleanOp, tree: Tree) -> Self {
        Self {
            transform: Transform::new(),
            body: Body::Composite { op, tree },
        }
    }

    /// Adds the given offset to the accumulated translation. Chainable.
    #[must_use]
    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.translate(DVec3::new(x, y, z));
        self
    }

    /// Sets the absolute Euler rotation (radians), replacing any earlier
    /// value. Chainable.
    #[must_use]
    pub fn rotate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.transform.rotate(DVec3::new(x, y, z));
        self
    }

    /// Returns the accumulated transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the primitive description, if this solid is one.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match &self.body {
            Body::Primitive(primitive) => Some(primitive),
            Body::Composite { .. } => None,
        }
    }

    /// Returns the operator and stored boolean result, if this solid is a
    /// composite.
    pub fn as_composite(&self) -> Option<(BooleanOp, &Tree)> {
        match &self.body {
            Body::Primitive(_) => None,
            Body::Composite { op, tree } => Some((*op, tree)),
        }
    }

    /// Converts the solid into a renderable backend mesh.
    ///
    /// Primitives request fresh geometry from the backend, wrap it with the
    /// normal-visualization material, and apply the transform. Composites
    /// rederive a mesh from the boolean result stored at construction,
    /// recompute vertex normals, and apply their own transform. Both paths
    /// are re-enterable; nothing is cached.
    ///
    /// Backend failures propagate unhandled as [`OomlError::Geometry`] or
    /// [`OomlError::Boolean`].
    pub fn materialize<G, B>(&self, geometry: &G, bsp: &B) -> Result<G::Mesh, OomlError>
    where
        G: GeometryBackend,
        B: BspBackend<G, Tree = Tree>,
    {
        let mut mesh = match &self.body {
            Body::Primitive(primitive) => {
                let shape = match *primitive {
                    Primitive::Cube { size } => geometry.box_geometry(size),
                    Primitive::Sphere { radius } => {
                        geometry.sphere_geometry(radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS)
                    }
                    Primitive::Cylinder {
                        radius_top,
                        radius_bottom,
                        height,
                        segments,
                    } => geometry.cylinder_geometry(radius_top, radius_bottom, height, segments),
                }
                .map_err(OomlError::geometry)?;
                geometry.mesh(shape, geometry.normal_material())
            }
            Body::Composite { tree, .. } => {
                let mut mesh = bsp
                    .extract(tree, geometry.normal_material())
                    .map_err(OomlError::boolean)?;
                geometry.recompute_normals(&mut mesh);
                mesh
            }
        };
        self.transform.apply(geometry, &mut mesh);
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{StubBsp, StubGeometry, StubShape};

    #[test]
    fn cylinder_two_args_duplicates_radius() {
        let primitive = Primitive::cylinder_from_args(&[5.0, 10.0]).unwrap();
        assert_eq!(
            primitive,
            Primitive::Cylinder {
                radius_top: 5.0,
                radius_bottom: 5.0,
                height: 10.0,
                segments: 20,
            }
        );
    }

    #[test]
    fn cylinder_three_args_defaults_segments() {
        let primitive = Primitive::cylinder_from_args(&[5.0, 7.0, 10.0]).unwrap();
        assert_eq!(
            primitive,
            Primitive::Cylinder {
                radius_top: 5.0,
                radius_bottom: 7.0,
                height: 10.0,
                segments: 20,
            }
        );
    }

    #[test]
    fn cylinder_four_args_all_explicit() {
        let primitive = Primitive::cylinder_from_args(&[5.0, 7.0, 10.0, 8.0]).unwrap();
        assert_eq!(
            primitive,
            Primitive::Cylinder {
                radius_top: 5.0,
                radius_bottom: 7.0,
                height: 10.0,
                segments: 8,
            }
        );
    }

    #[test]
    fn cylinder_unsupported_arity_fails_fast() {
        for args in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0, 4.0, 5.0][..]] {
            let err = Primitive::cylinder_from_args(args).unwrap_err();
            assert!(
                matches!(err, OomlError::InvalidArgument { .. }),
                "expected InvalidArgument for {} args",
                args.len()
            );
        }
    }

    #[test]
    fn primitive_materialization_is_fresh_each_call() {
        let geometry = StubGeometry::new();
        let bsp = StubBsp::new();
        let cube = crate::cube(1.0, 1.0, 1.0);

        let first = cube.materialize(&geometry, &bsp).unwrap();
        let second = cube.materialize(&geometry, &bsp).unwrap();

        // Equivalent descriptions, distinct identities.
        assert_eq!(first.shape, second.shape);
        assert_ne!(first.stamp, second.stamp);
        assert_eq!(geometry.construction_count(), 2);
    }

    #[test]
    fn sphere_uses_fixed_tessellation() {
        let geometry = StubGeometry::new();
        let bsp = StubBsp::new();
        let mesh = crate::sphere(3.0).materialize(&geometry, &bsp).unwrap();

        assert_eq!(
            mesh.shape,
            StubShape::Sphere {
                radius: 3.0,
                width_segments: 20,
                height_segments: 20,
            }
        );
    }

    #[test]
    fn primitive_transform_is_applied_to_mesh() {
        let geometry = StubGeometry::new();
        let bsp = StubBsp::new();
        let mesh = crate::cube(1.0, 2.0, 3.0)
            .translate(1.0, 0.0, 0.0)
            .translate(2.0, 0.0, 0.0)
            .rotate(0.0, 0.5, 0.0)
            .materialize(&geometry, &bsp)
            .unwrap();

        assert_eq!(mesh.position, DVec3::new(3.0, 0.0, 0.0));
        assert_eq!(mesh.rotation, DVec3::new(0.0, 0.5, 0.0));
        assert!(!mesh.normals_recomputed);
    }

    #[test]
    fn geometry_errors_propagate_through_materialize() {
        let geometry = StubGeometry::new();
        let bsp = StubBsp::new();
        let err = crate::sphere(-1.0)
            .materialize(&geometry, &bsp)
            .unwrap_err();
        assert!(matches!(err, OomlError::Geometry(_)));
    }
}
