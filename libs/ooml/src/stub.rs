//! # Stub Backends
//!
//! Symbolic in-memory implementations of the backend traits. Meshes record
//! what was asked of the geometry library instead of holding triangles, and
//! boolean results are expression trees, so tests can assert on structure
//! and call counts without a real rendering or BSP engine.
//!
//! The stubs validate dimensions the way a real tessellator would, which
//! gives the adapter's error-propagation path something to propagate.

use std::cell::Cell;

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use thiserror::Error;

use crate::backend::{BspBackend, GeometryBackend};
use crate::boolean::BooleanOp;

/// Errors raised by the stub backends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StubError {
    /// Dimensions that cannot form a solid.
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Geometry description captured in place of real triangle data.
#[derive(Debug, Clone, PartialEq)]
pub enum StubShape {
    Box {
        size: DVec3,
    },
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    },
    /// Mesh rederived from a stored boolean result.
    Boolean(StubTree),
}

/// The normal-visualization material. Carries no configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubMaterial;

/// Snapshot of a mesh the stub geometry library produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StubMesh {
    /// Unique per construction, so identity freshness is observable.
    pub stamp: u64,
    pub shape: StubShape,
    pub material: StubMaterial,
    /// Absolute position, as set by the transform application.
    pub position: DVec3,
    /// Absolute Euler rotation in radians.
    pub rotation: DVec3,
    /// Whether vertex normals were recomputed after construction.
    pub normals_recomputed: bool,
}

/// Symbolic boolean-result tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StubTree {
    Leaf(Box<StubMesh>),
    Node {
        op: BooleanOp,
        lhs: Box<StubTree>,
        rhs: Box<StubTree>,
    },
}

impl StubTree {
    /// Canonical form for solid-equivalence comparisons.
    ///
    /// Identity stamps are erased and operands of commutative operators are
    /// put into a deterministic order, so `union(a, b)` and `union(b, a)`
    /// compare equal while ordered operators keep their operand order.
    pub fn canonicalize(&self) -> StubTree {
        match self {
            StubTree::Leaf(mesh) => {
                let mut mesh = (**mesh).clone();
                mesh.stamp = 0;
                if let StubShape::Boolean(tree) = &mesh.shape {
                    let canonical = tree.canonicalize();
                    mesh.shape = StubShape::Boolean(canonical);
                }
                StubTree::Leaf(Box::new(mesh))
            }
            StubTree::Node { op, lhs, rhs } => {
                let lhs = lhs.canonicalize();
                let rhs = rhs.canonicalize();
                // Ordering key is the debug rendering; adequate for the
                // structural comparisons the stubs exist for.
                if op.is_commutative() && format!("{rhs:?}") < format!("{lhs:?}") {
                    StubTree::Node {
                        op: *op,
                        lhs: Box::new(rhs),
                        rhs: Box::new(lhs),
                    }
                } else {
                    StubTree::Node {
                        op: *op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    }
                }
            }
        }
    }
}

/// Stub scene-graph geometry library.
///
/// Counts constructions and hands out monotonically increasing identity
/// stamps through interior mutability, keeping the trait surface `&self`.
#[derive(Debug, Default)]
pub struct StubGeometry {
    next_stamp: Cell<u64>,
    constructions: Cell<u64>,
}

impl StubGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primitive geometry constructions performed so far.
    pub fn construction_count(&self) -> u64 {
        self.constructions.get()
    }

    fn next_stamp(&self) -> u64 {
        let stamp = self.next_stamp.get();
        self.next_stamp.set(stamp + 1);
        stamp
    }

    fn record_construction(&self) {
        self.constructions.set(self.constructions.get() + 1);
    }
}

impl GeometryBackend for StubGeometry {
    type Geometry = StubShape;
    type Material = StubMaterial;
    type Mesh = StubMesh;
    type Error = StubError;

    fn box_geometry(&self, size: DVec3) -> Result<StubShape, StubError> {
        if size.min_element() <= EPSILON_TOLERANCE {
            return Err(StubError::Degenerate(format!(
                "box dimensions must be positive: {size:?}"
            )));
        }
        self.record_construction();
        Ok(StubShape::Box { size })
    }

    fn sphere_geometry(
        &self,
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    ) -> Result<StubShape, StubError> {
        if radius <= EPSILON_TOLERANCE {
            return Err(StubError::Degenerate(format!(
                "sphere radius must be positive: {radius}"
            )));
        }
        if width_segments < 3 || height_segments < 3 {
            return Err(StubError::Degenerate(format!(
                "sphere segments must be at least 3: {width_segments}x{height_segments}"
            )));
        }
        self.record_construction();
        Ok(StubShape::Sphere {
            radius,
            width_segments,
            height_segments,
        })
    }

    fn cylinder_geometry(
        &self,
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    ) -> Result<StubShape, StubError> {
        if height <= EPSILON_TOLERANCE {
            return Err(StubError::Degenerate(format!(
                "cylinder height must be positive: {height}"
            )));
        }
        if radius_top < 0.0 || radius_bottom < 0.0 {
            return Err(StubError::Degenerate(format!(
                "cylinder radii must be non-negative: r1={radius_top}, r2={radius_bottom}"
            )));
        }
        if radial_segments < 3 {
            return Err(StubError::Degenerate(format!(
                "cylinder segments must be at least 3: {radial_segments}"
            )));
        }
        self.record_construction();
        Ok(StubShape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        })
    }

    fn normal_material(&self) -> StubMaterial {
        StubMaterial
    }

    fn mesh(&self, geometry: StubShape, material: StubMaterial) -> StubMesh {
        StubMesh {
            stamp: self.next_stamp(),
            shape: geometry,
            material,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            normals_recomputed: false,
        }
    }

    fn set_position(&self, mesh: &mut StubMesh, position: DVec3) {
        mesh.position = position;
    }

    fn set_rotation(&self, mesh: &mut StubMesh, rotation: DVec3) {
        mesh.rotation = rotation;
    }

    fn recompute_normals(&self, mesh: &mut StubMesh) {
        mesh.normals_recomputed = true;
    }
}

/// Stub BSP boolean-mesh library over [`StubGeometry`] meshes.
#[derive(Debug, Default)]
pub struct StubBsp {
    next_stamp: Cell<u64>,
    builds: Cell<u64>,
    combines: Cell<u64>,
    extracts: Cell<u64>,
}

impl StubBsp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes wrapped into trees so far.
    pub fn build_count(&self) -> u64 {
        self.builds.get()
    }

    /// Number of boolean combinations performed so far.
    pub fn combine_count(&self) -> u64 {
        self.combines.get()
    }

    /// Number of tree-to-mesh conversions performed so far.
    pub fn extract_count(&self) -> u64 {
        self.extracts.get()
    }

    fn next_stamp(&self) -> u64 {
        let stamp = self.next_stamp.get();
        self.next_stamp.set(stamp + 1);
        // High bit distinguishes BSP-derived meshes from geometry-built ones.
        stamp | (1 << 63)
    }
}

impl BspBackend<StubGeometry> for StubBsp {
    type Tree = StubTree;
    type Error = StubError;

    fn build(&self, mesh: &StubMesh) -> Result<StubTree, StubError> {
        self.builds.set(self.builds.get() + 1);
        Ok(StubTree::Leaf(Box::new(mesh.clone())))
    }

    fn combine(
        &self,
        op: BooleanOp,
        lhs: &StubTree,
        rhs: &StubTree,
    ) -> Result<StubTree, StubError> {
        self.combines.set(self.combines.get() + 1);
        Ok(StubTree::Node {
            op,
            lhs: Box::new(lhs.clone()),
            rhs: Box::new(rhs.clone()),
        })
    }

    fn extract(&self, tree: &StubTree, material: StubMaterial) -> Result<StubMesh, StubError> {
        self.extracts.set(self.extracts.get() + 1);
        Ok(StubMesh {
            stamp: self.next_stamp(),
            shape: StubShape::Boolean(tree.clone()),
            material,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            normals_recomputed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(geometry: &StubGeometry, size: f64) -> StubTree {
        let shape = geometry.box_geometry(DVec3::splat(size)).unwrap();
        let mesh = geometry.mesh(shape, geometry.normal_material());
        StubTree::Leaf(Box::new(mesh))
    }

    #[test]
    fn geometry_rejects_degenerate_dimensions() {
        let geometry = StubGeometry::new();
        assert!(geometry.box_geometry(DVec3::new(1.0, 0.0, 1.0)).is_err());
        assert!(geometry.sphere_geometry(-2.0, 20, 20).is_err());
        assert!(geometry.cylinder_geometry(1.0, 1.0, -5.0, 20).is_err());
        assert!(geometry.cylinder_geometry(1.0, 1.0, 5.0, 2).is_err());
        assert_eq!(geometry.construction_count(), 0);
    }

    #[test]
    fn stamps_are_unique_per_mesh() {
        let geometry = StubGeometry::new();
        let a = geometry.mesh(
            geometry.box_geometry(DVec3::ONE).unwrap(),
            geometry.normal_material(),
        );
        let b = geometry.mesh(
            geometry.box_geometry(DVec3::ONE).unwrap(),
            geometry.normal_material(),
        );
        assert_ne!(a.stamp, b.stamp);
    }

    #[test]
    fn canonicalize_orders_commutative_operands() {
        let geometry = StubGeometry::new();
        let a = leaf(&geometry, 1.0);
        let b = leaf(&geometry, 2.0);

        let ab = StubTree::Node {
            op: BooleanOp::Union,
            lhs: Box::new(a.clone()),
            rhs: Box::new(b.clone()),
        };
        let ba = StubTree::Node {
            op: BooleanOp::Union,
            lhs: Box::new(b),
            rhs: Box::new(a),
        };

        assert_eq!(ab.canonicalize(), ba.canonicalize());
    }

    #[test]
    fn canonicalize_preserves_ordered_operands() {
        let geometry = StubGeometry::new();
        let a = leaf(&geometry, 1.0);
        let b = leaf(&geometry, 2.0);

        let ab = StubTree::Node {
            op: BooleanOp::Difference,
            lhs: Box::new(a.clone()),
            rhs: Box::new(b.clone()),
        };
        let ba = StubTree::Node {
            op: BooleanOp::Difference,
            lhs: Box::new(b),
            rhs: Box::new(a),
        };

        assert_ne!(ab.canonicalize(), ba.canonicalize());
    }

    #[test]
    fn canonicalize_erases_identity_stamps() {
        let geometry = StubGeometry::new();
        let first = leaf(&geometry, 1.0).canonicalize();
        let second = leaf(&geometry, 1.0).canonicalize();
        assert_eq!(first, second);
    }
}
