//! # Boolean Composition
//!
//! Operator tags and the two-phase boolean build: meshes are materialized
//! first, then combined into a boolean-result tree by a pure free function.

use serde::{Deserialize, Serialize};

use crate::backend::{BspBackend, GeometryBackend};
use crate::error::OomlError;
use crate::solid::Solid;

/// Binary boolean set operator applied to two solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOp {
    /// All geometry from both operands.
    Union,
    /// Geometry of the first operand minus the second. Ordered.
    Difference,
    /// Geometry present in both operands.
    Intersection,
}

impl BooleanOp {
    /// True when operand order cannot change the resulting solid.
    pub fn is_commutative(self) -> bool {
        matches!(self, BooleanOp::Union | BooleanOp::Intersection)
    }
}

/// Combines two already-materialized meshes into a boolean-result tree.
///
/// Wraps each mesh in a BSP tree and applies the operator; no other state is
/// touched, so the call is separately testable from solid construction.
/// Callers own the returned tree.
pub fn build_boolean<G, B>(
    bsp: &B,
    op: BooleanOp,
    lhs: &G::Mesh,
    rhs: &G::Mesh,
) -> Result<B::Tree, OomlError>
where
    G: GeometryBackend,
    B: BspBackend<G>,
{
    let lhs = bsp.build(lhs).map_err(OomlError::boolean)?;
    let rhs = bsp.build(rhs).map_err(OomlError::boolean)?;
    bsp.combine(op, &lhs, &rhs).map_err(OomlError::boolean)
}

/// Builds a boolean composite solid from two operand solids.
///
/// Both operands are materialized *now* and the boolean result is computed
/// *now*; the operands are consumed and discarded, and only the resulting
/// tree is retained. Later `materialize` calls on the returned solid reuse
/// that stored tree without recombining. Cost of a nested expression is
/// therefore paid at construction time, proportional to its size.
pub fn compose<G, B>(
    geometry: &G,
    bsp: &B,
    op: BooleanOp,
    lhs: Solid<B::Tree>,
    rhs: Solid<B::Tree>,
) -> Result<Solid<B::Tree>, OomlError>
where
    G: GeometryBackend,
    B: BspBackend<G>,
{
    let lhs = lhs.materialize(geometry, bsp)?;
    let rhs = rhs.materialize(geometry, bsp)?;
    let tree = build_boolean::<G, B>(bsp, op, &lhs, &rhs)?;
    Ok(Solid::composite(op, tree))
}
