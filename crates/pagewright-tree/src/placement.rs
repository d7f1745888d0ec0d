//! Placement resolver: turns a drop into a forest mutation (or a no-op).
//!
//! Resolution and insertion are separate steps: [`resolve`] is a read-only
//! search that yields an [`InsertionPoint`], and insertion only runs once
//! everything that can fail (catalog lookup) has succeeded. A failed or
//! missed drop therefore never leaves a half-applied change behind.

use pagewright_types::{BlockKind, NodeId};

use crate::{BlockCatalog, Forest, Result};

/// Child-index path from a container down to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePath {
    /// Container index, in forest order.
    pub container: usize,
    /// Child index at each level; never empty.
    pub indices: Vec<usize>,
}

/// Where a drop lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Append to a work area (index in forest order).
    Container(usize),
    /// Append to the children of the section at this path.
    Node(NodePath),
}

/// Outcome of a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A new node was appended.
    Inserted(NodeId),
    /// The target parent already holds this kind directly; nothing changed.
    Duplicate,
    /// The target matched nothing droppable; nothing changed.
    Missed,
}

impl Placement {
    pub fn inserted(&self) -> Option<NodeId> {
        match self {
            Placement::Inserted(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Placement::Inserted(_))
    }
}

/// Resolve a drop target id to an insertion point.
///
/// Container names win over node ids. Node ids are searched depth-first in
/// pre-order through *every* container, so a section nested anywhere is
/// reachable. Only sections accept drops; a leaf target resolves to nothing.
pub fn resolve(forest: &Forest, target_id: &str) -> Option<InsertionPoint> {
    if let Some(index) = forest.container_index(target_id) {
        return Some(InsertionPoint::Container(index));
    }

    let id = NodeId::parse(target_id).ok()?;
    let path = forest.locate(id)?;
    let node = forest.node_at(&path)?;
    if !node.is_container() {
        tracing::debug!(target = %target_id, kind = %node.kind(), "drop target is not a container");
        return None;
    }
    Some(InsertionPoint::Node(path))
}

/// Drop a new `kind` instance onto `target_id`, mutating `forest` in place.
///
/// On `Err` the forest is untouched.
pub fn place_in(
    forest: &mut Forest,
    catalog: &BlockCatalog,
    kind: BlockKind,
    target_id: &str,
) -> Result<Placement> {
    let Some(point) = resolve(forest, target_id) else {
        tracing::debug!(target = %target_id, %kind, "drop missed");
        return Ok(Placement::Missed);
    };

    // Shallow check: direct children of the insertion point only
    let siblings = forest.slot(&point).unwrap_or_default();
    if kind.is_unique_per_parent() && siblings.iter().any(|n| n.kind() == kind) {
        tracing::debug!(target = %target_id, %kind, "duplicate placement suppressed");
        return Ok(Placement::Duplicate);
    }

    let node = catalog.instantiate(kind)?;
    let id = node.id();
    match forest.slot_mut(&point) {
        Some(slot) => slot.push(node),
        None => return Ok(Placement::Missed),
    }

    tracing::info!(target = %target_id, %kind, node = %id, "block placed");
    Ok(Placement::Inserted(id))
}

/// Pure form of [`place_in`]: the input forest is left as is and the result
/// is a new forest.
pub fn place(
    forest: &Forest,
    catalog: &BlockCatalog,
    kind: BlockKind,
    target_id: &str,
) -> Result<(Forest, Placement)> {
    let mut next = forest.clone();
    let placement = place_in(&mut next, catalog, kind, target_id)?;
    Ok((next, placement))
}
