//! Error types for tree and gesture operations.
//!
//! Missed drops and duplicate placements are not errors; they come back as
//! [`Placement`](crate::Placement) outcomes. Everything here is either an
//! integration defect or a gesture stream that broke the start/end protocol.

use thiserror::Error;

use crate::{BlockKind, NodeId};

/// Errors that can occur while building a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Gesture source id does not name a catalog entry.
    #[error("unknown drag source: {0:?}")]
    UnknownSource(String),

    /// Kind requested from a catalog that does not offer it.
    ///
    /// The catalog and the list of draggable blocks are out of sync.
    #[error("block kind {0} is not in the catalog")]
    NotInCatalog(BlockKind),

    /// A drag started while another one was still lifted.
    #[error("drag already in progress for {active}")]
    GestureInProgress { active: BlockKind },

    /// A drag ended with nothing lifted.
    #[error("drag ended without an active gesture")]
    NoActiveGesture,

    /// A drag ended for a different source than the one lifted.
    #[error("drag source mismatch: lifted {expected}, ended {got:?}")]
    SourceMismatch { expected: BlockKind, got: String },

    /// The same node id appears twice in a forest.
    #[error("duplicate node id in forest: {0}")]
    DuplicateId(NodeId),

    /// A header, footer or banner holds children; only sections may.
    #[error("leaf node {0} has children")]
    LeafWithChildren(NodeId),
}
