//! Component forest and drag-and-drop placement for Pagewright.
//!
//! A page is a [`Forest`]: named work areas, each an ordered sequence of
//! [`PlacedInstance`] nodes. Sections nest arbitrarily deep. Nodes only ever
//! appear through a drop, resolved by the placement resolver:
//!
//! ```text
//! drag_start("banner") ──▶ Dragging { Banner }
//!                               │
//! drag_end("banner", target) ───┤  resolve(target)
//!                               │    ├─ container name?  → that work area
//!                               │    ├─ node id (pre-order search, all areas)?
//!                               │    │                    → that section's children
//!                               │    └─ nothing          → Missed
//!                               │  duplicate kind under that parent? → Duplicate
//!                               └─ append fresh instance  → Inserted(id)
//! ```
//!
//! # Semantics
//!
//! - **Append-only**: new nodes go to the end of their parent; nothing is
//!   reordered, moved or removed.
//! - **Shallow uniqueness**: a leaf kind appears at most once per direct
//!   parent. The same kind under two different sections is fine.
//! - **Unique ids**: every instance has a fresh [`NodeId`], whatever its kind.
//! - **Quiet misses**: a drop onto nothing is a normal outcome, not an error.

mod catalog;
mod error;
mod forest;
mod gesture;
mod placement;

pub use catalog::{BlockCatalog, CatalogEntry};
pub use error::TreeError;
pub use forest::{Forest, Visit, Walk};
pub use gesture::{DragState, GestureEvent, PageBuilder};
pub use placement::{place, place_in, resolve, InsertionPoint, NodePath, Placement};

pub use pagewright_types::{BlockKind, FragmentShape, NodeId, Payload, PlacedInstance};

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
