//! Shared node and block types for Pagewright.
//!
//! This crate is the leaf of the component tree: typed node IDs, the block
//! kinds a user can drag onto the canvas, their rendering payloads, and the
//! placed instance that forms a node of the tree. It has **no internal
//! pagewright dependencies**.
//!
//! # Overview
//!
//! ```text
//! Forest (pagewright-tree)
//!     └── container "work-area-1"
//!           ├── PlacedInstance (Header)
//!           └── PlacedInstance (Section)
//!                 └── PlacedInstance (Banner)
//! ```
//!
//! # Key Types
//!
//! |---------------------|----------------------------------------------|
//! | Type                | Purpose                                      |
//! |---------------------|----------------------------------------------|
//! | [`NodeId`]          | Unique address of a placed instance          |
//! | [`BlockKind`]       | What a block *is* (header, section, ...)     |
//! | [`FragmentShape`]   | How a kind serializes to markup              |
//! | [`Payload`]         | Opaque rendering data carried by a node      |
//! | [`PlacedInstance`]  | A node of the component tree                 |
//! |---------------------|----------------------------------------------|

pub mod block;
pub mod ids;
pub mod node;

pub use block::{BlockKind, FragmentShape, Payload};
pub use ids::NodeId;
pub use node::PlacedInstance;
