//! Markup serializer and export delivery for Pagewright.
//!
//! The serializer is a pure walk of a [`Forest`](pagewright_tree::Forest):
//! output nesting mirrors tree nesting and sibling order mirrors child order.
//! Export composes it with a [`Delivery`] collaborator that puts the
//! resulting artifacts somewhere the user can pick them up.
//!
//! ```text
//! Forest ──serialize──▶ index.html ─┐
//!        ──stylesheet─▶ styles.css ─┼──▶ Delivery::deliver (in order)
//!        ──script─────▶ script.js ──┘    (optional artifacts)
//! ```

mod export;
mod markup;
pub mod outline;

pub use export::{
    artifacts, export_forest, Artifact, Delivery, DirectoryDelivery, ExportConfig, MemoryDelivery,
    INDEX_FILE, SCRIPT_FILE, STYLESHEET_FILE,
};
pub use markup::{document, escape_html, script, serialize, stylesheet};
pub use outline::format_outline;
