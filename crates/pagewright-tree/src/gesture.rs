//! Drag gesture state machine and the page-builder state owner.
//!
//! ```text
//!          drag_start(source)
//!   Idle ──────────────────────▶ Dragging { kind }
//!    ▲                               │
//!    └───── drag_end / cancel ───────┘   (always, placed or not)
//! ```
//!
//! Hover signals (`drag_over`) are advisory and never touch the forest.

use serde::{Deserialize, Serialize};

use pagewright_types::BlockKind;

use crate::{place_in, BlockCatalog, Forest, Placement, Result, TreeError};

/// Whether a block is currently lifted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { kind: BlockKind },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// A discrete signal from the gesture-reporting collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum GestureEvent {
    DragStart {
        source: String,
    },
    DragOver {
        source: String,
        target: String,
    },
    DragEnd {
        source: String,
        #[serde(default)]
        target: Option<String>,
    },
    Cancel,
}

/// Owns the forest for one page and feeds gestures into it.
///
/// Renderers and export read [`PageBuilder::forest`]; nothing else mutates it.
#[derive(Clone, Debug)]
pub struct PageBuilder {
    forest: Forest,
    catalog: BlockCatalog,
    state: DragState,
}

impl PageBuilder {
    pub fn new(forest: Forest, catalog: BlockCatalog) -> Self {
        Self {
            forest,
            catalog,
            state: DragState::Idle,
        }
    }

    /// Standard catalog over freshly seeded containers.
    pub fn with_containers<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Forest::with_containers(names), BlockCatalog::standard())
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Lift a block out of the catalog.
    ///
    /// Overlapping gestures are rejected; the first one stays lifted.
    pub fn drag_start(&mut self, source_id: &str) -> Result<()> {
        if let DragState::Dragging { kind } = self.state {
            tracing::warn!(active = %kind, source = %source_id, "drag started while another is in progress");
            return Err(TreeError::GestureInProgress { active: kind });
        }
        let kind = self.catalog.lookup(source_id)?;
        tracing::debug!(%kind, "drag started");
        self.state = DragState::Dragging { kind };
        Ok(())
    }

    /// Hover signal. Presentation only.
    pub fn drag_over(&self, source_id: &str, target_id: &str) {
        tracing::trace!(source = %source_id, target = %target_id, "drag over");
    }

    /// Release the lifted block over `target_id` (or over nothing).
    ///
    /// Returns to idle before anything else, so an error here never leaves a
    /// gesture dangling.
    pub fn drag_end(&mut self, source_id: &str, target_id: Option<&str>) -> Result<Placement> {
        let DragState::Dragging { kind } = std::mem::take(&mut self.state) else {
            return Err(TreeError::NoActiveGesture);
        };

        if BlockKind::from_str(source_id) != Some(kind) {
            return Err(TreeError::SourceMismatch {
                expected: kind,
                got: source_id.to_string(),
            });
        }

        match target_id {
            Some(target) => place_in(&mut self.forest, &self.catalog, kind, target),
            None => {
                tracing::debug!(%kind, "dropped over nothing");
                Ok(Placement::Missed)
            }
        }
    }

    /// Abandon the lifted block without placing it.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { kind } = std::mem::take(&mut self.state) {
            tracing::debug!(%kind, "drag cancelled");
        }
    }

    /// Dispatch one recorded event. `DragEnd` yields its placement.
    pub fn apply(&mut self, event: &GestureEvent) -> Result<Option<Placement>> {
        match event {
            GestureEvent::DragStart { source } => self.drag_start(source).map(|()| None),
            GestureEvent::DragOver { source, target } => {
                self.drag_over(source, target);
                Ok(None)
            }
            GestureEvent::DragEnd { source, target } => {
                self.drag_end(source, target.as_deref()).map(Some)
            }
            GestureEvent::Cancel => {
                self.cancel();
                Ok(None)
            }
        }
    }
}
