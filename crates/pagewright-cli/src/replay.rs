//! Recorded gesture streams.
//!
//! An events file is a JSON array of [`GestureEvent`]s:
//!
//! ```json
//! [
//!   {"event": "drag_start", "source": "header"},
//!   {"event": "drag_end", "source": "header", "target": "work-area-1"}
//! ]
//! ```

use std::path::Path;

use pagewright_tree::{Forest, GestureEvent, PageBuilder, Placement};

use crate::config::ConfigError;

/// Tally of one replay run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub missed: usize,
    /// Events the builder refused (unknown source, overlapping drag, ...).
    pub rejected: usize,
}

impl std::fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} events: {} inserted, {} duplicate, {} missed, {} rejected",
            self.events, self.inserted, self.duplicates, self.missed, self.rejected
        )
    }
}

pub fn load_events(path: &Path) -> Result<Vec<GestureEvent>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a forest dump written by `replay --snapshot`.
///
/// A debugging aid for reproducing a replay; pages are not persisted between
/// sessions otherwise. The dump is validated before use.
pub fn load_forest(path: &Path) -> Result<Forest, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let forest: Forest = serde_json::from_str(&text)?;
    forest.validate()?;
    Ok(forest)
}

/// Feed every event through the builder.
///
/// A rejected event is logged and skipped; replay carries on with the next.
pub fn replay(builder: &mut PageBuilder, events: &[GestureEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for (index, event) in events.iter().enumerate() {
        summary.events += 1;
        match builder.apply(event) {
            Ok(Some(Placement::Inserted(_))) => summary.inserted += 1,
            Ok(Some(Placement::Duplicate)) => summary.duplicates += 1,
            Ok(Some(Placement::Missed)) => summary.missed += 1,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(index, error = %e, "event rejected");
                summary.rejected += 1;
            }
        }
    }
    summary
}
