//! Pagewright command-line driver.
//!
//! Loads a [`Config`], seeds a [`PageBuilder`](pagewright_tree::PageBuilder)
//! from it, replays a recorded gesture stream, and exports the result.

pub mod config;
pub mod replay;

pub use config::{Config, ConfigError};
pub use replay::{load_events, load_forest, replay, ReplaySummary};
