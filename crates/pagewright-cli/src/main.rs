//! Pagewright binary.
//!
//! Usage:
//!   # What can be dragged
//!   pagewright catalog
//!
//!   # Replay a recorded gesture stream and export the page
//!   pagewright replay events.json --out dist
//!
//!   # Debugging: dump the forest, then reproduce a failing stream against it
//!   pagewright replay events.json --snapshot forest.json
//!   pagewright tree failing.json --from forest.json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use pagewright_cli::{Config, load_events, load_forest, replay};
use pagewright_export::{DirectoryDelivery, export_forest, format_outline};
use pagewright_tree::PageBuilder;

/// Drag-and-drop page builder driven from recorded gestures.
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(about = "Assemble pages from header, footer, banner and section blocks")]
struct Args {
    /// Config file (RON). Defaults to the user config dir if present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the blocks offered for dragging
    Catalog,

    /// Replay gestures, then export the page
    Replay {
        /// JSON array of gesture events
        events: PathBuf,

        /// Output directory (overrides config `out_dir`)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Debugging: also dump the resulting forest as JSON
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Debugging: start from a forest dump instead of empty work areas
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Replay gestures and print the resulting tree
    Tree {
        events: PathBuf,

        /// Debugging: start from a forest dump instead of empty work areas
        #[arg(long)]
        from: Option<PathBuf>,

        /// Hide nodes nested deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::discover(args.config.as_deref()).context("loading config")?;

    match args.command {
        Command::Catalog => {
            for entry in config.block_catalog().list_available() {
                println!("{:<8} {}", entry.kind.tag(), entry.kind.label());
            }
        }
        Command::Replay {
            events,
            out,
            snapshot,
            from,
        } => {
            let builder = replay_file(&config, &events, from)?;
            let forest = builder.forest();

            if let Some(path) = snapshot {
                let json = serde_json::to_string_pretty(forest)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing snapshot {}", path.display()))?;
                tracing::info!(path = %path.display(), "snapshot written");
            }

            let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
            let mut delivery = DirectoryDelivery::new(&out_dir);
            let files = export_forest(forest, &config.export, &mut delivery)
                .with_context(|| format!("exporting to {}", out_dir.display()))?;
            for file in files {
                println!("{}", out_dir.join(file).display());
            }
        }
        Command::Tree {
            events,
            from,
            max_depth,
        } => {
            let builder = replay_file(&config, &events, from)?;
            for line in format_outline(builder.forest(), max_depth) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn replay_file(config: &Config, events: &Path, from: Option<PathBuf>) -> Result<PageBuilder> {
    let base = match from {
        Some(path) => Some(
            load_forest(&path).with_context(|| format!("loading snapshot {}", path.display()))?,
        ),
        None => None,
    };
    let mut builder = config.page_builder(base);

    let stream =
        load_events(events).with_context(|| format!("loading events {}", events.display()))?;
    let summary = replay(&mut builder, &stream);
    tracing::info!(%summary, "replay finished");
    Ok(builder)
}
