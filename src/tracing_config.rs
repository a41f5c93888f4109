//! Tracing configuration for the `weld` binary.
//!
//! Supports three output formats controlled by `WELD_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one block per
//!   shard
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # See every allocation and collision
//! WELD_LOG=trace WELD_LOG_FORMAT=tree weld model.json
//!
//! # Only naming decisions
//! WELD_LOG="weld_codegen::naming=debug" weld model.json
//! ```
//!
//! The subscriber is only initialised when `WELD_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parse from the `WELD_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("WELD_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `WELD_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("WELD_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `WELD_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with the report on stdout.
pub fn init_tracing() {
    let has_weld_log = std::env::var("WELD_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_weld_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
