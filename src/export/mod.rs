// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering a [`Document`] as shell-sourceable `KEY=value` lines.
//!
//! Two modes are supported:
//!
//! - [`ExportMode::MergeInfo`]: the primary node plus a compact listing of
//!   every node, for scripts that work across all nodes.
//! - [`ExportMode::Node`]: everything needed to deploy to a single node.
//!
//! Every line is fully validated before any output is produced, so a caller
//! either gets the complete set of assignments or an error.
//!
//! # Example
//!
//! ```
//! use nodecfg::config::Document;
//! use nodecfg::export::{export, render, ExportMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::parse("default_node: a\nnodes:\n  a:\n    ssh_host: h1\n    ip: 1.2.3.4\n")?;
//! let lines = export(&doc, &ExportMode::Node { selector: None })?;
//!
//! assert!(render(&lines).starts_with("NODE_ID=a\nNODE_NAME=a\n"));
//! # Ok(())
//! # }
//! ```

mod merge;
mod node;
mod quote;

use std::fmt;

use tracing::debug;

use crate::config::Document;
use crate::error::Result;

pub use merge::merge_info;
pub use node::node_info;
pub use quote::shell_quote;

/// Which set of assignments to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMode {
    /// Primary node and a listing of all nodes.
    MergeInfo,
    /// A single node, chosen by `selector` or the document's defaults.
    Node { selector: Option<String> },
}

/// One `KEY=value` line with its value already shell-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    key: &'static str,
    value: String,
    quoted: String,
}

impl Assignment {
    /// # Errors
    ///
    /// Fails if the value cannot be shell-quoted.
    pub fn new(key: &'static str, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let quoted = shell_quote(key, &value)?;
        Ok(Self { key, value, quoted })
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The unquoted value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.quoted)
    }
}

/// Produce the assignments for `mode`.
///
/// # Errors
///
/// Fails if the document has no nodes, or with the mode-specific errors
/// documented on [`merge_info`] and [`node_info`].
pub fn export(doc: &Document, mode: &ExportMode) -> Result<Vec<Assignment>> {
    doc.nodes()?;
    debug!(target: "nodecfg::export", ?mode, "exporting");

    match mode {
        ExportMode::MergeInfo => merge_info(doc),
        ExportMode::Node { selector } => node_info(doc, selector.as_deref()),
    }
}

/// Join assignments into newline-terminated lines.
pub fn render(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(|a| format!("{a}\n"))
        .collect()
}
