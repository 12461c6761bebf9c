// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed config document and its top-level sections.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::node::{CloudflareView, NodeView};
use super::parser;
use super::value::{Mapping, Value};
use crate::error::{NodeCfgError, Result};

/// Top-level key holding the node definitions.
pub const NODES_KEY: &str = "nodes";
/// Top-level key naming the primary node.
pub const PRIMARY_KEY: &str = "primary";
/// Top-level key naming the node used when none is selected explicitly.
pub const DEFAULT_NODE_KEY: &str = "default_node";
/// Top-level key holding shared Cloudflare credentials.
pub const CLOUDFLARE_KEY: &str = "cloudflare";

/// A parsed config file. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Load and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`NodeCfgError::NotFound`] if the file does not exist,
    /// [`NodeCfgError::Read`] if it cannot be read as UTF-8 text, and
    /// [`NodeCfgError::Parse`] if its structure is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NodeCfgError::NotFound {
                path: path.to_path_buf(),
            },
            _ => NodeCfgError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        info!(
            target: "nodecfg::config",
            path = %path.display(),
            bytes = content.len(),
            "loaded config file"
        );

        Self::parse(&content)
    }

    /// Parse a document from config text.
    ///
    /// # Errors
    ///
    /// Returns [`NodeCfgError::Parse`] on the first structural error.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self {
            root: parser::parse(content)?,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The `nodes` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`NodeCfgError::MissingNodes`] if `nodes` is absent, not a
    /// mapping, or empty.
    pub fn nodes(&self) -> Result<&Mapping> {
        self.get(NODES_KEY)
            .and_then(Value::as_mapping)
            .filter(|nodes| !nodes.is_empty())
            .ok_or(NodeCfgError::MissingNodes)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<NodeView<'_>> {
        let (key, value) = self.nodes().ok()?.get_key_value(id)?;
        Some(NodeView::new(key, value))
    }

    /// All node ids, sorted.
    pub fn sorted_node_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .nodes()
            .map(|nodes| nodes.keys().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    pub fn primary(&self) -> Option<String> {
        self.selector(PRIMARY_KEY)
    }

    pub fn default_node(&self) -> Option<String> {
        self.selector(DEFAULT_NODE_KEY)
    }

    pub fn cloudflare(&self) -> CloudflareView<'_> {
        CloudflareView::new(self.get(CLOUDFLARE_KEY))
    }

    /// Render the parsed document as YAML, showing how nesting was resolved.
    ///
    /// # Errors
    ///
    /// Returns [`NodeCfgError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| NodeCfgError::Serialize(e.to_string()))
    }

    /// A node-id selector. Empty values, `false`, zero and mappings count
    /// as unset.
    fn selector(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|value| value.is_truthy())
            .and_then(Value::scalar_string)
    }
}
