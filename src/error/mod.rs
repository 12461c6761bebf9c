// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

/// A structural problem found while parsing a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid indentation near line {line}: {text}")]
pub struct ParseError {
    /// 1-based line number in the source file.
    pub line: usize,
    /// The offending source line, trimmed.
    pub text: String,
}

#[derive(Debug, Error)]
pub enum NodeCfgError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] ParseError),

    #[error("config is missing the nodes section")]
    MissingNodes,

    #[error("missing primary configuration or primary node does not exist")]
    MissingPrimary,

    #[error("no node selected; set default_node/primary or pass --node")]
    NoNodeSelected,

    #[error("node not found: {id}. available nodes: {}", available.join(", "))]
    UnknownNode { id: String, available: Vec<String> },

    #[error("node is missing {field} configuration")]
    MissingField { field: &'static str },

    #[error("value for {key} cannot be shell-quoted (contains a NUL byte)")]
    Unquotable { key: &'static str },

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, NodeCfgError>;
