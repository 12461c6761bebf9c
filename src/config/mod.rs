// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of node config files.
//!
//! A config file describes deployment nodes and shared Cloudflare
//! credentials in a restricted YAML-like syntax:
//!
//! ```text
//! primary: tokyo          # node used for merge info
//! default_node: tokyo     # node used when --node is not given
//!
//! cloudflare:
//!   api_token: "..."
//!   domain: example.com
//!
//! nodes:
//!   tokyo:
//!     name: "Tokyo 1"
//!     ssh_host: root@tokyo
//!     ip: 203.0.113.10
//!     sub_port: 8443
//!     subdomain: tk
//! ```
//!
//! # Example
//!
//! ```
//! use nodecfg::config::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::parse("nodes:\n  a:\n    ip: 1.2.3.4\n")?;
//!
//! let node = doc.node("a").expect("node a");
//! assert_eq!(node.ip().as_deref(), Some("1.2.3.4"));
//! assert_eq!(node.sub_port(), "8443");
//! # Ok(())
//! # }
//! ```

mod document;
mod node;
mod parser;
mod value;

pub use document::{Document, CLOUDFLARE_KEY, DEFAULT_NODE_KEY, NODES_KEY, PRIMARY_KEY};
pub use node::{CloudflareView, NodeView, DEFAULT_SUB_PORT};
pub use parser::{parse, strip_inline_comment, CHILD_INDENT};
pub use value::{Mapping, Value};
