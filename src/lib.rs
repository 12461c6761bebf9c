// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads a deployment node config file and renders node metadata as
//! `KEY=value` lines that a shell script can `eval` or source.

pub mod config;
pub mod error;
pub mod export;

pub use config::Document;
pub use error::{NodeCfgError, Result};
pub use export::{export, render, Assignment, ExportMode};
