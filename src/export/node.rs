// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use super::Assignment;
use crate::config::Document;
use crate::error::{NodeCfgError, Result};

/// Assignments needed to deploy to a single node.
///
/// The node is chosen by `selector`, else `default_node`, else `primary`.
/// Emits, in order: `NODE_ID`, `NODE_NAME`, `VPS_IP`, `SSH_HOST`,
/// `SUB_PORT`, `CF_API_TOKEN`, `CF_DOMAIN`, `CF_SUBDOMAIN`.
///
/// # Errors
///
/// - [`NodeCfgError::MissingNodes`] if there are no nodes
/// - [`NodeCfgError::NoNodeSelected`] if no node id can be resolved
/// - [`NodeCfgError::UnknownNode`] if the resolved id is not a node
/// - [`NodeCfgError::MissingField`] if the node lacks `ssh_host` or `ip`
pub fn node_info(doc: &Document, selector: Option<&str>) -> Result<Vec<Assignment>> {
    doc.nodes()?;

    let node_id = selector
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| doc.default_node())
        .or_else(|| doc.primary())
        .ok_or(NodeCfgError::NoNodeSelected)?;

    let node = doc
        .node(&node_id)
        .ok_or_else(|| NodeCfgError::UnknownNode {
            available: doc.sorted_node_ids(),
            id: node_id.clone(),
        })?;
    debug!(target: "nodecfg::export", node = %node_id, "resolved node");

    let ssh_host = node
        .required_ssh_host()
        .ok_or(NodeCfgError::MissingField { field: "ssh_host" })?;
    let ip = node
        .required_ip()
        .ok_or(NodeCfgError::MissingField { field: "ip" })?;

    let cloudflare = doc.cloudflare();

    Ok(vec![
        Assignment::new("NODE_ID", node.id())?,
        Assignment::new("NODE_NAME", node.name())?,
        Assignment::new("VPS_IP", ip)?,
        Assignment::new("SSH_HOST", ssh_host)?,
        Assignment::new("SUB_PORT", node.sub_port())?,
        Assignment::new("CF_API_TOKEN", cloudflare.api_token())?,
        Assignment::new("CF_DOMAIN", cloudflare.domain())?,
        Assignment::new("CF_SUBDOMAIN", node.subdomain())?,
    ])
}
