// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use super::Assignment;
use crate::config::{Document, NodeView};
use crate::error::{NodeCfgError, Result};

/// Assignments describing the primary node and every node in the document.
///
/// The primary node is taken from `primary`, falling back to `default_node`.
/// Emits `PRIMARY_ID`, `PRIMARY_SSH_HOST`, `PRIMARY_IP` and `ALL_NODE_IDS`,
/// the last being a space-separated list of `id:ssh_host:ip` entries in the
/// order the nodes are declared.
///
/// # Errors
///
/// - [`NodeCfgError::MissingNodes`] if there are no nodes
/// - [`NodeCfgError::MissingPrimary`] if neither key is set or the named
///   node does not exist
pub fn merge_info(doc: &Document) -> Result<Vec<Assignment>> {
    let nodes = doc.nodes()?;

    let primary_id = doc
        .primary()
        .or_else(|| doc.default_node())
        .ok_or(NodeCfgError::MissingPrimary)?;
    let primary = doc.node(&primary_id).ok_or(NodeCfgError::MissingPrimary)?;
    debug!(target: "nodecfg::export", primary = %primary_id, "resolved primary node");

    let all_nodes = nodes
        .iter()
        .map(|(id, value)| NodeView::new(id, value).triple())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(vec![
        Assignment::new("PRIMARY_ID", primary.id())?,
        Assignment::new("PRIMARY_SSH_HOST", primary.ssh_host().unwrap_or_default())?,
        Assignment::new("PRIMARY_IP", primary.ip().unwrap_or_default())?,
        Assignment::new("ALL_NODE_IDS", all_nodes)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_NODES: &str = r#"
primary: a
nodes:
  a:
    ssh_host: h1
    ip: 1.2.3.4
  b:
    ssh_host: h2
    ip: 5.6.7.8
"#;

    fn values(lines: &[Assignment]) -> Vec<(&str, &str)> {
        lines.iter().map(|a| (a.key(), a.value())).collect()
    }

    #[test]
    fn test_merge_info() {
        let doc = Document::parse(TWO_NODES).unwrap();
        let lines = merge_info(&doc).unwrap();

        assert_eq!(
            values(&lines),
            vec![
                ("PRIMARY_ID", "a"),
                ("PRIMARY_SSH_HOST", "h1"),
                ("PRIMARY_IP", "1.2.3.4"),
                ("ALL_NODE_IDS", "a:h1:1.2.3.4 b:h2:5.6.7.8"),
            ]
        );
    }

    #[test]
    fn test_declaration_order_not_sorted() {
        let doc = Document::parse(
            "primary: z\nnodes:\n  z:\n    ip: 9.9.9.9\n  a:\n    ssh_host: ha\n",
        )
        .unwrap();
        let lines = merge_info(&doc).unwrap();

        assert_eq!(lines[1].value(), "");
        assert_eq!(lines[3].value(), "z::9.9.9.9 a:ha:");
    }

    #[test]
    fn test_falls_back_to_default_node() {
        let doc = Document::parse(&TWO_NODES.replace("primary: a", "default_node: b")).unwrap();
        let lines = merge_info(&doc).unwrap();
        assert_eq!(lines[0].value(), "b");
        assert_eq!(lines[2].value(), "5.6.7.8");
    }

    #[test]
    fn test_primary_wins_over_default_node() {
        let doc = Document::parse(&format!("default_node: b\n{TWO_NODES}")).unwrap();
        assert_eq!(merge_info(&doc).unwrap()[0].value(), "a");
    }

    #[test]
    fn test_missing_primary() {
        let doc = Document::parse(&TWO_NODES.replace("primary: a", "")).unwrap();
        assert!(matches!(
            merge_info(&doc),
            Err(NodeCfgError::MissingPrimary)
        ));
    }

    #[test]
    fn test_unknown_primary() {
        let doc = Document::parse(&TWO_NODES.replace("primary: a", "primary: c")).unwrap();
        assert!(matches!(
            merge_info(&doc),
            Err(NodeCfgError::MissingPrimary)
        ));
    }
}
