// SPDX-License-Identifier: MIT OR Apache-2.0

//! Borrowed views over the node and Cloudflare sections of a document.

use super::value::{Mapping, Value};

/// Port used for the subscription endpoint when a node does not set `sub_port`.
pub const DEFAULT_SUB_PORT: i64 = 8443;

fn scalar(fields: Option<&Mapping>, key: &str) -> Option<String> {
    fields?.get(key).and_then(Value::scalar_string)
}

/// Like [`scalar`], but empty strings, `false` and zero count as unset.
fn set_scalar(fields: Option<&Mapping>, key: &str) -> Option<String> {
    fields?
        .get(key)
        .filter(|value| value.is_truthy())
        .and_then(Value::scalar_string)
}

/// A single entry of the `nodes` mapping.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    id: &'a str,
    fields: Option<&'a Mapping>,
}

impl<'a> NodeView<'a> {
    /// Wrap a node entry. A node written as a scalar has no fields.
    pub fn new(id: &'a str, value: &'a Value) -> Self {
        Self {
            id,
            fields: value.as_mapping(),
        }
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn ssh_host(&self) -> Option<String> {
        scalar(self.fields, "ssh_host")
    }

    pub fn ip(&self) -> Option<String> {
        scalar(self.fields, "ip")
    }

    /// `ssh_host`, unless it is empty, `false` or zero.
    pub fn required_ssh_host(&self) -> Option<String> {
        set_scalar(self.fields, "ssh_host")
    }

    /// `ip`, unless it is empty, `false` or zero.
    pub fn required_ip(&self) -> Option<String> {
        set_scalar(self.fields, "ip")
    }

    /// Display name, falling back to the node id when unset, empty, `false`
    /// or zero.
    pub fn name(&self) -> String {
        set_scalar(self.fields, "name").unwrap_or_else(|| self.id.to_string())
    }

    /// The `sub_port` field in its string form, or [`DEFAULT_SUB_PORT`].
    pub fn sub_port(&self) -> String {
        scalar(self.fields, "sub_port").unwrap_or_else(|| DEFAULT_SUB_PORT.to_string())
    }

    pub fn subdomain(&self) -> String {
        scalar(self.fields, "subdomain").unwrap_or_default()
    }

    /// Compact `id:ssh_host:ip` form; missing fields leave empty segments.
    pub fn triple(&self) -> String {
        format!(
            "{}:{}:{}",
            self.id,
            self.ssh_host().unwrap_or_default(),
            self.ip().unwrap_or_default()
        )
    }
}

/// The optional top-level `cloudflare` section.
#[derive(Debug, Clone, Copy)]
pub struct CloudflareView<'a> {
    fields: Option<&'a Mapping>,
}

impl<'a> CloudflareView<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self {
            fields: value.and_then(Value::as_mapping),
        }
    }

    pub fn api_token(&self) -> String {
        scalar(self.fields, "api_token").unwrap_or_default()
    }

    pub fn domain(&self) -> String {
        scalar(self.fields, "domain").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_value(pairs: &[(&str, Value)]) -> Value {
        Value::Mapping(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let value = node_value(&[("ssh_host", "h1".into()), ("ip", "1.2.3.4".into())]);
        let node = NodeView::new("a", &value);

        assert_eq!(node.id(), "a");
        assert_eq!(node.name(), "a");
        assert_eq!(node.sub_port(), "8443");
        assert_eq!(node.subdomain(), "");
        assert_eq!(node.triple(), "a:h1:1.2.3.4");
    }

    #[test]
    fn test_explicit_fields() {
        let value = node_value(&[
            ("name", "Tokyo".into()),
            ("sub_port", Value::Integer(9443)),
            ("subdomain", "tk".into()),
        ]);
        let node = NodeView::new("jp", &value);

        assert_eq!(node.name(), "Tokyo");
        assert_eq!(node.sub_port(), "9443");
        assert_eq!(node.subdomain(), "tk");
        assert_eq!(node.ssh_host(), None);
        assert_eq!(node.triple(), "jp::");
    }

    #[test]
    fn test_empty_name_falls_back_to_id() {
        let value = node_value(&[("name", "".into())]);
        assert_eq!(NodeView::new("a", &value).name(), "a");
    }

    #[test]
    fn test_falsy_name_falls_back_to_id() {
        for falsy in [Value::Bool(false), Value::Integer(0), Value::Float(0.0)] {
            let value = node_value(&[("name", falsy)]);
            assert_eq!(NodeView::new("a", &value).name(), "a");
        }
    }

    #[test]
    fn test_required_fields_reject_falsy_values() {
        let value = node_value(&[("ssh_host", Value::Integer(0)), ("ip", Value::Bool(false))]);
        let node = NodeView::new("a", &value);

        assert_eq!(node.required_ssh_host(), None);
        assert_eq!(node.required_ip(), None);
        // Plain reads still see the value.
        assert_eq!(node.ssh_host().as_deref(), Some("0"));
        assert_eq!(node.triple(), "a:0:False");
    }

    #[test]
    fn test_empty_value_line_reads_as_absent() {
        // `subdomain:` with nothing after it parses as an empty mapping.
        let value = node_value(&[("subdomain", Value::Mapping(Mapping::new()))]);
        assert_eq!(NodeView::new("a", &value).subdomain(), "");
    }

    #[test]
    fn test_scalar_node_has_no_fields() {
        let value = Value::Integer(5);
        let node = NodeView::new("a", &value);
        assert_eq!(node.ip(), None);
        assert_eq!(node.triple(), "a::");
    }

    #[test]
    fn test_cloudflare_absent() {
        let cf = CloudflareView::new(None);
        assert_eq!(cf.api_token(), "");
        assert_eq!(cf.domain(), "");
    }

    #[test]
    fn test_cloudflare_present() {
        let value = node_value(&[("api_token", "secret".into()), ("domain", "example.com".into())]);
        let cf = CloudflareView::new(Some(&value));
        assert_eq!(cf.api_token(), "secret");
        assert_eq!(cf.domain(), "example.com");
    }
}
