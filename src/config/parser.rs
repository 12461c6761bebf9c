// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indentation-based parser for the node config format.
//!
//! The format is a small subset of YAML: `key: value` lines, nested mappings
//! opened by a key with an empty value, and `#` comments. There are no lists,
//! anchors, flow mappings or multi-line scalars.
//!
//! Nesting is tracked with an explicit stack of open mappings. A mapping
//! opened on a line indented `n` spaces expects its children at `n + 2`;
//! the actual indentation width of the file is never measured, so any line
//! indented at least `n + 2` lands in the innermost open mapping.

use tracing::{debug, trace};

use super::value::{Mapping, Value};
use crate::error::ParseError;

/// Columns a child mapping is expected to be indented past its parent key.
pub const CHILD_INDENT: usize = 2;

/// An open mapping on the indentation stack.
struct Frame {
    /// Minimum indentation of lines belonging to this mapping.
    indent: usize,
    /// Key under which the mapping is stored in its parent; `None` for the root.
    key: Option<String>,
    map: Mapping,
}

/// Remove an inline `#` comment, honouring quotes.
///
/// A `#` inside a single- or double-quoted run is data. Quotes of the other
/// kind are literal while inside a run. Trailing whitespace is trimmed from
/// what remains.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    let mut end = line.len();

    for (idx, ch) in line.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => {
                end = idx;
                break;
            }
            _ => {}
        }
    }

    line[..end].trim_end()
}

/// Number of leading space characters. Tabs are not indentation.
fn indentation(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// Pop the innermost frame and store its mapping in the new innermost frame.
fn close_frame(stack: &mut Vec<Frame>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(frame) = stack.pop() {
        if let (Some(key), Some(parent)) = (frame.key, stack.last_mut()) {
            parent.map.insert(key, Value::Mapping(frame.map));
        }
    }
}

/// Parse config text into the root mapping.
///
/// The first structural error aborts parsing.
pub fn parse(content: &str) -> Result<Mapping, ParseError> {
    let mut stack = vec![Frame {
        indent: 0,
        key: None,
        map: Mapping::new(),
    }];

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;

        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }

        let line = strip_inline_comment(raw);
        if line.trim().is_empty() {
            continue;
        }

        let indent = indentation(line);
        let Some((key, value)) = line.trim_start().split_once(':') else {
            trace!(target: "nodecfg::parser", line = line_no, "ignoring line without ':'");
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        while stack.last().is_some_and(|frame| indent < frame.indent) {
            if stack.len() == 1 {
                return Err(ParseError {
                    line: line_no,
                    text: raw.trim().to_string(),
                });
            }
            close_frame(&mut stack);
        }

        let Some(parent) = stack.last_mut() else {
            return Err(ParseError {
                line: line_no,
                text: raw.trim().to_string(),
            });
        };

        if parent.map.contains_key(key) {
            debug!(target: "nodecfg::parser", line = line_no, key, "overwriting duplicate key");
        }

        if value.is_empty() {
            // Reserve the key's position now; the finished mapping replaces
            // this placeholder when the frame closes.
            parent
                .map
                .insert(key.to_string(), Value::Mapping(Mapping::new()));
            debug!(
                target: "nodecfg::parser",
                line = line_no,
                key,
                child_indent = indent + CHILD_INDENT,
                "opening mapping"
            );
            stack.push(Frame {
                indent: indent + CHILD_INDENT,
                key: Some(key.to_string()),
                map: Mapping::new(),
            });
        } else {
            parent.map.insert(key.to_string(), Value::coerce(value));
        }
    }

    while stack.len() > 1 {
        close_frame(&mut stack);
    }

    Ok(stack.pop().map(|root| root.map).unwrap_or_default())
}
