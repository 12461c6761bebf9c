// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shell quoting for emitted values.

use std::borrow::Cow;

use crate::error::{NodeCfgError, Result};

/// Quote `value` so a POSIX shell reads it back as exactly one word with
/// the same content.
///
/// Words made only of characters the shell never interprets are returned
/// unchanged; the empty string becomes `''`.
///
/// # Errors
///
/// Returns [`NodeCfgError::Unquotable`] if the value contains a NUL byte,
/// which no shell word can carry.
pub fn shell_quote(key: &'static str, value: &str) -> Result<String> {
    shlex::try_quote(value)
        .map(Cow::into_owned)
        .map_err(|_| NodeCfgError::Unquotable { key })
}
