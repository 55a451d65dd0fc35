//! `KEY=VALUE` line grammar.
//!
//! Env files are read line by line. Blank lines and lines whose very first
//! character is `#` are skipped; every other line must contain a `=`. The
//! key is everything before the first `=` and the value is everything after
//! it, untrimmed.
//!
//! A `#` preceded by whitespace does not start a comment. Existing files
//! rely on that, so `  # note` is parsed (and rejected, having no `=`).

use std::fmt;

use crate::error::{EnvsError, Result};

/// A single environment variable assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

impl Assignment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parse env file text into assignments, in file order.
///
/// Lines end in `\n` or `\r\n`. Duplicate keys are kept; the caller
/// decides which occurrence wins.
///
/// # Errors
///
/// - `EnvsError::Parse` for a non-blank, non-comment line without `=`
/// - `EnvsError::InvalidUtf8` for a non-comment line that is not UTF-8
///
/// # Examples
///
/// ```
/// use envs_core::vars::{parse, Assignment};
///
/// let vars = parse(b"# comment\nHOST=localhost\n\nPORT=8080\n").unwrap();
/// assert_eq!(
///     vars,
///     vec![Assignment::new("HOST", "localhost"), Assignment::new("PORT", "8080")]
/// );
/// ```
pub fn parse(data: &[u8]) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::new();

    for (index, raw) in data.split(|&b| b == b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        // Comment check is on the untrimmed line
        if raw.first() == Some(&b'#') {
            continue;
        }

        let line = std::str::from_utf8(raw)
            .map_err(|_| EnvsError::InvalidUtf8 { line: line_number })?;
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| EnvsError::Parse {
            line: line_number,
            content: line.to_string(),
        })?;
        assignments.push(Assignment::new(key, value));
    }

    Ok(assignments)
}

/// Render assignments in canonical form, one `KEY=VALUE` per line.
///
/// A value ending in `\r` gets a `\r\n` terminator, since the parser strips
/// one `\r` before the newline.
pub fn serialize(assignments: &[Assignment]) -> String {
    let mut out = String::new();
    for assignment in assignments {
        out.push_str(&assignment.key);
        out.push('=');
        out.push_str(&assignment.value);
        if assignment.value.ends_with('\r') {
            out.push('\r');
        }
        out.push('\n');
    }
    out
}
