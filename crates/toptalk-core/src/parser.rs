//! `KEY=VALUE` token extraction from raw log lines.
//!
//! A line is valid when it carries a non-empty `SRC=` token. The byte count
//! comes from the first `BYTES=` token, with `LEN=` as a fallback when no
//! `BYTES=` key is present at all, and defaults to 0 otherwise.

use crate::models::ParsedLine;

/// Whitespace bytes that terminate a token value.
fn is_token_end(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Extract the value of the first occurrence of `key` in `line`.
///
/// The value runs from immediately after `key` up to the next whitespace
/// byte or the end of the line, and may be empty. Returns `None` when the
/// key does not occur. Only the first occurrence found by left-to-right
/// scan is consulted.
fn extract_token<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let start = line.find(key)? + key.len();
    let rest = &line[start..];
    let end = rest.bytes().position(is_token_end).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Parse a token as a base-10 unsigned 64-bit integer.
///
/// Rejects the whole token when it is empty, contains any non-digit byte
/// (sign characters included) or exceeds `u64::MAX`. No prefix parsing.
fn parse_u64(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parse one raw log line.
///
/// Returns `None` when the line has no `SRC=` key or its value is empty;
/// such lines must not reach the aggregate store. Purely functional: no
/// side effects, no state.
pub fn parse(line: &str) -> Option<ParsedLine> {
    let source = extract_token(line, "SRC=")?;
    if source.is_empty() {
        return None;
    }

    // A present BYTES= key wins even when its value is malformed; LEN= is
    // consulted only when the BYTES= key itself is absent.
    let bytes = match extract_token(line, "BYTES=") {
        Some(token) => parse_u64(token).unwrap_or(0),
        None => extract_token(line, "LEN=").and_then(parse_u64).unwrap_or(0),
    };

    Some(ParsedLine {
        source: source.to_string(),
        bytes,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
