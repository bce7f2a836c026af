//! Request path canonicalization.
//!
//! The gateway classifies and the proxy forwards the same canonical path:
//! unreserved percent-escapes decoded, `\` read as `/`, empty and `.` segments
//! dropped, `..` resolved. Encoded separators are refused outright since the
//! page server may decode them after the route check.

use axum::http::{uri::PathAndQuery, Uri};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is not absolute")]
    NotAbsolute,

    #[error("path contains an encoded separator")]
    EncodedSeparator,

    #[error("path is not in canonical form")]
    NotCanonical,

    #[error("rewritten uri is invalid")]
    InvalidUri,
}

pub fn normalize_path(raw: &str) -> Result<String, PathError> {
    if !raw.starts_with('/') {
        return Err(PathError::NotAbsolute);
    }

    let decoded = decode_unreserved(raw)?;
    let mut segments: Vec<&str> = Vec::new();
    let mut trailing_slash = false;

    for segment in decoded.split(|c: char| c == '/' || c == '\\') {
        trailing_slash = matches!(segment, "" | "." | "..");
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut path = String::with_capacity(decoded.len());
    for segment in &segments {
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() || trailing_slash {
        path.push('/');
    }
    Ok(path)
}

/// Normalizes `uri` in place and returns the canonical path.
pub fn canonicalize_uri(uri: &mut Uri) -> Result<String, PathError> {
    let path = normalize_path(uri.path())?;
    if path == uri.path() {
        return Ok(path);
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.clone(),
    };
    let mut parts = std::mem::take(uri).into_parts();
    parts.path_and_query = Some(
        PathAndQuery::try_from(path_and_query.as_str()).map_err(|_| PathError::InvalidUri)?,
    );
    *uri = Uri::from_parts(parts).map_err(|_| PathError::InvalidUri)?;
    Ok(path)
}

/// Fails unless `path` is already canonical.
pub fn ensure_canonical(path: &str) -> Result<(), PathError> {
    if normalize_path(path)? == path {
        Ok(())
    } else {
        Err(PathError::NotCanonical)
    }
}

fn decode_unreserved(raw: &str) -> Result<String, PathError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        match rest.get(pos..pos + 3).and_then(decode_escape) {
            Some(b'/' | b'\\') => return Err(PathError::EncodedSeparator),
            Some(byte) if is_unreserved(byte) => {
                out.push(byte as char);
                rest = &rest[pos + 3..];
            }
            _ => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn decode_escape(escape: &str) -> Option<u8> {
    let hex = escape.strip_prefix('%')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}
