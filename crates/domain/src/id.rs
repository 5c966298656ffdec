//! Identifier codec.
//!
//! Derives DOM- and filesystem-safe tab identifiers from free-form
//! collection and request names. Everything here is a pure function of its
//! input except [`run_suffix`], which is random.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Punctuation a URI component keeps unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Identifier of the "New Collection" editor tab.
pub const NEW_COLLECTION_TAB: &str = "new-collection-tab";

/// Identifier of the "New Request" editor tab.
pub const NEW_REQUEST_TAB: &str = "new-request-tab";

/// Opaque tab identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps an already composed identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a new identifier with `suffix` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}{suffix}", self.0))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Percent-encodes `raw` as a URI component, then replaces every character
/// outside `[A-Za-z0-9_-]` with `_`.
///
/// Distinct names can sanitize to the same string (`a.b` and `a*b` both give
/// `a_b`); the workspace registry detects that case when both are open.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT)
        .to_string()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Identifier of a collection editor tab.
#[must_use]
pub fn collection_id(collection: &str) -> Identifier {
    Identifier(format!("collection-{}", sanitize(collection)))
}

/// Identifier of a request editor tab.
///
/// The `request-` prefix and the `__` separator keep request identifiers
/// disjoint from collection identifiers and the fixed tab kinds.
#[must_use]
pub fn request_id(collection: &str, request: &str) -> Identifier {
    Identifier(format!(
        "request-{}__{}",
        sanitize(collection),
        sanitize(request)
    ))
}

/// Random suffix distinguishing repeated run and result tabs of one target.
///
/// Renders as `-run-` followed by the decimal digits of a fraction in
/// `[0, 1)`. Not unique by construction; the registry breaks ties.
#[must_use]
pub fn run_suffix() -> String {
    let fraction: f64 = rand::rng().random();
    format!("-run-{}", fraction_digits(fraction))
}

fn fraction_digits(fraction: f64) -> String {
    let rendered = fraction.to_string();
    match rendered.strip_prefix("0.") {
        Some(digits) => digits.to_owned(),
        None => rendered,
    }
}

/// Human-friendly label of a collection stored at `path`: trailing path
/// separators are dropped and the last segment is kept.
#[must_use]
pub fn display_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}
