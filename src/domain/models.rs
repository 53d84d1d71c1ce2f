use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File-identity key emitted by exiftool for every record. Always survives
/// group filtering.
pub const SOURCE_FILE_KEY: &str = "SourceFile";

/// A single tag element as it appears in exiftool JSON or a tag file.
///
/// Untagged so that `"Jane"`, `42` and `true` all round-trip as themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// One tag's value: the presence-only sentinel (JSON `null`), a bare scalar,
/// or a single-level ordered list.
///
/// `Presence` asserts that a tag exists without constraining its value; it is
/// only meaningful in an expected mapping. Variant order matters: `null` must
/// deserialize as `Presence` before the scalar variants are tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Presence,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl TagValue {
    pub fn text(s: &str) -> Self {
        TagValue::Scalar(Scalar::from(s))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TagValue::List(_))
    }

    /// Coerce to an element sequence: a scalar becomes a one-element slice,
    /// a list stays as-is. `Presence` has no elements.
    pub fn elements(&self) -> &[Scalar] {
        match self {
            TagValue::Presence => &[],
            TagValue::Scalar(s) => std::slice::from_ref(s),
            TagValue::List(items) => items,
        }
    }
}

/// Flat tag-to-value record for one file, in encounter order.
pub type TagRecord = IndexMap<String, TagValue>;

/// Expected tags keyed by tag name, in first-assignment order.
pub type ExpectedMapping = IndexMap<String, TagValue>;

/// Expected/actual pair for one non-matching tag.
#[derive(Debug, Serialize)]
pub struct Mismatch {
    pub expected: TagValue,
    pub actual: Option<TagValue>,
}

/// Outcome of validating one file against an expected mapping.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub ok: bool,
    pub missing: Vec<String>,
    pub mismatched: IndexMap<String, Mismatch>,
}
