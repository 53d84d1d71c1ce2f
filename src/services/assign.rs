//! Expected-tag collection: inline `key=value` assignments and JSON tag files.

use crate::domain::models::{ExpectedMapping, Scalar, TagValue};
use anyhow::Context;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum AssignError {
    #[error("invalid tag assignment: {0}")]
    InvalidAssignment(String),
    #[error("no tags provided; use {0}")]
    EmptyRequest(&'static str),
}

/// Parse repeated `key=value` assignments into an expected mapping.
///
/// The part before the first `=` is the key (trimmed); the remainder is the
/// value, taken verbatim. Repeats of a key aggregate into a list in input
/// order: the second assignment promotes the scalar to a two-element list,
/// later ones append. Values stay raw text; no type coercion happens here.
pub fn parse_assignments(pairs: &[String]) -> Result<ExpectedMapping, AssignError> {
    let mut tags = ExpectedMapping::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(AssignError::InvalidAssignment(pair.clone()));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(AssignError::InvalidAssignment(pair.clone()));
        }
        push_assignment(&mut tags, key, value);
    }
    Ok(tags)
}

fn push_assignment(tags: &mut ExpectedMapping, key: &str, value: &str) {
    let value = Scalar::from(value);
    match tags.get_mut(key) {
        None => {
            tags.insert(key.to_string(), TagValue::Scalar(value));
        }
        Some(slot) => {
            *slot = match std::mem::replace(slot, TagValue::Presence) {
                TagValue::Scalar(first) => TagValue::List(vec![first, value]),
                TagValue::List(mut items) => {
                    items.push(value);
                    TagValue::List(items)
                }
                TagValue::Presence => TagValue::Scalar(value),
            };
        }
    }
}

/// Load a `{tag: value}` JSON object. `null` values are presence-only
/// expectations; anything nested deeper than one list level is rejected.
pub fn load_tag_file(path: &Path) -> anyhow::Result<ExpectedMapping> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading tag file {}", path.display()))?;
    let tags: ExpectedMapping = serde_json::from_str(&raw).with_context(|| {
        format!(
            "tag file {} must be a JSON object of {{tag: value}}",
            path.display()
        )
    })?;
    Ok(tags)
}

/// Merge a tag file with inline assignments, inline winning per key, and
/// require at least one resulting tag. `hint` names the flags the caller
/// accepts, for the empty-request message.
pub fn collect_tags(
    file: Option<&Path>,
    inline: &[String],
    hint: &'static str,
) -> anyhow::Result<ExpectedMapping> {
    let mut tags = ExpectedMapping::new();
    if let Some(path) = file {
        tags.extend(load_tag_file(path)?);
    }
    for (key, value) in parse_assignments(inline)? {
        tags.insert(key, value);
    }
    if tags.is_empty() {
        return Err(AssignError::EmptyRequest(hint).into());
    }
    Ok(tags)
}
