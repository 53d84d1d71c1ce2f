//! Validation report assembly.

use crate::domain::models::{ExpectedMapping, Mismatch, TagRecord, ValidationReport};
use crate::services::compare::{compare, CompareMode};
use indexmap::IndexMap;

/// Check every expected tag against the actual record.
///
/// A key the backend returned nothing for is recorded as missing and never
/// compared, even when its expectation is presence-only. Keys are processed in
/// the expected mapping's insertion order, which fixes report ordering.
pub fn assemble(
    file: &str,
    expected: &ExpectedMapping,
    actual: &TagRecord,
    mode: CompareMode,
) -> ValidationReport {
    let mut missing = Vec::new();
    let mut mismatched = IndexMap::new();
    for (tag, expected_value) in expected {
        let Some(actual_value) = actual.get(tag) else {
            missing.push(tag.clone());
            continue;
        };
        let verdict = compare(expected_value, Some(actual_value), mode);
        if !verdict.matched {
            mismatched.insert(
                tag.clone(),
                Mismatch {
                    expected: verdict.expected,
                    actual: verdict.actual,
                },
            );
        }
    }
    let ok = missing.is_empty() && mismatched.is_empty();
    ValidationReport {
        file: file.to_string(),
        ok,
        missing,
        mismatched,
    }
}
