//! Value comparison engine.
//!
//! Decides whether an actual tag value satisfies an expected one under the
//! caller's matching modes. Backends are inconsistent about returning a single
//! value as a bare scalar versus a one-element list depending on tag
//! cardinality, so the engine is tolerant of that representational ambiguity
//! while staying strict about true multi-value mismatches unless the caller
//! opts into unordered/subset semantics.
//!
//! The precedence is an ordered policy chain, first-matching-rule-wins:
//! presence → containment → list → scalar. Each rule either decides
//! (`Some(matched)`) or defers to the next (`None`).

use crate::domain::models::TagValue;
use serde::Serialize;
use std::collections::HashSet;

/// Matching modes for one validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareMode {
    /// Expected values need only be a subset of actual values.
    pub contains: bool,
    /// List values compare as sets, ignoring order and duplicates.
    pub unordered: bool,
}

/// Outcome of one comparison, carrying both representations so the report
/// format stays uniform.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub matched: bool,
    pub expected: TagValue,
    pub actual: Option<TagValue>,
}

type Rule = fn(&TagValue, Option<&TagValue>, CompareMode) -> Option<bool>;

/// Precedence order; the scalar rule always decides.
const RULES: [Rule; 4] = [presence_rule, containment_rule, list_rule, scalar_rule];

pub fn compare(expected: &TagValue, actual: Option<&TagValue>, mode: CompareMode) -> Verdict {
    let matched = RULES
        .iter()
        .find_map(|rule| rule(expected, actual, mode))
        .unwrap_or(false);
    Verdict {
        matched,
        expected: expected.clone(),
        actual: actual.cloned(),
    }
}

/// A presence-only expectation is satisfied by any actual value at all.
fn presence_rule(expected: &TagValue, actual: Option<&TagValue>, _mode: CompareMode) -> Option<bool> {
    match expected {
        TagValue::Presence => Some(actual.is_some()),
        _ => None,
    }
}

/// Subset test: every expected element must appear somewhere in the actual
/// sequence. Duplicates in expected are each checked for presence, not
/// multiplicity.
fn containment_rule(
    expected: &TagValue,
    actual: Option<&TagValue>,
    mode: CompareMode,
) -> Option<bool> {
    if !mode.contains {
        return None;
    }
    let Some(actual) = actual else {
        return Some(false);
    };
    let haystack = actual.elements();
    Some(
        expected
            .elements()
            .iter()
            .all(|item| haystack.contains(item)),
    )
}

/// Applies when either side is a list: set equality in unordered mode, a
/// tolerant scalar comparison when both sides coerce to exactly one element,
/// exact ordered equality otherwise.
fn list_rule(expected: &TagValue, actual: Option<&TagValue>, mode: CompareMode) -> Option<bool> {
    let actual_is_list = actual.is_some_and(TagValue::is_list);
    if !expected.is_list() && !actual_is_list {
        return None;
    }
    let Some(actual) = actual else {
        return Some(false);
    };
    let expected = expected.elements();
    let actual = actual.elements();
    if mode.unordered {
        let expected: HashSet<_> = expected.iter().collect();
        let actual: HashSet<_> = actual.iter().collect();
        return Some(expected == actual);
    }
    if expected.len() == 1 && actual.len() == 1 {
        return Some(expected[0] == actual[0]);
    }
    Some(expected == actual)
}

fn scalar_rule(expected: &TagValue, actual: Option<&TagValue>, _mode: CompareMode) -> Option<bool> {
    match (expected, actual) {
        (TagValue::Scalar(e), Some(TagValue::Scalar(a))) => Some(e == a),
        _ => Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Scalar;

    fn list(items: &[&str]) -> TagValue {
        TagValue::List(items.iter().map(|s| Scalar::from(*s)).collect())
    }

    fn exact() -> CompareMode {
        CompareMode::default()
    }

    fn contains() -> CompareMode {
        CompareMode {
            contains: true,
            unordered: false,
        }
    }

    fn unordered() -> CompareMode {
        CompareMode {
            contains: false,
            unordered: true,
        }
    }

    #[test]
    fn presence_requires_any_actual() {
        assert!(!compare(&TagValue::Presence, None, exact()).matched);
        assert!(compare(&TagValue::Presence, Some(&TagValue::text("anything")), exact()).matched);
        assert!(compare(&TagValue::Presence, Some(&list(&["a", "b"])), exact()).matched);
    }

    #[test]
    fn containment_is_a_subset_test() {
        let actual = list(&["a", "b"]);
        assert!(compare(&list(&["a"]), Some(&actual), contains()).matched);
        assert!(!compare(&list(&["a", "c"]), Some(&actual), contains()).matched);
    }

    #[test]
    fn containment_coerces_scalars_and_ignores_multiplicity() {
        let actual = list(&["a", "b"]);
        assert!(compare(&TagValue::text("a"), Some(&actual), contains()).matched);
        assert!(compare(&list(&["a", "a"]), Some(&actual), contains()).matched);
        assert!(compare(&list(&["a"]), Some(&TagValue::text("a")), contains()).matched);
    }

    #[test]
    fn unordered_compares_as_sets() {
        let expected = list(&["a", "b"]);
        let actual = list(&["b", "a"]);
        assert!(compare(&expected, Some(&actual), unordered()).matched);
        assert!(!compare(&expected, Some(&actual), exact()).matched);
        assert!(compare(&list(&["a", "a", "b"]), Some(&actual), unordered()).matched);
    }

    #[test]
    fn single_element_list_is_interchangeable_with_scalar() {
        assert!(compare(&TagValue::text("x"), Some(&list(&["x"])), exact()).matched);
        assert!(compare(&list(&["x"]), Some(&TagValue::text("x")), exact()).matched);
        assert!(!compare(&TagValue::text("x"), Some(&list(&["y"])), exact()).matched);
    }

    #[test]
    fn exact_mode_checks_order_and_length() {
        let expected = list(&["a", "b"]);
        assert!(compare(&expected, Some(&list(&["a", "b"])), exact()).matched);
        assert!(!compare(&expected, Some(&list(&["a", "b", "c"])), exact()).matched);
        assert!(!compare(&expected, Some(&list(&["a"])), exact()).matched);
    }

    #[test]
    fn scalars_compare_directly() {
        assert!(compare(&TagValue::text("x"), Some(&TagValue::text("x")), exact()).matched);
        assert!(!compare(&TagValue::text("x"), Some(&TagValue::text("y")), exact()).matched);
        assert!(!compare(&TagValue::text("x"), None, exact()).matched);
    }

    #[test]
    fn numbers_and_text_are_distinct() {
        let number = TagValue::Scalar(Scalar::Number(5.into()));
        assert!(!compare(&TagValue::text("5"), Some(&number), exact()).matched);
        assert!(compare(&number, Some(&number), exact()).matched);
    }

    #[test]
    fn verdict_carries_both_representations() {
        let verdict = compare(&TagValue::text("x"), Some(&TagValue::text("y")), exact());
        assert!(!verdict.matched);
        assert_eq!(verdict.expected, TagValue::text("x"));
        assert_eq!(verdict.actual, Some(TagValue::text("y")));
    }
}
