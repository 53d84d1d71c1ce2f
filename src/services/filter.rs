//! Group-prefix filtering of tag records.

use crate::domain::models::{TagRecord, SOURCE_FILE_KEY};

/// Common IPTC-related group prefixes, used by the `--iptc` convenience flag.
pub const DEFAULT_GROUP_PREFIXES: [&str; 7] = [
    "IPTC",
    "XMP-iptcCore",
    "XMP-iptcExt",
    "XMP-plus",
    "XMP-xmpRights",
    "XMP-dc",
    "XMP-photoshop",
];

/// Restrict a record to keys under the given group prefixes.
///
/// The file-identity entry always passes through. A prefix matches only at a
/// group boundary: `IPTC` matches `IPTC:Keywords` but not `IPTCExtra:X`.
/// An empty prefix set means no filtering was requested and the record is
/// returned unchanged.
pub fn filter_groups(record: &TagRecord, prefixes: &[String]) -> TagRecord {
    if prefixes.is_empty() {
        return record.clone();
    }
    let mut out = TagRecord::new();
    if let Some(value) = record.get(SOURCE_FILE_KEY) {
        out.insert(SOURCE_FILE_KEY.to_string(), value.clone());
    }
    for (key, value) in record {
        if key == SOURCE_FILE_KEY {
            continue;
        }
        if prefixes.iter().any(|prefix| in_group(key, prefix)) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

fn in_group(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// Defaults first, then explicit prefixes not already covered by the defaults.
pub fn merge_default_prefixes(explicit: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = DEFAULT_GROUP_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect();
    for prefix in explicit {
        if !DEFAULT_GROUP_PREFIXES.contains(&prefix.as_str()) {
            merged.push(prefix);
        }
    }
    merged
}
