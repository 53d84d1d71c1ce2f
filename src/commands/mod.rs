//! Command handler layer.
//!
//! ## Files
//! - `read.rs` — read metadata to JSON, optionally group-filtered.
//! - `write.rs` — apply tag assignments to one file.
//! - `validate.rs` — compare expected tags against one file's record.
//!
//! ## Principles
//! - Split/normalize CLI inputs here.
//! - Delegate tag logic to `services/*` and backend calls to `exiftool`.
//! - Keep the output schema stable.

pub mod read;
pub mod validate;
pub mod write;

/// Flatten repeatable flag values, splitting each on commas and dropping
/// empty segments.
pub fn split_csv(items: &[String]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like `split_csv`, but each segment is additionally split into shell words
/// so quoted exiftool params survive intact.
pub fn split_params(items: &[String]) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();
    for part in split_csv(items) {
        let words =
            shlex::split(&part).ok_or_else(|| anyhow::anyhow!("invalid --params value: {part}"))?;
        out.extend(words);
    }
    Ok(out)
}
