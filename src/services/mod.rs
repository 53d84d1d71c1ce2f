//! Service layer containing the tag logic.
//!
//! ## Service map
//! - `assign.rs` — inline assignment parsing + tag-file loading and merge.
//! - `compare.rs` — value comparison policy chain (contains/unordered modes).
//! - `filter.rs` — group-prefix filtering of tag records.
//! - `report.rs` — validation report assembly.
//! - `output.rs` — JSON output helpers.
//!
//! ## Conventions
//! - Everything here is pure except the printing in `output.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod assign;
pub mod compare;
pub mod filter;
pub mod output;
pub mod report;
