use crate::commands::{split_csv, split_params};
use crate::exiftool::ExifTool;
use crate::services::filter::{filter_groups, merge_default_prefixes};
use crate::services::output::print_json;

/// Read metadata for one or more files and print the record array.
///
/// With `--tags`, exactly those tags are requested and no group filtering
/// applies. Without it, the full record is read and reduced by the merged
/// group prefixes when any were requested.
pub fn run(
    tool: &ExifTool,
    files: &[String],
    tags: &[String],
    params: &[String],
    groups: &[String],
    iptc: bool,
) -> anyhow::Result<()> {
    let params = split_params(params)?;
    let tags = split_csv(tags);
    let tag_args: Vec<String> = tags.iter().map(|tag| format!("-{tag}")).collect();

    let mut records = tool.read_records(files, &tag_args, &params)?;

    if tags.is_empty() {
        let mut prefixes = split_csv(groups);
        if iptc {
            prefixes = merge_default_prefixes(prefixes);
        }
        if !prefixes.is_empty() {
            records = records
                .iter()
                .map(|record| filter_groups(record, &prefixes))
                .collect();
        }
    }

    print_json(&records)
}
