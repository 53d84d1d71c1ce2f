use crate::commands::split_params;
use crate::domain::models::TagRecord;
use crate::exiftool::ExifTool;
use crate::services::assign::collect_tags;
use crate::services::compare::CompareMode;
use crate::services::output::print_json;
use crate::services::report::assemble;
use std::path::Path;

/// Exit status for a validation soft failure: the report is still fully
/// printed, only the process status distinguishes it.
const EXIT_MISMATCH: i32 = 2;

pub fn run(
    tool: &ExifTool,
    file: &str,
    expect: Option<&Path>,
    expect_inline: &[String],
    params: &[String],
    contains: bool,
    unordered: bool,
) -> anyhow::Result<()> {
    let expected = collect_tags(
        expect,
        expect_inline,
        "--expect JSON or --expect-inline key=value",
    )?;
    let params = split_params(params)?;
    let tag_args: Vec<String> = expected.keys().map(|tag| format!("-{tag}")).collect();

    let records = tool.read_records(&[file.to_string()], &tag_args, &params)?;
    let empty = TagRecord::new();
    let actual = records.first().unwrap_or(&empty);

    let report = assemble(
        file,
        &expected,
        actual,
        CompareMode {
            contains,
            unordered,
        },
    );
    print_json(&report)?;
    if !report.ok {
        std::process::exit(EXIT_MISMATCH);
    }
    Ok(())
}
