use crate::commands::split_params;
use crate::exiftool::ExifTool;
use crate::services::assign::collect_tags;
use std::path::Path;

pub fn run(
    tool: &ExifTool,
    file: &str,
    set: Option<&Path>,
    set_inline: &[String],
    params: &[String],
) -> anyhow::Result<()> {
    let tags = collect_tags(set, set_inline, "--set JSON or --set-inline key=value")?;
    let params = split_params(params)?;
    tool.write_tags(file, &tags, &params)?;
    Ok(())
}
