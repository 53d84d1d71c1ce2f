//! ExifTool backend: locating the executable and driving one invocation.
//!
//! Everything tag-shaped stays in `services/*`; this module only turns
//! argument lists into a subprocess call and stdout into typed records.

use crate::domain::models::{ExpectedMapping, TagRecord};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;

/// JSON output, family-1 group names, allow duplicates, short tag names.
const BASE_READ_ARGS: [&str; 4] = ["-j", "-G1", "-a", "-s"];

const INSTALL_HINT: &str = "exiftool not found on PATH. Install exiftool or pass --exiftool PATH.\n\
macOS (Homebrew): brew install exiftool\n\
Debian/Ubuntu: sudo apt-get update && sudo apt-get install -y libimage-exiftool-perl";

#[derive(thiserror::Error, Debug)]
pub enum ExifToolError {
    #[error("exiftool not found at: {0}")]
    NotFoundAt(PathBuf),
    #[error("{}", INSTALL_HINT)]
    NotOnPath,
    #[error("failed to invoke exiftool: {0}")]
    Unavailable(#[source] std::io::Error),
    /// exiftool ran but exited non-zero; `message` is surfaced verbatim and
    /// `status` becomes the process exit code.
    #[error("{message}")]
    Failed { status: i32, message: String },
}

pub struct ExifTool {
    exe: PathBuf,
}

impl ExifTool {
    /// Use the explicit path when given (it must exist), otherwise search
    /// every `PATH` directory for an `exiftool` file.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ExifToolError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ExifToolError::NotFoundAt(path.to_path_buf()));
            }
            return Ok(Self {
                exe: path.to_path_buf(),
            });
        }
        std::env::var_os("PATH")
            .and_then(|paths| {
                std::env::split_paths(&paths)
                    .map(|dir| dir.join("exiftool"))
                    .find(|candidate| candidate.is_file())
            })
            .map(|exe| Self { exe })
            .ok_or(ExifToolError::NotOnPath)
    }

    /// Run one invocation and return stdout. Output bytes are decoded
    /// lossily, so downstream comparison always sees valid text.
    pub fn run(&self, args: &[String]) -> Result<String, ExifToolError> {
        let output = Command::new(&self.exe)
            .args(args)
            .output()
            .map_err(ExifToolError::Unavailable)?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if !stderr.trim().is_empty() {
                stderr.trim().to_string()
            } else if !stdout.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                "exiftool failed".to_string()
            };
            return Err(ExifToolError::Failed {
                status: output.status.code().unwrap_or(1),
                message,
            });
        }
        Ok(stdout)
    }

    /// Read one record per file, restricted to `tag_args` when non-empty.
    pub fn read_records(
        &self,
        files: &[String],
        tag_args: &[String],
        params: &[String],
    ) -> anyhow::Result<Vec<TagRecord>> {
        let mut args: Vec<String> = BASE_READ_ARGS.iter().map(|a| a.to_string()).collect();
        args.extend(params.iter().cloned());
        args.extend(tag_args.iter().cloned());
        args.extend(files.iter().cloned());
        let stdout = self.run(&args)?;
        let records: Vec<TagRecord> =
            serde_json::from_str(&stdout).context("parsing exiftool JSON output")?;
        Ok(records)
    }

    /// Apply tags to one file. List values expand to one `-Tag=value`
    /// argument per element; presence-only entries carry no value to write
    /// and are skipped.
    pub fn write_tags(
        &self,
        file: &str,
        tags: &ExpectedMapping,
        params: &[String],
    ) -> Result<(), ExifToolError> {
        let mut args: Vec<String> = params.to_vec();
        for (tag, value) in tags {
            for element in value.elements() {
                args.push(format!("-{tag}={element}"));
            }
        }
        args.push(file.to_string());
        self.run(&args).map(|_| ())
    }
}
