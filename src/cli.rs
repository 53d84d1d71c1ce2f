use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Read, write, and validate IPTC/XMP metadata via the ExifTool CLI"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path to the exiftool executable if not on PATH"
    )]
    pub exiftool: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Read {
        #[arg(required = true, help = "Image files to read")]
        files: Vec<String>,
        #[arg(
            long,
            help = "Tag or comma-separated tag list (e.g. XMP-iptcExt:DigitalSourceType)"
        )]
        tags: Vec<String>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Pass-through exiftool params (repeat or comma-separated)"
        )]
        params: Vec<String>,
        #[arg(
            long,
            help = "Filter output to group prefixes (repeat or comma-separated)"
        )]
        groups: Vec<String>,
        #[arg(long, help = "Filter output to common IPTC-related groups")]
        iptc: bool,
    },
    Write {
        #[arg(help = "Image file to update")]
        file: String,
        #[arg(long, help = "Path to JSON file with {tag: value} mappings")]
        set: Option<PathBuf>,
        #[arg(
            long,
            help = "Inline tag assignment, repeatable (e.g. XMP-iptcCore:Creator=Jane Doe)"
        )]
        set_inline: Vec<String>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Pass-through exiftool params (repeat or comma-separated)"
        )]
        params: Vec<String>,
    },
    Validate {
        #[arg(help = "Image file to validate")]
        file: String,
        #[arg(long, help = "Path to JSON file with {tag: value} expected mappings")]
        expect: Option<PathBuf>,
        #[arg(
            long,
            help = "Inline expected tag assignment, repeatable (e.g. XMP-dc:Title=Sample)"
        )]
        expect_inline: Vec<String>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Pass-through exiftool params (repeat or comma-separated)"
        )]
        params: Vec<String>,
        #[arg(long, help = "Check expected values are contained in actual list values")]
        contains: bool,
        #[arg(long, help = "When both values are lists, compare as sets")]
        unordered: bool,
    },
}
