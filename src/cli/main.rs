use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use exif_table::exif::{group, Catalog, ExtractionResult, Extractor, TypedValue};
use exif_table::{config, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "exif-table",
    version,
    about = "Walk a directory of images and write their EXIF metadata as a delimited table"
)]
struct Cli {
    /// Directory to scan recursively
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Output file (created or truncated)
    #[arg(value_name = "DESTINATION", required_unless_present = "show_exif")]
    destination: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Field delimiter (overrides the config file)
    #[arg(short, long, value_name = "C")]
    delimiter: Option<char>,

    /// Do not write the header line
    #[arg(long)]
    no_header: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,

    /// Write records as a JSON array instead of delimited text
    #[arg(long)]
    json: bool,

    /// Print every recognised tag of each image and exit
    #[arg(long = "show-exif")]
    show_exif: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(delimiter) = cli.delimiter {
        config.output.delimiter = delimiter;
    }
    if cli.no_header {
        config.output.write_header = false;
    }
    if cli.follow_links {
        config.scan.follow_links = true;
    }

    let catalog = Catalog::standard();
    log::debug!("Tag catalogue: {} definitions", catalog.tags.len());
    let extractor = Extractor::new(&catalog);

    if cli.show_exif {
        let images = pipeline::collect_images(&cli.source, config.scan.follow_links);
        if images.is_empty() {
            log::warn!("No image files found under {}", cli.source.display());
        }
        for image_path in &images {
            match extractor.extract(image_path) {
                Ok(result) => print_full_exif(image_path, &result),
                Err(e) => log::error!("{e}"),
            }
        }
        return Ok(());
    }

    let Some(destination) = cli.destination.as_deref() else {
        anyhow::bail!("No destination file specified. Use --help for usage.");
    };

    let format = if cli.json {
        pipeline::OutputFormat::Json
    } else {
        pipeline::OutputFormat::Delimited
    };

    // Scan failures are reported but never change the exit status.
    if let Err(e) = pipeline::scan(&cli.source, destination, &extractor, &config, format) {
        log::error!("{e}");
    }

    Ok(())
}

// ANSI color codes
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Width of the tag-name column.
const TAG_WIDTH: usize = 26;
/// Max width for the value column before wrapping.
const VAL_WIDTH: usize = 42;

/// Print every recognised tag of a file, grouped by IFD.
fn print_full_exif(path: &Path, result: &ExtractionResult<'_>) {
    println!();
    println!("{BOLD}File:{RESET} {}", path.display());
    println!("{DIM}{}{RESET}", "═".repeat(72));

    print_row(
        "ImageSize",
        &format!("{} x {}", result.image_width(), result.image_height()),
    );
    let gps = result.gps();
    if !gps.is_empty() {
        print_row("GPSPosition", &gps);
    }
    println!();

    for group_id in [
        group::IMAGE,
        group::EXIF,
        group::GPS,
        group::INTEROP,
        group::THUMBNAIL,
    ] {
        let entries: Vec<_> = result
            .tags()
            .filter(|entry| entry.definition().group_id == group_id)
            .collect();
        if entries.is_empty() {
            continue;
        }

        println!("  {BOLD}{}{RESET}", group::name(group_id));
        println!("  {DIM}{}{RESET}", "─".repeat(70));
        for entry in entries {
            let values = entry
                .values()
                .iter()
                .map(TypedValue::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            print_row(&entry.definition().name, &values);
        }
        println!();
    }

    if result.values().is_empty() {
        println!("  {DIM}(no EXIF metadata found){RESET}");
        println!();
    }
}

/// Print a single row in the EXIF display table.
fn print_row(tag: &str, val: &str) {
    for line in format_row(tag, val) {
        println!("{line}");
    }
}

/// Lay out `tag : value`, wrapping the value on spaces at [`VAL_WIDTH`].
/// Continuation lines are indented under the value column.
fn format_row(tag: &str, val: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    for word in val.split_whitespace() {
        match chunks.last_mut() {
            Some(chunk) if chunk.len() + 1 + word.len() <= VAL_WIDTH => {
                chunk.push(' ');
                chunk.push_str(word);
            }
            _ => chunks.push(word.to_string()),
        }
    }
    if chunks.is_empty() {
        chunks.push(String::new());
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| match i {
            0 => format!("  {tag:<TAG_WIDTH$} : {chunk}"),
            _ => format!("  {:TAG_WIDTH$}   {chunk}", ""),
        })
        .collect()
}
