use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use tools::{decode_file_json, format_decode_pretty, inspect_file, InspectReport};

#[derive(Parser)]
#[command(
    name = "sdat-tools",
    version,
    about = "sdat record file inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize record counts, timestamp placement and column ranges.
    Inspect {
        /// Path to a record file or a directory of record files.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Print reports as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Decode every record of a file.
    Decode {
        /// Path to the record file.
        file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let limits = wire::Limits::default();
    match cli.command {
        Command::Inspect { path, glob, json } => {
            let paths = if path.is_dir() {
                collect_files(&path, glob.as_deref())?
            } else {
                vec![path]
            };
            for path in paths {
                let bytes =
                    fs::read(&path).with_context(|| format!("read {}", path.display()))?;
                let report = inspect_file(&bytes, &limits)
                    .with_context(|| format!("decode {}", path.display()))?;
                if json {
                    let json =
                        serde_json::to_string_pretty(&report).context("serialize report")?;
                    println!("{json}");
                } else {
                    println!("== {} ==", path.display());
                    print_inspect_report(&report);
                }
            }
        }
        Command::Decode { file, format } => {
            let bytes = fs::read(&file).with_context(|| format!("read {}", file.display()))?;
            let decoded = decode_file_json(&bytes, &limits)
                .with_context(|| format!("decode {}", file.display()))?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&decoded).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&decoded));
                }
            }
        }
    }
    Ok(())
}

fn collect_files(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !pattern.matches_path(&path) && !matches_name {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "{} bytes, {} records ({} samples, {} timestamps)",
        report.byte_len,
        report.record_count,
        report.sample_count,
        report.timestamps.len()
    );
    for entry in &report.timestamps {
        println!(
            "timestamp {} at record {} (byte {})",
            entry.timestamp, entry.position, entry.byte_offset
        );
    }
    println!("columns:");
    for column in &report.columns {
        let range = match (column.min, column.max) {
            (Some(min), Some(max)) => format!("{min}..={max}"),
            _ => "empty".to_string(),
        };
        let order = if column.sorted { "sorted" } else { "unsorted" };
        println!("  f{}: {range} {order}", column.index);
    }
}
