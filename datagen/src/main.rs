use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use generator::{generate_run, GeneratorConfig, RngSource, RunSummary, FILE_COUNT};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sdat-datagen",
    version,
    about = "Sample/timestamp record file generator"
)]
struct Cli {
    /// Output directory for `s<N>.dat` files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// RNG seed for byte-identical output; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of files to generate.
    #[arg(long, default_value_t = FILE_COUNT)]
    files: usize,
    /// Also write `summary.json` next to the generated files.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        file_count: cli.files,
        ..GeneratorConfig::default()
    };
    let mut rng = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy().context("seed random source")?,
    };
    info!(
        out_dir = %cli.out_dir.display(),
        files = config.file_count,
        seed = ?cli.seed,
        "starting generation"
    );

    let summary = generate_run(&cli.out_dir, &config, &mut rng)
        .with_context(|| format!("generate files in {}", cli.out_dir.display()))?;

    if cli.summary {
        write_summary_json(&cli.out_dir, &summary)?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn write_summary_json(out_dir: &Path, summary: &RunSummary) -> Result<()> {
    let path = out_dir.join("summary.json");
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
