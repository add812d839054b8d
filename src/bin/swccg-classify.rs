//! Classify a directory of plaintext decklists.
//!
//! Reads the Dark and Light card catalogs and every `.txt` decklist in a
//! directory (in file-name order), then writes `decklists.json` and
//! `archetypes.json` to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swccg_decklists::cards::Catalog;
use swccg_decklists::core::ClassifierConfig;
use swccg_decklists::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "swccg-classify", about = "Name the archetypes of SWCCG tournament decklists")]
struct Cli {
    /// Dark side card catalog (JSON)
    #[arg(long)]
    dark: PathBuf,

    /// Light side card catalog (JSON)
    #[arg(long)]
    light: PathBuf,

    /// Directory of plaintext decklists
    #[arg(long)]
    decklists: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, default_value = "output")]
    out: PathBuf,

    /// Classifier configuration (JSON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn decklist_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => serde_json::from_str(&read(path)?)
            .with_context(|| format!("parsing {}", path.display()))?,
        None => ClassifierConfig::default(),
    };

    let catalog = Catalog::load(&read(&cli.dark)?, &read(&cli.light)?).context("loading card catalog")?;
    tracing::info!(cards = catalog.len(), "catalog loaded");

    let texts = decklist_paths(&cli.decklists)?
        .iter()
        .map(|path| read(path))
        .collect::<Result<Vec<_>>>()?;

    let output = Pipeline::new(&catalog, config).run(&texts);

    fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    write_json(&cli.out.join("decklists.json"), &output.records)?;
    write_json(&cli.out.join("archetypes.json"), &output.archetypes)?;

    println!(
        "{} decklists ({} complete), {} archetypes, {} unresolved lines",
        output.report.decklists,
        output.report.complete,
        output.report.archetypes,
        output.report.unresolved_lines
    );
    Ok(())
}
