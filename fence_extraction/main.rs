use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use text_scanners::{fences, init_tracing, FencedBlock, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "fence_extraction", about = "Collect fenced code blocks from a Markdown file")]
struct Cli {
    /// Markdown document to scan (default: SCAN_FENCE_PATH or README.md)
    path: Option<PathBuf>,
    /// Print each block's language tag and body
    #[arg(long)]
    show: bool,
    /// Print the blocks as JSON
    #[arg(long, conflicts_with = "show")]
    json: bool,
}

fn print_block(block: &FencedBlock) {
    println!("--- {}", block.lang().unwrap_or("(none)"));
    print!("{}", block.code);
    if !block.code.is_empty() && !block.code.ends_with('\n') {
        println!();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings_loaded = ?settings, msg = "Starting fence extraction");

    let path = cli.path.unwrap_or(settings.fence_path);
    let blocks = fences::extract_from_file(&path)
        .with_context(|| format!("Failed to scan {:?}", path))?;
    info!(path = ?path, blocks = blocks.len(), "scan complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else if cli.show {
        blocks.iter().for_each(print_block);
    }
    Ok(())
}
