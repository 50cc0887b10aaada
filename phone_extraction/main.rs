use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use text_scanners::{init_tracing, phone, text, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "phone_extraction", about = "Print names listed with an area-11 phone number")]
struct Cli {
    /// Scan this file instead of the built-in phone list
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Print line numbers and names as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings_loaded = ?settings, msg = "Starting phone extraction");

    let source = match cli.input.or(settings.phone_input) {
        Some(path) => text::read_document(&path)
            .with_context(|| format!("Failed to read phone list {:?}", path))?,
        None => phone::SAMPLE_DIRECTORY.to_string(),
    };

    let entries = phone::extract_entries(&source);
    info!(matches = entries.len(), "scan complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", entry.name);
        }
    }
    Ok(())
}
