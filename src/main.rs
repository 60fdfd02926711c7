//! CLI that parses a file of address lines and prints JSON records.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use email_line_parser::{format_records_json, parse_lines};

/// Extract address specs and display names, one record per input line
#[derive(Parser)]
#[command(name = "email-line-parser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to file containing email addresses to parse
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let file = File::open(&cli.file)
        .with_context(|| format!("Error opening file: {}", cli.file.display()))?;

    let records = parse_lines(BufReader::new(file))?;
    let failed = records.iter().filter(|r| !r.is_ok()).count();
    info!("Parsed {} lines, {failed} with errors", records.len());

    let json = format_records_json(&records).context("Error formatting JSON")?;
    println!("{json}");

    Ok(())
}
