//! rempx CLI
//!
//! Reads a stylesheet from a file or stdin, inserts pixel fallbacks for
//! `rem` declarations, and writes the result to a file or stdout.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize as _;
use rempx_core::{ConversionOptions, MapOptions, OutputOptions};

/// Generate pixel fallbacks for rem units in CSS.
#[derive(Debug, Parser)]
#[command(name = "rempx", version, about)]
struct Cli {
    /// Input CSS file; reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Root font size override, e.g. "20px", "1.5em", "150%", "18".
    #[arg(long, value_name = "VALUE")]
    root_value: Option<String>,

    /// Replace rem declarations instead of keeping both.
    #[arg(long)]
    replace: bool,

    /// Also convert inside top-level at-rules (@media, @supports).
    #[arg(long)]
    atrules: bool,

    /// Load conversion options from a JSON file; explicit flags win.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append a sourcemap reference annotation (requires --output).
    #[arg(long)]
    map: bool,

    /// Dump the parsed stylesheet tree as JSON to stderr and exit.
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let css = read_input(cli.input.as_ref())?;

    if cli.dump_ast {
        let tree = rempx_syntax::parse(&css);
        eprintln!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let options = load_options(&cli)?;

    if cli.map && cli.output.is_none() {
        bail!("--map needs --output to name the map file");
    }

    let output_options = OutputOptions {
        from: cli.input.as_ref().map(|p| p.display().to_string()),
        to: cli.output.as_ref().map(|p| p.display().to_string()),
        map: cli.map.then_some(MapOptions { inline: false }),
    };

    let report = rempx_core::process_report(
        &css,
        cli.root_value.as_deref(),
        &options,
        &output_options,
    )
    .map_err(|e| anyhow::anyhow!("{}", e.to_string().red()))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &report.css)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{}",
                format!(
                    "rempx: converted {} declaration(s) -> {}",
                    report.converted,
                    path.display()
                )
                .green()
            );
        }
        None => print!("{}", report.css),
    }

    Ok(())
}

/// Read the stylesheet from the given path, or stdin for `None` / `-`.
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut css = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut css)
                .context("failed to read stdin")?;
            Ok(css)
        }
    }
}

/// Merge options from the optional JSON config file with the CLI flags;
/// a flag that is set wins over the file.
fn load_options(cli: &Cli) -> Result<ConversionOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid options in {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };
    options.replace |= cli.replace;
    options.atrules |= cli.atrules;
    Ok(options)
}
