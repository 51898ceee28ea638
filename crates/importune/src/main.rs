use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use importune::{Config, RelativeOrder, canonicalize_imports};
use log::debug;

#[derive(Debug, Parser)]
#[command(name = "importune")]
#[command(about = "Canonicalizes the leading import block of a Python module", long_about = None)]
struct Cli {
    /// Python file to read; `-` or absent reads stdin
    file: Option<PathBuf>,

    /// Deferred module prefix; repeat to defer several, in priority order.
    /// Overrides any configured list.
    #[arg(long, value_name = "PREFIX")]
    defer: Vec<String>,

    /// Direction in which relative-import levels compare
    #[arg(long, value_enum, value_name = "ORDER")]
    relative_order: Option<RelativeOrder>,

    /// Explicit configuration file, bypassing discovery
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {cli:?}");

    let source = read_source(cli.file.as_deref())?;
    let config = resolve_config(&cli)?;
    let block = canonicalize_imports(&source, &config).context("failed to parse Python source")?;

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());
    if !block.is_empty() {
        writeln!(stdout, "{block}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let cwd = std::env::current_dir().context("failed to resolve working directory")?;
            Config::discover(&cwd)?
        }
    };
    if !cli.defer.is_empty() {
        config.defer.clone_from(&cli.defer);
    }
    if let Some(relative_order) = cli.relative_order {
        config.relative_order = relative_order;
    }
    Ok(config)
}
