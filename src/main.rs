//! hako-tsgen — generate the TypeScript exports interface from an annotated C header.
//!
//! Reads one header, pairs each `/** ... */` block with the `HAKO_*` function
//! declared after it, and prints an `export interface` whose members carry the
//! `@tsparam` / `@tsreturn` types from those comments.
//!
//! - `hako-tsgen < hako.h`
//! - `hako-tsgen bridge/hako.h src/etc/wasm.ts`

mod git;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use model::{GitInfo, RunMetadata};
use render::typescript::{TypeScriptRenderer, DEFAULT_INTERFACE_NAME};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Input path that selects standard input.
const STDIN_PLACEHOLDER: &str = "-";

#[derive(Parser)]
#[command(
    name = "hako-tsgen",
    version,
    about = "Generate a TypeScript exports interface from an annotated C header"
)]
struct Cli {
    /// Input header file, or "-" for stdin
    #[arg(default_value = STDIN_PLACEHOLDER)]
    input: String,

    /// Output file. If omitted, writes to stdout.
    output: Option<PathBuf>,

    /// Name of the generated interface
    #[arg(short = 'n', long, default_value = DEFAULT_INTERFACE_NAME)]
    interface_name: String,

    /// Naming prefix of exported functions
    #[arg(short = 'p', long, default_value = parser::DEFAULT_PREFIX)]
    prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hako_tsgen=warn")),
        )
        .init();

    let cli = Cli::parse();
    let header = read_input(&cli.input)?;
    let output = generate(&cli, &header)?;

    match cli.output {
        Some(ref path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", output),
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN_PLACEHOLDER {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

/// Run the extraction and render the interface for `header`.
fn generate(cli: &Cli, header: &str) -> Result<String> {
    let extractor = parser::Extractor::new(&cli.prefix)?;
    let records = extractor.extract(header);

    let meta = RunMetadata {
        generated_at: chrono::Local::now().naive_local(),
        source_file: source_name(&cli.input),
        git: GitInfo::collect_here(),
    };

    let renderer = TypeScriptRenderer {
        interface_name: &cli.interface_name,
    };
    Ok(renderer.render(&records, &meta))
}

/// Base name of the input for the generated header; `None` for stdin.
fn source_name(input: &str) -> Option<String> {
    if input == STDIN_PLACEHOLDER {
        return None;
    }
    Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}
