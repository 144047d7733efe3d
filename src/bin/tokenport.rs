//! Command line front end: reads a token file and writes the generated sources.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tokenport::style::StyleResolver;
use tokenport::token::TokenSet;
use tokenport::{write_output, ExportConfig, Exporter, OutputFile};

/// Export design tokens to an Xcode asset catalog and Swift extensions.
#[derive(Debug, Parser)]
#[command(name = "tokenport", version, about)]
struct Args {
    /// Token file (JSON, or YAML by `.yaml`/`.yml` extension).
    tokens: PathBuf,

    /// Export configuration; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the output paths are relative to.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// List the files that would be written without writing them.
    #[arg(long)]
    dry_run: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => ExportConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExportConfig::default(),
    };
    let tokens = TokenSet::load(&args.tokens)
        .with_context(|| format!("failed to load tokens {}", args.tokens.display()))?;

    let resolver = StyleResolver::new(config.typography.metrics_table());
    let exporter = Exporter::new(config).context("failed to prepare templates")?;
    let mut files = exporter
        .export_colors(&tokens.colors)
        .context("color export failed")?;
    files.extend(
        exporter
            .export_text_styles(&tokens.text_styles, &resolver)
            .context("text style export failed")?,
    );

    if args.dry_run {
        print_files(&files);
        return Ok(());
    }

    write_output(&args.output, &files)
        .with_context(|| format!("failed to write to {}", args.output.display()))?;
    println!(
        "{} {} colors, {} text styles -> {} files in {}",
        style("Exported").green().bold(),
        tokens.colors.len(),
        tokens.text_styles.len(),
        files.len(),
        style(args.output.display()).cyan()
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_files(files: &[OutputFile]) {
    for file in files {
        println!(
            "{} ({} bytes)",
            style(file.path.display()).cyan(),
            file.contents.len()
        );
    }
}
