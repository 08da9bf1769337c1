mod catalog;
mod config;
mod export;
mod model;
mod parser;
mod resolver;

use anyhow::Context;
use catalog::CatalogIndex;
use clap::Parser;
use config::{AppConfig, load_config};
use parser::QueryParser;
use resolver::{ResolveOptions, Resolver, ResolverImpl};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_CATALOG: &str = "products.csv";
const DEFAULT_CONFIG: &str = "config.json";

/// Looks up MLP codes and descriptions for a pasted list of product models.
#[derive(Debug, Parser)]
#[command(name = "mlp-lookup", version)]
struct Args {
    /// Catalog CSV; needs a 'Model' column, 'MLP' and 'Description' are optional
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Read the model list from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use 'contains' matching when an exact match is not found
    #[arg(long)]
    contains: bool,

    /// Show only models that were not found
    #[arg(long)]
    not_found_only: bool,

    /// Write the result table to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file with default options
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let cfg = if args.config.exists() {
        load_config(&args.config.to_string_lossy())
            .map_err(|e| anyhow::anyhow!("config load error: {e}"))?
    } else {
        AppConfig::default()
    };

    let catalog_path = args
        .catalog
        .or_else(|| cfg.catalog_path.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    let index = CatalogIndex::load(&catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
    if index.is_empty() {
        warn!("Catalog {} has no rows", catalog_path.display());
    } else {
        info!("Catalog loaded: {} rows", index.len());
    }

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read models from stdin")?;
            text
        }
    };

    let keys = QueryParser::new().parse(&raw);
    if keys.is_empty() {
        warn!("No models in input; paste at least one model code");
        return Ok(());
    }
    info!("Looking up {} unique models...", keys.len());

    let resolver = ResolverImpl::new();
    let options = ResolveOptions {
        allow_contains: args.contains || cfg.allow_contains,
    };
    let mut results = resolver.resolve(&keys, &index, options);

    if args.not_found_only || cfg.show_only_not_found {
        results = resolver.filter_not_found(results);
    }
    let (matched, total) = resolver.summarize(&results);

    println!("{}", export::render_table(&results));
    println!("Matched {matched} of {total}");

    if let Some(path) = args
        .output
        .or_else(|| cfg.output_path.as_deref().map(PathBuf::from))
    {
        export::export_csv(&results, &path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        info!("Results written to {}", path.display());
    }

    Ok(())
}
