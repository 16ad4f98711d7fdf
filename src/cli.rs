use bom_resolver::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Resolve multi-level product compositions into enriched BOM trees
#[derive(Parser, Debug)]
#[command(name = "bom-resolver")]
#[command(version)]
#[command(
    about = "Resolve multi-level product compositions into enriched BOM trees",
    long_about = None
)]
pub struct Args {
    /// Root barcodes to resolve, in output order
    #[arg(value_name = "BARCODE", required = true, num_args = 1..)]
    pub barcodes: Vec<String>,

    /// Tenant whose catalog the barcodes belong to
    #[arg(short, long)]
    pub tenant: Option<String>,

    /// Catalog file (.json, .yml, .yaml or .toml) to resolve against
    #[arg(short, long, value_name = "PATH", conflicts_with = "store_url")]
    pub catalog: Option<PathBuf>,

    /// Base URL of a document store serving /product/barcode/pk/{barcode}
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// Bearer token sent to the document store
    #[arg(long, value_name = "TOKEN")]
    pub store_token: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./bom-resolver.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Deadline for each root in seconds (default: 15)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Fail with the cycle path instead of running into the depth limit
    #[arg(long)]
    pub detect_cycles: bool,

    /// Language code for names in Markdown output (e.g. en, th)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
