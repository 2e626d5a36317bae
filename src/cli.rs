use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "listing-mapper",
    version,
    about = "Extract rental listings and map them onto the partner schema"
)]
pub struct Cli {
    #[command(flatten)]
    pub tuning: TuningArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a listing from a saved page (HTML) or embedded state (JSON).
    Extract(ExtractArgs),
    /// Print the cleaned-up form of a pasted URL.
    NormalizeUrl(UrlArgs),
    /// Resolve a share or search link to the listing detail URL.
    Canonicalize(UrlArgs),
    /// Resolve, fetch and extract a listing over HTTP.
    Scrape(ScrapeArgs),
}

/// Overrides for values otherwise taken from the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct TuningArgs {
    #[arg(long, global = true)]
    pub max_photos: Option<usize>,

    #[arg(long, global = true)]
    pub min_photo_px: Option<i64>,

    #[arg(long, global = true)]
    pub fuzzy_threshold: Option<f64>,

    /// Timeout for the request that resolves share links.
    #[arg(long, global = true)]
    pub canonicalize_timeout_secs: Option<u64>,

    /// Timeout for fetching the listing page itself.
    #[arg(long, global = true)]
    pub page_timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    pub taxonomy: Option<PathBuf>,

    #[arg(long, global = true)]
    pub synonyms: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    pub input: PathBuf,

    /// URL recorded as the listing's canonical URL.
    #[arg(long, default_value = "")]
    pub url: String,

    /// Emit the partner-schema record instead of the canonical one.
    #[arg(long, default_value_t = false)]
    pub target: bool,
}

#[derive(Args, Debug, Clone)]
pub struct UrlArgs {
    pub url: String,
}

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    pub url: String,

    #[arg(long, default_value_t = false)]
    pub target: bool,
}
