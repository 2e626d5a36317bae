use crate::amenities::{AmenityCatalog, AmenityNormalizer};
use crate::cli::{Cli, Commands, ExtractArgs, ScrapeArgs, TuningArgs};
use crate::config::ExtractorConfig;
use crate::domain::{CanonicalListing, SchemaMapper};
use crate::errors::ScraperError;
use crate::extract::ListingExtractor;
use crate::fetcher::{HttpFetch, ReqwestFetcher};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod amenities;
mod cli;
mod config;
mod domain;
mod errors;
mod extract;
mod fetcher;
mod listing_url;

#[cfg(test)]
mod tests;

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ScraperError> {
    let cfg = apply_overrides(ExtractorConfig::from_env()?, &cli.tuning);

    match cli.command {
        Commands::Extract(args) => extract_file(&cfg, &args),
        Commands::NormalizeUrl(args) => {
            println!("{}", listing_url::normalize_listing_url(&args.url));
            Ok(())
        }
        Commands::Canonicalize(args) => {
            let fetcher = ReqwestFetcher::new()?;
            println!("{}", listing_url::resolve_listing_url(&args.url, &fetcher, &cfg));
            Ok(())
        }
        Commands::Scrape(args) => scrape(&cfg, &args),
    }
}

fn apply_overrides(mut cfg: ExtractorConfig, tuning: &TuningArgs) -> ExtractorConfig {
    if let Some(n) = tuning.max_photos {
        cfg.max_photos = n;
    }
    if let Some(px) = tuning.min_photo_px {
        cfg.min_photo_side_px = px;
    }
    if let Some(score) = tuning.fuzzy_threshold {
        cfg.fuzzy_threshold = score;
    }
    if let Some(secs) = tuning.canonicalize_timeout_secs {
        cfg.canonicalize_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = tuning.page_timeout_secs {
        cfg.page_timeout = Duration::from_secs(secs);
    }
    if tuning.taxonomy.is_some() {
        cfg.taxonomy_path = tuning.taxonomy.clone();
    }
    if tuning.synonyms.is_some() {
        cfg.synonyms_path = tuning.synonyms.clone();
    }
    cfg
}

fn build_normalizer(cfg: &ExtractorConfig) -> Result<AmenityNormalizer, ScraperError> {
    let catalog = match (&cfg.taxonomy_path, &cfg.synonyms_path) {
        (Some(taxonomy), Some(synonyms)) => Arc::new(AmenityCatalog::load(taxonomy, synonyms)?),
        (None, None) => AmenityCatalog::builtin(),
        _ => {
            return Err(ScraperError::Config(
                "taxonomy and synonyms files must be given together".into(),
            ))
        }
    };
    Ok(AmenityNormalizer::new(catalog, cfg.fuzzy_threshold))
}

fn extract_file(cfg: &ExtractorConfig, args: &ExtractArgs) -> Result<(), ScraperError> {
    let normalizer = build_normalizer(cfg)?;
    let extractor = ListingExtractor::new(cfg.clone(), normalizer.clone());

    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| ScraperError::Io(format!("{}: {e}", args.input.display())))?;
    let url = listing_url::normalize_listing_url(&args.url);

    let listing = match serde_json::from_str::<Value>(&text) {
        Ok(state) => extractor.from_state(&state, &url),
        Err(_) => extractor.from_html(&text, &url),
    };

    emit(&listing, args.target, &normalizer)
}

fn scrape(cfg: &ExtractorConfig, args: &ScrapeArgs) -> Result<(), ScraperError> {
    let normalizer = build_normalizer(cfg)?;
    let extractor = ListingExtractor::new(cfg.clone(), normalizer.clone());
    let fetcher = ReqwestFetcher::new()?;

    let url = listing_url::resolve_listing_url(&args.url, &fetcher, cfg);
    if url.is_empty() {
        return Err(ScraperError::Config("empty url".into()));
    }
    info!(url = %url, "fetching listing");

    let page = fetcher.get(&url, cfg.page_timeout)?;
    if !page.is_success() {
        return Err(ScraperError::Network(format!(
            "HTTP {} for {}",
            page.status, page.final_url
        )));
    }
    let listing = extractor.from_html(&page.body, &url);

    emit(&listing, args.target, &normalizer)
}

fn emit(
    listing: &CanonicalListing,
    target: bool,
    normalizer: &AmenityNormalizer,
) -> Result<(), ScraperError> {
    if target {
        let mapped = SchemaMapper::new(normalizer.clone()).map(listing);
        print_json(&mapped)
    } else {
        print_json(listing)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ScraperError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| ScraperError::JsonParse(e.to_string()))?;
    println!("{out}");
    Ok(())
}
