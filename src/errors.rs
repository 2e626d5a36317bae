// errors.rs
use std::fmt;

/// Errors raised at the edges of the pipeline: configuration, catalog
/// files, network fetches and CLI input. Extraction itself never fails.
#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    JsonParse(String),
    Config(String),
    Io(String),
    Catalog(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            ScraperError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ScraperError::Io(msg) => write!(f, "I/O error: {msg}"),
            ScraperError::Catalog(msg) => write!(f, "Amenity catalog error: {msg}"),
        }
    }
}

impl std::error::Error for ScraperError {}

impl From<std::io::Error> for ScraperError {
    fn from(e: std::io::Error) -> Self {
        ScraperError::Io(e.to_string())
    }
}
