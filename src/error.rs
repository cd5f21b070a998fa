use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop (or partially fail) a scrape run
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The connectivity probe could not reach its URL at all
    #[error("network is unreachable (probe {url}): {source}")]
    EnvironmentUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A heuristic selector failed to compile
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// A diagnostic pattern failed to compile
    #[error("invalid diagnostic pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The target URL could not be parsed
    #[error("invalid target URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured request header has an invalid name or value
    #[error("invalid request header `{name}`")]
    InvalidHeader { name: String },

    /// The HTTP client could not be set up (TLS backend, resolver)
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The server answered with something other than 200
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Transport-level failure (DNS, refused connection, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for `ScraperConfig`
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Whether the rest of the run can continue after this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScrapeError::FileWrite { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
