use crate::error::{Result, ScrapeError};
use crate::extractor::rules::{HeuristicRule, default_rules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Homepage to fetch headlines from
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Where the full headline list is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Timeout for the homepage request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// URL used to check outbound connectivity before fetching
    #[serde(default = "default_probe_url")]
    pub probe_url: String,

    /// Timeout for the connectivity probe, in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Additional request headers, applied on top of the browser defaults
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Ordered heuristic table
    #[serde(default = "default_rules")]
    pub rules: Vec<HeuristicRule>,

    /// How many headlines are printed to the console
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// First line of the output file
    #[serde(default = "default_file_title")]
    pub file_title: String,

    /// Diagnostic mode settings
    #[serde(default)]
    pub diagnostics: DiagnosticConfig,
}

/// Settings for the fallback scan run when no headline is found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticConfig {
    /// Class names matching this pattern are reported
    #[serde(default = "default_class_pattern")]
    pub class_pattern: String,

    /// Attribute names matching this pattern are reported
    #[serde(default = "default_attribute_pattern")]
    pub attribute_pattern: String,

    /// Maximum number of distinct names reported per category
    #[serde(default = "default_diagnostic_limit")]
    pub limit: usize,
}

fn default_target_url() -> String {
    "https://mail.ru".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("mail_ru_titles.txt")
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_probe_url() -> String {
    "https://google.com".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    5
}

fn default_display_limit() -> usize {
    25
}

fn default_file_title() -> String {
    "Заголовки новостей с mail.ru".to_string()
}

fn default_class_pattern() -> String {
    "(?i)news".to_string()
}

fn default_attribute_pattern() -> String {
    "^data-.*(news|item|link)".to_string()
}

fn default_diagnostic_limit() -> usize {
    10
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            class_pattern: default_class_pattern(),
            attribute_pattern: default_attribute_pattern(),
            limit: default_diagnostic_limit(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            output_path: default_output_path(),
            request_timeout_secs: default_request_timeout_secs(),
            probe_url: default_probe_url(),
            probe_timeout_secs: default_probe_timeout_secs(),
            headers: BTreeMap::new(),
            rules: default_rules(),
            display_limit: default_display_limit(),
            file_title: default_file_title(),
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read = |path: &Path| -> std::io::Result<String> {
            let mut contents = String::new();
            File::open(path)?.read_to_string(&mut contents)?;
            Ok(contents)
        };

        let contents = read(path).map_err(|source| ScrapeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        ::log::debug!("Loaded config file {}", path.display());

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
