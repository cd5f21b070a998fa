use clap::Parser;
use headline_scrape::ScraperConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headline-scrape")]
#[command(about = "Fetches a news portal homepage and extracts its headlines")]
#[command(version)]
pub struct Args {
    /// Homepage to scrape (defaults to the configured target, https://mail.ru)
    pub url: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File the full headline list is written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of headlines printed to the console
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Do not probe network connectivity before fetching
    #[arg(long)]
    pub skip_network_check: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: ScraperConfig) -> ScraperConfig {
        if let Some(url) = &self.url {
            config.target_url = url.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(limit) = self.limit {
            config.display_limit = limit;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        config
    }
}
