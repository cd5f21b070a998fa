use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use std::future::Future;
use std::time::Duration;

/// Setup step run before anything is fetched
pub trait EnvironmentCheck {
    /// Resolve to `Ok(())` if the run may proceed
    fn check(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Checks outbound connectivity with a single GET to a well-known URL.
/// Any HTTP response counts as reachable; only transport failures do not.
#[derive(Debug, Clone)]
pub struct NetworkProbe {
    url: String,
    timeout: Duration,
}

impl NetworkProbe {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(
            &config.probe_url,
            Duration::from_secs(config.probe_timeout_secs),
        )
    }

    async fn probe(&self) -> std::result::Result<reqwest::StatusCode, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&self.url).send().await?;
        Ok(response.status())
    }
}

impl EnvironmentCheck for NetworkProbe {
    async fn check(&self) -> Result<()> {
        ::log::debug!("Probing connectivity via {}", self.url);
        match self.probe().await {
            Ok(status) => {
                ::log::debug!("Probe answered with {}", status);
                Ok(())
            }
            Err(source) => {
                ::log::warn!("Connectivity probe failed: {}", source);
                Err(ScrapeError::EnvironmentUnreachable {
                    url: self.url.clone(),
                    source,
                })
            }
        }
    }
}

/// An environment that is always ready, for offline use and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeOnline;

impl EnvironmentCheck for AssumeOnline {
    async fn check(&self) -> Result<()> {
        Ok(())
    }
}
