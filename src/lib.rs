//! Headline scraping for news portal homepages.
//!
//! A run is a fixed pipeline: connectivity check, preflight (compile the
//! heuristic table), one HTTP fetch, heuristic extraction, and reporting to
//! the console and a text file. Failures are reported as text and end the run
//! early; nothing is retried.

pub mod config;
pub mod environment;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod reporter;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use environment::{AssumeOnline, EnvironmentCheck, NetworkProbe};
pub use error::ScrapeError;
pub use extractor::{Extraction, Extractor};
pub use results::{DiagnosticReport, HeadlineList};

use fetcher::Fetcher;
use reporter::Reporter;
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Headlines were printed and written to `path`
    Saved { found: usize, path: PathBuf },
    /// Headlines were printed but the file could not be written
    SaveFailed { found: usize, error: ScrapeError },
    /// No headline qualified; the diagnostic scan was printed instead
    NotFound(DiagnosticReport),
    /// A setup step or the fetch failed; nothing was extracted
    Aborted(ScrapeError),
}

/// Runs the scrape pipeline for one configuration
pub struct Scraper<E = NetworkProbe> {
    config: ScraperConfig,
    environment: E,
}

impl Scraper<NetworkProbe> {
    /// Create a scraper that probes the network before fetching
    pub fn new(config: ScraperConfig) -> Self {
        let environment = NetworkProbe::from_config(&config);
        Self {
            config,
            environment,
        }
    }
}

impl<E: EnvironmentCheck> Scraper<E> {
    /// Replace the environment check, e.g. with `AssumeOnline`
    pub fn with_environment<F: EnvironmentCheck>(self, environment: F) -> Scraper<F> {
        Scraper {
            config: self.config,
            environment,
        }
    }

    /// Run every stage in order, writing progress to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> RunOutcome {
        say(out, "🔍 Проверяем доступ к сети...");
        if let Err(e) = self.environment.check().await {
            say(out, "✗ Нет интернет соединения");
            return abort(e);
        }
        say(out, "✓ Интернет соединение работает");

        say(out, "\n📦 Проверяем парсер...");
        let (extractor, fetcher) = match self.preflight() {
            Ok(stages) => stages,
            Err(e) => {
                say(out, format!("✗ Ошибка конфигурации: {}", e));
                return abort(e);
            }
        };
        say(
            out,
            format!("✓ Парсер готов: {} правил", self.config.rules.len()),
        );

        say(out, format!("\n🌐 Подключаемся к {}...", self.config.target_url));
        let page = match fetcher.fetch(&self.config.target_url).await {
            Ok(page) => page,
            Err(e) => {
                match &e {
                    ScrapeError::HttpStatus(code) => say(out, format!("✗ Ошибка HTTP: {}", code)),
                    ScrapeError::Network(source) => say(out, format!("✗ Ошибка сети: {}", source)),
                    other => say(out, format!("✗ {}", other)),
                }
                return abort(e);
            }
        };
        say(out, "✓ Страница успешно загружена");

        say(out, "🔍 Ищем заголовки новостей...");
        let reporter = Reporter::from_config(&self.config);

        match extractor.extract_page(&page) {
            Extraction::Headlines(headlines) => {
                if let Err(e) = reporter.print_listing(&headlines, out) {
                    ::log::warn!("Failed to print headlines: {}", e);
                }
                self.persist(&reporter, &headlines, out)
            }
            Extraction::NotFound(report) => {
                say(out, "✗ Не удалось найти заголовки");
                if let Err(e) = reporter.print_diagnostics(&report, out) {
                    ::log::warn!("Failed to print diagnostics: {}", e);
                }
                RunOutcome::NotFound(report)
            }
        }
    }

    /// Compile the heuristics and build the HTTP client before any fetch
    fn preflight(&self) -> error::Result<(Extractor, Fetcher)> {
        let extractor = Extractor::new(&self.config)?;
        let fetcher = Fetcher::new(&self.config)?;
        Ok((extractor, fetcher))
    }

    fn persist<W: Write>(
        &self,
        reporter: &Reporter,
        headlines: &HeadlineList,
        out: &mut W,
    ) -> RunOutcome {
        match reporter.save(headlines) {
            Ok(path) => {
                say(
                    out,
                    format!("💾 Результаты сохранены в файл: {}", path.display()),
                );
                RunOutcome::Saved {
                    found: headlines.len(),
                    path: path.to_path_buf(),
                }
            }
            Err(error) if !error.is_fatal() => {
                ::log::error!("{}", error);
                say(out, format!("✗ Ошибка сохранения файла: {}", error));
                RunOutcome::SaveFailed {
                    found: headlines.len(),
                    error,
                }
            }
            Err(error) => {
                say(out, format!("✗ {}", error));
                abort(error)
            }
        }
    }
}

fn abort(error: ScrapeError) -> RunOutcome {
    ::log::error!("Run aborted: {}", error);
    RunOutcome::Aborted(error)
}

/// Print one progress line; a broken stdout is logged, never fatal
fn say<W: Write>(out: &mut W, line: impl Display) {
    if let Err(e) = writeln!(out, "{}", line) {
        ::log::warn!("Failed to write progress line: {}", e);
    }
}
