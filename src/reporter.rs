use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::results::{DiagnosticReport, HeadlineList};
use crate::utils::separator;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

const CONSOLE_RULE_WIDTH: usize = 80;
const FILE_RULE_WIDTH: usize = 50;

/// Prints headlines to the console and persists them to a text file
#[derive(Debug, Clone)]
pub struct Reporter {
    display_limit: usize,
    output_path: PathBuf,
    file_title: String,
}

impl Reporter {
    pub fn new(display_limit: usize, output_path: impl Into<PathBuf>, file_title: &str) -> Self {
        Self {
            display_limit,
            output_path: output_path.into(),
            file_title: file_title.to_string(),
        }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(
            config.display_limit,
            config.output_path.clone(),
            &config.file_title,
        )
    }

    /// Numbered listing of the first `display_limit` headlines plus a
    /// "shown X of Y" summary
    pub fn print_listing<W: Write>(&self, headlines: &HeadlineList, out: &mut W) -> std::io::Result<()> {
        let total = headlines.len();
        let rule = separator(CONSOLE_RULE_WIDTH);

        writeln!(out)?;
        writeln!(out, "📰 НАЙДЕНО {} ЗАГОЛОВКОВ:", total)?;
        writeln!(out)?;
        writeln!(out, "{}", rule)?;

        for (i, headline) in headlines.iter().take(self.display_limit).enumerate() {
            writeln!(out, "{:>2}. {}", i + 1, headline)?;
        }

        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "Показано {} из {} заголовков",
            total.min(self.display_limit),
            total
        )
    }

    /// Candidate class and attribute names, for tuning the heuristics by hand
    pub fn print_diagnostics<W: Write>(
        &self,
        report: &DiagnosticReport,
        out: &mut W,
    ) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "🐛 Отладочная информация:")?;
        writeln!(out, "Попробуем найти возможные селекторы...")?;

        if !report.class_names.is_empty() {
            writeln!(out, "Найдены классы с 'news': {:?}", report.class_names)?;
        }
        if !report.attribute_names.is_empty() {
            writeln!(out, "Найдены data-атрибуты: {:?}", report.attribute_names)?;
        }
        Ok(())
    }

    /// File contents: title, rule, blank line, then every headline numbered
    pub fn render_file(&self, headlines: &HeadlineList) -> String {
        let mut contents = String::new();
        let _ = writeln!(contents, "{}", self.file_title);
        let _ = writeln!(contents, "{}", separator(FILE_RULE_WIDTH));
        contents.push('\n');

        for (i, headline) in headlines.iter().enumerate() {
            let _ = writeln!(contents, "{}. {}", i + 1, headline);
        }
        contents
    }

    /// Write the full list to the output path
    pub fn save(&self, headlines: &HeadlineList) -> Result<&Path> {
        std::fs::write(&self.output_path, self.render_file(headlines)).map_err(|source| {
            ScrapeError::FileWrite {
                path: self.output_path.clone(),
                source,
            }
        })?;

        ::log::info!(
            "Saved {} headlines to {}",
            headlines.len(),
            self.output_path.display()
        );
        Ok(&self.output_path)
    }
}
