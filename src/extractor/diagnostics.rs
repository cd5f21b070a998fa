use crate::config::DiagnosticConfig;
use crate::error::Result;
use crate::results::DiagnosticReport;
use regex::Regex;
use scraper::{ElementRef, Html};

/// Scans a document for class and attribute names that look like news markup
#[derive(Debug, Clone)]
pub struct DiagnosticScanner {
    class_regex: Regex,
    attribute_regex: Regex,
    limit: usize,
}

impl DiagnosticScanner {
    pub fn new(config: &DiagnosticConfig) -> Result<Self> {
        Ok(Self {
            class_regex: Regex::new(&config.class_pattern)?,
            attribute_regex: Regex::new(&config.attribute_pattern)?,
            limit: config.limit,
        })
    }

    /// Collect up to `limit` distinct class names and attribute names, in
    /// the order they first appear in the document
    pub fn scan(&self, document: &Html) -> DiagnosticReport {
        let mut report = DiagnosticReport::default();

        let elements = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap);

        for element in elements {
            for class in element.value().classes() {
                collect(&mut report.class_names, class, &self.class_regex, self.limit);
            }
            for (name, _) in element.value().attrs() {
                collect(
                    &mut report.attribute_names,
                    name,
                    &self.attribute_regex,
                    self.limit,
                );
            }
            if report.class_names.len() >= self.limit
                && report.attribute_names.len() >= self.limit
            {
                break;
            }
        }

        ::log::debug!(
            "Diagnostic scan found {} class names and {} attribute names",
            report.class_names.len(),
            report.attribute_names.len()
        );

        report
    }
}

fn collect(found: &mut Vec<String>, name: &str, regex: &Regex, limit: usize) {
    if found.len() < limit && regex.is_match(name) && !found.iter().any(|n| n == name) {
        found.push(name.to_string());
    }
}
