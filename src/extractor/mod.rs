pub mod diagnostics;
pub mod encoding;
pub mod rules;


use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::results::{DiagnosticReport, FetchedPage, HeadlineList};
use crate::utils::{char_len, element_text};
use diagnostics::DiagnosticScanner;
use rules::{HeuristicRule, Pass};
use scraper::{Html, Selector};

/// Outcome of running the heuristics over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one headline was found
    Headlines(HeadlineList),
    /// Nothing qualified; candidate names for tuning the heuristics instead
    NotFound(DiagnosticReport),
}

impl Extraction {
    /// Headlines found, empty in diagnostic mode
    pub fn headlines(&self) -> &[String] {
        match self {
            Extraction::Headlines(list) => list.as_slice(),
            Extraction::NotFound(_) => &[],
        }
    }
}

/// A heuristic rule with its selector already compiled
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: HeuristicRule,
    selector: Selector,
}

/// Applies the ordered heuristic table to HTML documents
#[derive(Debug, Clone)]
pub struct Extractor {
    rules: Vec<CompiledRule>,
    scanner: DiagnosticScanner,
}

impl Extractor {
    /// Compile every rule and diagnostic pattern; fails on the first one
    /// that does not compile
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let rules = config
            .rules
            .iter()
            .map(compile_rule)
            .collect::<Result<Vec<_>>>()?;

        let scanner = DiagnosticScanner::new(&config.diagnostics)?;

        ::log::debug!("Compiled {} heuristic rules", rules.len());
        Ok(Self { rules, scanner })
    }

    /// Extractor with the built-in mail.ru heuristics
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ScraperConfig::default())
    }

    /// Decode a fetched body (header charset, then `<meta>`, then UTF-8)
    /// and extract from it
    pub fn extract_page(&self, page: &FetchedPage) -> Extraction {
        let html = encoding::decode_html(&page.body, page.header_charset());
        self.extract(&html)
    }

    /// Parse `html` and run the heuristics, falling back to a diagnostic
    /// scan if nothing qualifies
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        let headlines = self.collect_headlines(&document);

        if headlines.is_empty() {
            ::log::info!("No headlines matched; running diagnostic scan");
            Extraction::NotFound(self.scanner.scan(&document))
        } else {
            ::log::info!("Extracted {} headlines", headlines.len());
            Extraction::Headlines(headlines)
        }
    }

    /// Apply every rule in table order to an already parsed document
    pub fn collect_headlines(&self, document: &Html) -> HeadlineList {
        let mut headlines = HeadlineList::new();

        for compiled in &self.rules {
            let mut added = 0;
            for element in document.select(&compiled.selector) {
                let text = element_text(&element);
                if qualifies(&text, compiled.rule.min_len) && headlines.push_unique(text) {
                    added += 1;
                }
            }
            ::log::debug!(
                "{} rule `{}` added {} headlines",
                pass_name(compiled.rule.pass),
                compiled.rule.selector,
                added
            );
        }

        headlines
    }
}

fn compile_rule(rule: &HeuristicRule) -> Result<CompiledRule> {
    let selector = Selector::parse(&rule.selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: rule.selector.clone(),
        message: e.to_string(),
    })?;
    Ok(CompiledRule {
        rule: rule.clone(),
        selector,
    })
}

fn qualifies(text: &str, min_len: usize) -> bool {
    !text.is_empty() && char_len(text) > min_len
}

fn pass_name(pass: Pass) -> &'static str {
    match pass {
        Pass::Selector => "selector",
        Pass::Heading => "heading",
        Pass::Attribute => "attribute",
    }
}
