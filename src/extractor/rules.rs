use serde::{Deserialize, Serialize};

/// Which heuristic family a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    /// Known class names and class/data-attribute substrings of the target markup
    Selector,
    /// `h1`..`h4` headings
    Heading,
    /// Elements explicitly marked up as news items
    Attribute,
}

/// One row of the heuristic table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicRule {
    pub pass: Pass,

    /// CSS selector evaluated against the whole document
    pub selector: String,

    /// Texts must be strictly longer than this many characters
    pub min_len: usize,
}

impl HeuristicRule {
    pub fn new(pass: Pass, selector: &str, min_len: usize) -> Self {
        Self {
            pass,
            selector: selector.to_string(),
            min_len,
        }
    }
}

/// Minimum length for texts found by the selector pass
pub const SELECTOR_MIN_LEN: usize = 20;

/// Minimum length for texts found by the heading and attribute passes
pub const TAGGED_MIN_LEN: usize = 15;

/// Selectors tuned to the mail.ru homepage markup
pub const SITE_SELECTORS: [&str; 8] = [
    ".news__list__item__link",
    ".js-topnews__item",
    ".ph__project__news__item__link",
    r#"[class*="news-tabs__item"]"#,
    r#"[class*="title"] a"#,
    ".svelte-1jw2u6k",
    r#"[data-qa*="news"]"#,
    r#"[data-testid*="news"]"#,
];

/// Elements carrying a module marker, a news id and `data-type="news"`
pub const NEWS_ATTRIBUTE_SELECTOR: &str = r#"[data-module][data-newsid][data-type="news"]"#;

/// The default heuristic table, in the order the rules are applied
pub fn default_rules() -> Vec<HeuristicRule> {
    let selectors = SITE_SELECTORS
        .iter()
        .map(|s| HeuristicRule::new(Pass::Selector, s, SELECTOR_MIN_LEN));

    let headings = (1..=4).map(|level| {
        HeuristicRule::new(Pass::Heading, &format!("h{}", level), TAGGED_MIN_LEN)
    });

    let attributes = std::iter::once(HeuristicRule::new(
        Pass::Attribute,
        NEWS_ATTRIBUTE_SELECTOR,
        TAGGED_MIN_LEN,
    ));

    selectors.chain(headings).chain(attributes).collect()
}
