use crate::extractor::encoding;
use std::collections::HashSet;

/// Raw homepage response, decoded only once the extractor needs text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: Vec<u8>,

    /// Content-Type header value, if the server sent one
    pub content_type: Option<String>,
}

impl FetchedPage {
    pub fn new(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self { body, content_type }
    }

    /// Charset declared in the Content-Type header
    pub fn header_charset(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .and_then(encoding::header_charset)
    }
}

/// Ordered, duplicate-free list of headlines in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineList {
    entries: Vec<String>,

    seen: HashSet<String>,
}

impl HeadlineList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a headline unless an identical string is already present.
    /// Returns whether it was added.
    pub fn push_unique(&mut self, headline: String) -> bool {
        if self.seen.contains(&headline) {
            return false;
        }
        self.seen.insert(headline.clone());
        self.entries.push(headline);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl From<Vec<String>> for HeadlineList {
    fn from(headlines: Vec<String>) -> Self {
        let mut list = Self::new();
        for headline in headlines {
            list.push_unique(headline);
        }
        list
    }
}

/// Candidate class and attribute names collected when no headline is found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub class_names: Vec<String>,
    pub attribute_names: Vec<String>,
}

impl DiagnosticReport {
    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty() && self.attribute_names.is_empty()
    }
}
