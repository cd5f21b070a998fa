use scraper::ElementRef;

/// Elements whose text never counts as visible headline text
const NON_VISIBLE_TEXT_ELEMENTS: [&str; 5] = ["script", "style", "template", "rt", "rp"];

/// Text of an element: every visible descendant text node trimmed, blanks
/// dropped, the rest glued together without a separator
pub fn element_text(element: &ElementRef) -> String {
    element
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|parent| NON_VISIBLE_TEXT_ELEMENTS.contains(&parent.value().name()))
        })
        .map(|(_, text)| text.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Length in characters, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Horizontal rule used in console and file output
pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_text(html: &str, selector: &str) -> String {
        let doc = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        let element = doc.select(&selector).next().unwrap();
        element_text(&element)
    }

    #[test]
    fn test_element_text_strips_fragments() {
        assert_eq!(
            first_text("<a>  <span> Hello </span>\n <b>world</b> </a>", "a"),
            "Helloworld"
        );
    }

    #[test]
    fn test_element_text_skips_script_and_style() {
        assert_eq!(
            first_text(
                "<h1>Breaking story headline<script>var tracking = 1;</script><style>h1 { color: red }</style></h1>",
                "h1"
            ),
            "Breaking story headline"
        );
    }

    #[test]
    fn test_element_text_skips_template_and_ruby_annotations() {
        assert_eq!(
            first_text(
                "<div>Visible<template><span>hidden</span></template><ruby>漢<rp>(</rp><rt>kan</rt><rp>)</rp></ruby></div>",
                "div"
            ),
            "Visible漢"
        );
    }

    #[test]
    fn test_char_len_counts_cyrillic_as_single_chars() {
        assert_eq!(char_len("Новости"), 7);
        assert_eq!("Новости".len(), 14);
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "===");
        assert_eq!(separator(0), "");
    }
}
