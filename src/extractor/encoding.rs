use encoding_rs::{Encoding, UTF_8};
use std::sync::LazyLock;

static CHARSET_PARAM: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r#"(?i)charset\s*=\s*["']?([\w.:-]+)"#).expect("valid charset regex")
});

static META_CHARSET: LazyLock<regex::bytes::Regex> = LazyLock::new(|| {
    regex::bytes::Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([\w.:-]+)"#)
        .expect("valid meta charset regex")
});

/// Lower bound of the prefix searched for a `<meta>` charset declaration
const MIN_PRESCAN_BYTES: usize = 2048;

/// `charset` parameter of a Content-Type header value
pub fn header_charset(content_type: &str) -> Option<&str> {
    CHARSET_PARAM
        .captures(content_type)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Charset declared by a `<meta charset>` or `<meta http-equiv>` tag near
/// the start of the document (the larger of 2 KiB and 5% of the body)
pub fn meta_charset(body: &[u8]) -> Option<String> {
    let end = body.len().min(MIN_PRESCAN_BYTES.max(body.len() / 20));
    META_CHARSET
        .captures(&body[..end])
        .and_then(|captures| captures.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Decode a fetched body: the HTTP header charset wins, then a `<meta>`
/// declaration, then UTF-8. Unknown labels fall through to the next source.
pub fn decode_html(body: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(body).and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or(UTF_8);

    let (decoded, used, had_errors) = encoding.decode(body);
    if had_errors {
        ::log::warn!("Body contained bytes invalid in {}", used.name());
    }
    ::log::debug!("Decoded {} bytes as {}", body.len(), used.name());

    decoded.into_owned()
}
