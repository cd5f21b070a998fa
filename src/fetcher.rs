use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::results::FetchedPage;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, CONTENT_TYPE, HeaderMap, HeaderName,
    HeaderValue, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Desktop Chrome on Linux
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

pub const BROWSER_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3";

pub const BROWSER_ACCEPT_ENCODING: &str = "gzip, deflate";

/// Browser-like headers sent with every page request.
///
/// reqwest only fills in its own `Accept-Encoding` when the request has
/// none, and decompresses gzip/deflate bodies either way.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static(BROWSER_ACCEPT_ENCODING),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// Fetches a single page with a browser-like header set
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher from the configured timeout and extra headers
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = browser_headers();
        for (name, value) in &config.headers {
            let invalid = || ScrapeError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ScrapeError::ClientBuild)?;

        Ok(Self { client })
    }

    /// GET `url` and return the raw body. Anything but 200 is an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::info!("Fetching {}", parsed);
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            ::log::error!("{} answered with status {}", url, status);
            return Err(ScrapeError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();
        ::log::debug!(
            "Received {} bytes from {} ({:?})",
            body.len(),
            url,
            content_type
        );

        Ok(FetchedPage::new(body, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn has_header(request: &Request, name: &str, expected: &str) -> bool {
        request
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            == Some(expected)
    }

    fn fetcher() -> Fetcher {
        Fetcher::new(&ScraperConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>hello</h1>"))
            .expect(1)
            .mount(&server)
            .await;

        let page = fetcher().fetch(&server.uri()).await.unwrap();
        assert_eq!(page.body, b"<h1>hello</h1>");
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_headers() {
        let server = MockServer::start().await;
        // Header values contain commas, so compare them whole
        Mock::given(method("GET"))
            .and(|req: &Request| {
                has_header(req, "user-agent", BROWSER_USER_AGENT)
                    && has_header(req, "accept", BROWSER_ACCEPT)
                    && has_header(req, "accept-language", BROWSER_ACCEPT_LANGUAGE)
                    && has_header(req, "accept-encoding", "gzip, deflate")
                    && has_header(req, "connection", "keep-alive")
            })
            .and(header("upgrade-insecure-requests", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(fetcher().fetch(&server.uri()).await.unwrap().body, b"ok");
    }

    #[tokio::test]
    async fn test_fetch_keeps_raw_bytes_and_content_type() {
        let server = MockServer::start().await;
        let body = vec![0xcd, 0xee, 0xe2, 0xee, 0xf1, 0xf2, 0xe8];
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "text/html"))
            .mount(&server)
            .await;

        let page = fetcher().fetch(&server.uri()).await.unwrap();
        assert_eq!(page.body, body);
        assert_eq!(page.content_type.as_deref(), Some("text/html"));
        assert_eq!(page.header_charset(), None);
    }

    #[tokio::test]
    async fn test_gzip_body_is_decompressed_with_explicit_accept_encoding() {
        let plain = b"<h1>Compressed headline body</h1>";
        // gzip member holding one stored (uncompressed) deflate block
        let mut gzip = vec![
            0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x01, 0x21, 0x00, 0xde,
            0xff,
        ];
        gzip.extend_from_slice(plain);
        gzip.extend_from_slice(&[0x42, 0x05, 0x4f, 0x01, 0x21, 0x00, 0x00, 0x00]);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-encoding", "gzip")
                    .set_body_raw(gzip, "text/html"),
            )
            .mount(&server)
            .await;

        let page = fetcher().fetch(&server.uri()).await.unwrap();
        assert_eq!(page.body, plain);
    }

    #[tokio::test]
    async fn test_extra_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-debug", "yes"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = ScraperConfig::default();
        config.headers.insert("X-Debug".to_string(), "yes".to_string());
        let fetcher = Fetcher::new(&config).unwrap();

        assert!(fetcher.fetch(&server.uri()).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_200_is_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        match fetcher().fetch(&server.uri()).await {
            Err(ScrapeError::HttpStatus(code)) => assert_eq!(code, 404),
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_2xx_is_still_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(matches!(
            fetcher().fetch(&server.uri()).await,
            Err(ScrapeError::HttpStatus(204))
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = ScraperConfig {
            request_timeout_secs: 1,
            ..ScraperConfig::default()
        };
        let result = Fetcher::new(&config).unwrap().fetch(&server.uri()).await;
        assert!(matches!(result, Err(ScrapeError::Network(_))));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        assert!(matches!(
            fetcher().fetch("not a url").await,
            Err(ScrapeError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_invalid_header_name() {
        let mut config = ScraperConfig::default();
        config
            .headers
            .insert("bad header".to_string(), "x".to_string());

        match Fetcher::new(&config) {
            Err(ScrapeError::InvalidHeader { name }) => assert_eq!(name, "bad header"),
            other => panic!("expected InvalidHeader, got {:?}", other.map(|_| ())),
        }
    }
}
