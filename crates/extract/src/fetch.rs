// ABOUTME: HTTP fetch layer for retrieving a page body with timeout and status classification.
// ABOUTME: Handles private-network refusal, content-length limits, and charset decoding.

use std::net::IpAddr;

use bytes::Bytes;
use ipnet::{Ipv4Net, Ipv6Net};

use crate::error::CrawlError;

/// Maximum allowed response body length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from the content-type header.
    pub fn text_utf8(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

// RFC1918 plus loopback and link-local
const PRIVATE_V4_RANGES: [&str; 5] = [
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "127.0.0.0/8",
    "169.254.0.0/16",
];

// Unique-local and link-local
const PRIVATE_V6_RANGES: [&str; 2] = ["fc00::/7", "fe80::/10"];

/// Check if an IP address is in a private/reserved range.
pub(crate) fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => PRIVATE_V4_RANGES
            .iter()
            .any(|range| range.parse::<Ipv4Net>().unwrap().contains(ip)),
        IpAddr::V6(ip) => {
            ip.is_loopback()
                || PRIVATE_V6_RANGES
                    .iter()
                    .any(|range| range.parse::<Ipv6Net>().unwrap().contains(ip))
        }
    }
}

/// Decode body bytes to a String using the charset from the content-type header
/// or byte-level detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    // No usable charset header; detect from the bytes
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Refuse URLs whose host resolves to a private/loopback address.
async fn check_private_target(url: &url::Url, original: &str) -> Result<(), CrawlError> {
    let Some(host) = url.host_str() else {
        return Ok(());
    };

    if let Ok(ip) = host.parse::<IpAddr>() {
        if is_private_ip(&ip) {
            return Err(CrawlError::network(
                original,
                "Fetch",
                Some(anyhow::anyhow!("private addresses are not allowed")),
            ));
        }
        return Ok(());
    }

    // Host is a name; resolve it and check every address
    let port = url
        .port()
        .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });
    let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        CrawlError::network(
            original,
            "Fetch",
            Some(anyhow::anyhow!("DNS lookup failed: {}", e)),
        )
    })?;

    for socket_addr in addrs {
        if is_private_ip(&socket_addr.ip()) {
            return Err(CrawlError::network(
                original,
                "Fetch",
                Some(anyhow::anyhow!("private addresses are not allowed")),
            ));
        }
    }

    Ok(())
}

/// Fetch a page with a single GET request. No retries; the caller owns retry policy.
///
/// Transport failures are classified as `Timeout` or `Network`; a non-2xx
/// response is an `HttpStatus` error carrying the status code.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    allow_private_networks: bool,
) -> Result<FetchResult, CrawlError> {
    if url.is_empty() {
        return Err(CrawlError::missing_input("Fetch"));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        CrawlError::network(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    if !allow_private_networks {
        check_private_target(&parsed_url, url).await?;
    }

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            CrawlError::timeout(url, "Fetch", Some(anyhow::anyhow!("request timed out: {}", e)))
        } else {
            CrawlError::network(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        }
    })?;

    // Re-check after redirects: the final URL may point somewhere else entirely
    if !allow_private_networks {
        let final_url = response.url().clone();
        check_private_target(&final_url, url).await?;
    }

    let status = response.status();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if !status.is_success() {
        return Err(CrawlError::http_status(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(CrawlError::network(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            CrawlError::timeout(url, "Fetch", Some(anyhow::anyhow!("body read timed out: {}", e)))
        } else {
            CrawlError::network(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            )
        }
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(CrawlError::network(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    Ok(FetchResult {
        status: status.as_u16(),
        final_url,
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn fetch_ok_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/plain; charset=utf-8")
                .body("hello");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/test"), true).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.text_utf8(), "hello");
    }

    #[tokio::test]
    async fn fetch_non_2xx_is_http_status_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/notfound");
            then.status(404)
                .header("content-type", "text/html")
                .body("<html><body>Not Found</body></html>");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/notfound"), true).await;
        mock.assert();

        let err = result.expect_err("should fail on 404");
        assert!(err.is_http_status());
        assert!(
            err.to_string().contains("404"),
            "message should reference the status, got: {}",
            err
        );
    }

    #[tokio::test]
    async fn fetch_timeout_is_timeout_error() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(5)).body("late");
        });

        let client = reqwest::Client::builder()
            .user_agent("test-agent")
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let result = fetch(&client, &server.url("/slow"), true).await;
        let err = result.expect_err("should time out");
        assert!(err.is_timeout(), "expected timeout, got: {}", err);
    }

    #[tokio::test]
    async fn fetch_blocks_private_ip() {
        let server = MockServer::start();
        // No mock needed; the private-network check fails before any request

        let client = create_test_client();
        let url = format!("http://127.0.0.1:{}/test", server.port());
        let result = fetch(&client, &url, false).await;

        let err = result.expect_err("should fail on private IP");
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn fetch_empty_url_is_missing_input() {
        let client = create_test_client();
        let err = fetch(&client, "", true).await.expect_err("should fail");
        assert!(err.is_missing_input());
    }

    #[test]
    fn is_private_ip_v4() {
        assert!(is_private_ip(&"10.0.0.1".parse().unwrap()));
        assert!(is_private_ip(&"172.16.0.1".parse().unwrap()));
        assert!(is_private_ip(&"192.168.0.1".parse().unwrap()));
        assert!(is_private_ip(&"127.0.0.1".parse().unwrap()));
        assert!(is_private_ip(&"169.254.0.1".parse().unwrap()));

        assert!(!is_private_ip(&"8.8.8.8".parse().unwrap()));
        assert!(!is_private_ip(&"172.32.0.1".parse().unwrap())); // outside 172.16/12
    }

    #[test]
    fn is_private_ip_v6() {
        assert!(is_private_ip(&"::1".parse().unwrap()));
        assert!(is_private_ip(&"fc00::1".parse().unwrap()));
        assert!(is_private_ip(&"fe80::1".parse().unwrap()));
        assert!(!is_private_ip(&"2001:4860:4860::8888".parse().unwrap()));
    }

    #[test]
    fn extract_charset_variants() {
        assert_eq!(
            extract_charset("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn decode_body_detects_latin1() {
        // ISO-8859-1 encoded "cafe" with e-acute (0xe9), no charset header
        let iso_bytes: &[u8] = &[0x63, 0x61, 0x66, 0xe9];
        let decoded = decode_body(iso_bytes, None);
        assert_eq!(decoded, "café");
    }
}
