//! DNS-over-HTTPS transport (RFC 8484), GET form.
//!
//! The query travels base64url-encoded without padding in the `dns`
//! parameter; the response body is the raw DNS message.
//!
//! ```text
//! GET /dns-query?dns=AAABAAABAAAAAAAAA3d3dwdleGFtcGxlA2NvbQAAAQAB HTTP/2
//! Accept: application/dns-message
//! ```

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;
use zorori_domain::DomainError;

static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

pub struct HttpsTransport {
    url: String,
}

impl HttpsTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request URL carrying `message_bytes` in the `dns` parameter.
    pub fn request_url(&self, message_bytes: &[u8]) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}dns={}",
            self.url,
            separator,
            URL_SAFE_NO_PAD.encode(message_bytes)
        )
    }

    fn failure(&self, reason: String) -> DomainError {
        DomainError::Transport {
            server: self.url.clone(),
            reason,
        }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.url.clone(),
        }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let url = self.request_url(message_bytes);
        debug!(url = %url, message_len = message_bytes.len(), "Sending DoH query");

        let response = tokio::time::timeout(
            timeout,
            SHARED_CLIENT
                .get(&url)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| self.timed_out())?
        .map_err(|e| self.failure(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let response_bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.failure(format!("reading body failed: {}", e)))?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}
