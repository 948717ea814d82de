use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};
use zorori_application::ports::UpstreamExchange;
use zorori_domain::DomainError;

/// UDP round trips for the iterative walk. A hop that times out is retried
/// against the same server up to `retries` more times.
pub struct UdpExchange {
    port: u16,
    timeout: Duration,
    retries: u32,
}

impl UdpExchange {
    pub fn new(port: u16, timeout: Duration, retries: u32) -> Self {
        Self {
            port,
            timeout,
            retries,
        }
    }
}

#[async_trait]
impl UpstreamExchange for UdpExchange {
    async fn exchange(&self, server: IpAddr, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let transport = UdpTransport::new(SocketAddr::new(server, self.port));
        let mut attempt = 0;

        loop {
            match transport.send(query, self.timeout).await {
                Ok(response) => {
                    debug!(server = %server, attempt, "Exchange complete");
                    return Ok(response.bytes);
                }
                Err(e @ DomainError::TransportTimeout { .. }) if attempt < self.retries => {
                    attempt += 1;
                    warn!(server = %server, attempt, error = %e, "Retrying timed out query");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
