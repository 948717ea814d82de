use async_trait::async_trait;
use std::net::IpAddr;
use zorori_domain::DomainError;

/// One query/response round trip with an arbitrary server, as needed by the
/// iterative walk.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(&self, server: IpAddr, query: &[u8]) -> Result<Vec<u8>, DomainError>;
}
