use async_trait::async_trait;
use zorori_domain::{AResult, DomainError, SvcbResult};

/// A resolution strategy the front end can drive.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn a_resolve(&self, name: &str) -> Result<AResult, DomainError>;

    async fn svcb_resolve(&self, name: &str) -> Result<SvcbResult, DomainError>;

    /// Short label used in log lines.
    fn name(&self) -> &'static str;
}
