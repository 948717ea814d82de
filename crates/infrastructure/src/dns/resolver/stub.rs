use super::forward::Forwarder;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::Transport;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use zorori_application::ports::DnsResolver;
use zorori_application::services::{answer_chase_for, AnswerChase};
use zorori_domain::config::ResolverConfig;
use zorori_domain::{AResult, DomainError, QueryIdGenerator, SvcbResult};

/// Sends every query to one recursive resolver over UDP.
pub struct UdpStubResolver {
    forwarder: Forwarder,
}

impl UdpStubResolver {
    pub fn new(
        server: SocketAddr,
        timeout: Duration,
        ids: Arc<QueryIdGenerator>,
        chase: Arc<dyn AnswerChase>,
    ) -> Self {
        Self {
            forwarder: Forwarder::new(
                Transport::Udp(UdpTransport::new(server)),
                timeout,
                ids,
                chase,
            ),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            SocketAddr::new(config.full_resolver, config.full_resolver_port),
            Duration::from_millis(config.query_timeout_ms),
            Arc::new(QueryIdGenerator::from_config(config.query_id_seed)),
            answer_chase_for(config.answer_chase),
        )
    }
}

#[async_trait]
impl DnsResolver for UdpStubResolver {
    async fn a_resolve(&self, name: &str) -> Result<AResult, DomainError> {
        self.forwarder.a_resolve(name).await
    }

    async fn svcb_resolve(&self, name: &str) -> Result<SvcbResult, DomainError> {
        self.forwarder.svcb_resolve(name).await
    }

    fn name(&self) -> &'static str {
        "udp-stub"
    }
}
