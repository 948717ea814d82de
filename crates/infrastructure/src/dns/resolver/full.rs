use crate::dns::exchange::UdpExchange;
use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use zorori_application::ports::{DnsResolver, UpstreamExchange};
use zorori_application::services::{answer_chase_for, AnswerChase};
use zorori_application::use_cases::IterativeResolution;
use zorori_domain::config::ResolverConfig;
use zorori_domain::{AResult, DomainError, QueryIdGenerator, SvcbResult};

/// Authoritative servers are queried on the standard port.
const DNS_PORT: u16 = 53;

/// Walks the delegation chain itself, starting at the root servers.
pub struct UdpFullResolver {
    engine: IterativeResolution,
}

impl UdpFullResolver {
    pub fn new(
        exchange: Arc<dyn UpstreamExchange>,
        roots: Vec<IpAddr>,
        max_hops: usize,
        ids: Arc<QueryIdGenerator>,
        chase: Arc<dyn AnswerChase>,
    ) -> Self {
        info!(roots = roots.len(), max_hops, "Full resolver created");
        Self {
            engine: IterativeResolution::new(exchange, roots, max_hops, ids, chase),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        let exchange = UdpExchange::new(
            DNS_PORT,
            Duration::from_millis(config.query_timeout_ms),
            config.retries,
        );
        Self::new(
            Arc::new(exchange),
            config.root_servers.clone(),
            config.max_referral_depth,
            Arc::new(QueryIdGenerator::from_config(config.query_id_seed)),
            answer_chase_for(config.answer_chase),
        )
    }
}

#[async_trait]
impl DnsResolver for UdpFullResolver {
    async fn a_resolve(&self, name: &str) -> Result<AResult, DomainError> {
        self.engine.resolve_a(name).await
    }

    async fn svcb_resolve(&self, name: &str) -> Result<SvcbResult, DomainError> {
        self.engine.resolve_svcb(name).await
    }

    fn name(&self) -> &'static str {
        "udp-full"
    }
}
