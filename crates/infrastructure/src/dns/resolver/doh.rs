use super::forward::Forwarder;
use crate::dns::transport::https::HttpsTransport;
use crate::dns::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use zorori_application::ports::DnsResolver;
use zorori_application::services::{answer_chase_for, AnswerChase};
use zorori_domain::config::ResolverConfig;
use zorori_domain::{AResult, DomainError, QueryIdGenerator, SvcbResult};

/// Resolves through a DNS-over-HTTPS endpoint.
pub struct DohResolver {
    forwarder: Forwarder,
}

impl DohResolver {
    pub fn new(
        url: String,
        timeout: Duration,
        ids: Arc<QueryIdGenerator>,
        chase: Arc<dyn AnswerChase>,
    ) -> Self {
        Self {
            forwarder: Forwarder::new(
                Transport::Https(HttpsTransport::new(url)),
                timeout,
                ids,
                chase,
            ),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.doh_server.clone(),
            Duration::from_millis(config.query_timeout_ms),
            Arc::new(QueryIdGenerator::from_config(config.query_id_seed)),
            answer_chase_for(config.answer_chase),
        )
    }
}

#[async_trait]
impl DnsResolver for DohResolver {
    async fn a_resolve(&self, name: &str) -> Result<AResult, DomainError> {
        self.forwarder.a_resolve(name).await
    }

    async fn svcb_resolve(&self, name: &str) -> Result<SvcbResult, DomainError> {
        self.forwarder.svcb_resolve(name).await
    }

    fn name(&self) -> &'static str {
        "doh"
    }
}
