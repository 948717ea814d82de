use crate::dns::transport::Transport;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use zorori_application::services::AnswerChase;
use zorori_application::use_cases::{interpret_a_response, interpret_svcb_response};
use zorori_domain::wire::Query;
use zorori_domain::{AResult, DomainError, QueryIdGenerator, QueryType, SvcbResult};

/// One recursive (RD=1) round trip to a single upstream, shared by the DoH
/// and UDP stub resolvers.
pub(crate) struct Forwarder {
    transport: Transport,
    timeout: Duration,
    ids: Arc<QueryIdGenerator>,
    chase: Arc<dyn AnswerChase>,
}

impl Forwarder {
    pub(crate) fn new(
        transport: Transport,
        timeout: Duration,
        ids: Arc<QueryIdGenerator>,
        chase: Arc<dyn AnswerChase>,
    ) -> Self {
        Self {
            transport,
            timeout,
            ids,
            chase,
        }
    }

    pub(crate) async fn a_resolve(&self, name: &str) -> Result<AResult, DomainError> {
        let (query_id, response) = self.round_trip(name, QueryType::A).await?;
        interpret_a_response(query_id, name, &response, self.chase.as_ref())
    }

    pub(crate) async fn svcb_resolve(&self, name: &str) -> Result<SvcbResult, DomainError> {
        let (query_id, response) = self.round_trip(name, QueryType::SVCB).await?;
        interpret_svcb_response(query_id, name, &response)
    }

    async fn round_trip(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let query = Query::new(name, query_type, &self.ids);
        let query_id = query.id();
        let bytes = query.into_bytes()?;

        debug!(
            name = %name,
            qtype = %query_type,
            id = query_id,
            protocol = self.transport.protocol_name(),
            "Forwarding query"
        );

        let response = self.transport.send(&bytes, self.timeout).await?;
        debug!(
            name = %name,
            protocol = response.protocol_used,
            response_len = response.bytes.len(),
            "Upstream answered"
        );
        Ok((query_id, response.bytes))
    }
}
