//! Iterative resolution from the root servers down the delegation chain.
//!
//! One resolution owns a single hop budget. Every upstream query spends one
//! hop, including queries made while resolving nameserver names that came
//! without glue and queries made after a CNAME chain sent the walk back to
//! the roots. Each walk from the roots tracks the servers it has asked so a
//! delegation cycle ends in [`DomainError::ReferralLoop`].

use crate::ports::UpstreamExchange;
use crate::services::{AnswerChase, ChaseOutcome};
use crate::use_cases::direct::check_response;
use crate::use_cases::referral::Referral;
use futures::future::{BoxFuture, FutureExt};
use rustc_hash::FxHashSet;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use zorori_domain::wire::{Message, Query};
use zorori_domain::{same, AResult, DomainError, QueryIdGenerator, QueryType, SvcbResult};

struct HopBudget {
    name: String,
    limit: usize,
    spent: usize,
}

impl HopBudget {
    fn new(name: &str, limit: usize) -> Self {
        Self {
            name: name.to_string(),
            limit,
            spent: 0,
        }
    }

    fn spend(&mut self) -> Result<(), DomainError> {
        if self.spent >= self.limit {
            return Err(DomainError::ResolutionDepthExceeded {
                name: self.name.clone(),
                limit: self.limit,
            });
        }
        self.spent += 1;
        Ok(())
    }
}

pub struct IterativeResolution {
    exchange: Arc<dyn UpstreamExchange>,
    roots: Vec<IpAddr>,
    max_hops: usize,
    ids: Arc<QueryIdGenerator>,
    chase: Arc<dyn AnswerChase>,
}

impl IterativeResolution {
    pub fn new(
        exchange: Arc<dyn UpstreamExchange>,
        roots: Vec<IpAddr>,
        max_hops: usize,
        ids: Arc<QueryIdGenerator>,
        chase: Arc<dyn AnswerChase>,
    ) -> Self {
        Self {
            exchange,
            roots,
            max_hops,
            ids,
            chase,
        }
    }

    pub async fn resolve_a(&self, name: &str) -> Result<AResult, DomainError> {
        let mut budget = HopBudget::new(name, self.max_hops);
        let result = self.resolve_a_within(name.to_string(), &mut budget).await?;
        info!(name = %name, ip = %result, hops = budget.spent, "Iterative resolution complete");
        Ok(result)
    }

    /// Walks to the zone that answers `name` and takes its first answer as
    /// SVCB/HTTPS data.
    pub async fn resolve_svcb(&self, name: &str) -> Result<SvcbResult, DomainError> {
        let mut budget = HopBudget::new(name, self.max_hops);
        let (query_id, response) = self.walk(name, QueryType::SVCB, &mut budget).await?;

        let message = Message::decode(&response)?;
        check_response(&message, query_id)?;
        let first = message.answers.first().ok_or_else(|| DomainError::NoAnswer {
            name: name.to_string(),
        })?;
        first.service_binding()
    }

    fn resolve_a_within<'a>(
        &'a self,
        name: String,
        budget: &'a mut HopBudget,
    ) -> BoxFuture<'a, Result<AResult, DomainError>> {
        async move {
            let mut searching = name;
            loop {
                let (query_id, response) = self.walk(&searching, QueryType::A, budget).await?;
                let message = Message::decode(&response)?;
                check_response(&message, query_id)?;

                match self.chase.chase(&searching, &message.answers)? {
                    ChaseOutcome::Found(result) => return Ok(result),
                    ChaseOutcome::Unresolved { last_name } if !same(&last_name, &searching) => {
                        info!(from = %searching, to = %last_name, "CNAME left the zone, restarting from roots");
                        searching = last_name;
                    }
                    ChaseOutcome::Unresolved { .. } => {
                        return Err(DomainError::NoAnswer { name: searching });
                    }
                }
            }
        }
        .boxed()
    }

    /// Descends from the roots until a server gives a final response for
    /// `name`. Returns the query ID together with the raw response.
    async fn walk(
        &self,
        name: &str,
        query_type: QueryType,
        budget: &mut HopBudget,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut visited: FxHashSet<IpAddr> = FxHashSet::default();
        let mut candidates = self.roots.clone();

        loop {
            let server = candidates
                .iter()
                .copied()
                .find(|ip| !visited.contains(ip))
                .ok_or_else(|| DomainError::ReferralLoop {
                    name: name.to_string(),
                })?;
            visited.insert(server);
            budget.spend()?;

            let query = Query::new(name, query_type, &self.ids).with_recursion_desired(false);
            let query_id = query.id();
            let bytes = query.into_bytes()?;
            debug!(server = %server, name = %name, qtype = %query_type, id = query_id, "Iterative query");
            let response = self.exchange.exchange(server, &bytes).await?;

            let referral = {
                let message = Message::decode(&response)?;
                check_response(&message, query_id)?;
                if message.answers.is_empty() {
                    Referral::from_message(&message)?
                } else {
                    None
                }
            };
            let Some(referral) = referral else {
                return Ok((query_id, response));
            };

            debug!(
                server = %server,
                nameservers = ?referral.nameservers,
                glue = referral.glue.len(),
                "Referral"
            );
            candidates = if referral.glue.is_empty() {
                self.resolve_nameservers(name, &referral.nameservers, &visited, budget)
                    .await?
            } else {
                referral.glue
            };
        }
    }

    /// Resolves glueless nameservers in order and returns the first address
    /// this walk has not asked yet.
    async fn resolve_nameservers(
        &self,
        name: &str,
        nameservers: &[String],
        visited: &FxHashSet<IpAddr>,
        budget: &mut HopBudget,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let mut last_error = None;

        for ns in nameservers {
            match self.resolve_a_within(ns.clone(), budget).await {
                Ok(result) if visited.contains(&result.ip()) => {
                    debug!(nameserver = %ns, ip = %result, "Nameserver already asked in this walk");
                    last_error = Some(DomainError::ReferralLoop {
                        name: name.to_string(),
                    });
                }
                Ok(result) => return Ok(vec![result.ip()]),
                Err(e @ DomainError::ResolutionDepthExceeded { .. }) => return Err(e),
                Err(e) => {
                    warn!(nameserver = %ns, error = %e, "Could not resolve glueless nameserver");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DomainError::NoAnswer {
            name: nameservers.join(", "),
        }))
    }
}
