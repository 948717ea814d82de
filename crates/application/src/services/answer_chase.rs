use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::debug;
use zorori_domain::config::AnswerChaseKind;
use zorori_domain::wire::ResourceRecord;
use zorori_domain::{normalize, same, AResult, DomainError, QueryType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChaseOutcome {
    Found(AResult),
    /// No A record was reached. `last_name` is the name the chase ended on,
    /// which differs from the query name when a CNAME chain left the answer.
    Unresolved { last_name: String },
}

/// Follows CNAME aliases through an answer section to an A record.
pub trait AnswerChase: Send + Sync {
    fn chase(
        &self,
        name: &str,
        answers: &[ResourceRecord<'_>],
    ) -> Result<ChaseOutcome, DomainError>;

    fn name(&self) -> &'static str;
}

pub fn answer_chase_for(kind: AnswerChaseKind) -> Arc<dyn AnswerChase> {
    match kind {
        AnswerChaseKind::Ordered => Arc::new(OrderedChase),
        AnswerChaseKind::Indexed => Arc::new(IndexedChase),
    }
}

/// Single pass in wire order. An alias only matches records that come after
/// it, so `[A(b), CNAME a->b]` does not resolve `a`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedChase;

impl AnswerChase for OrderedChase {
    fn chase(
        &self,
        name: &str,
        answers: &[ResourceRecord<'_>],
    ) -> Result<ChaseOutcome, DomainError> {
        let mut searching = name.to_string();

        for record in answers {
            if !same(&searching, &record.name) {
                continue;
            }
            match record.record_type {
                QueryType::A => return Ok(ChaseOutcome::Found(AResult::new(record.ip()?))),
                QueryType::CNAME => {
                    let target = record.cname_target()?;
                    debug!(from = %searching, to = %target, "Following CNAME");
                    searching = target;
                }
                _ => {}
            }
        }

        Ok(ChaseOutcome::Unresolved {
            last_name: searching,
        })
    }

    fn name(&self) -> &'static str {
        "ordered"
    }
}

/// Indexes the answers by owner first, so record order does not matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexedChase;

impl AnswerChase for IndexedChase {
    fn chase(
        &self,
        name: &str,
        answers: &[ResourceRecord<'_>],
    ) -> Result<ChaseOutcome, DomainError> {
        let mut by_owner: FxHashMap<String, Vec<&ResourceRecord<'_>>> = FxHashMap::default();
        for record in answers {
            by_owner
                .entry(normalize(&record.name))
                .or_default()
                .push(record);
        }

        let mut searching = normalize(name);
        let mut seen = FxHashSet::default();

        while seen.insert(searching.clone()) {
            let Some(records) = by_owner.get(&searching) else {
                break;
            };

            if let Some(a) = records.iter().find(|r| r.record_type == QueryType::A) {
                return Ok(ChaseOutcome::Found(AResult::new(a.ip()?)));
            }

            match records.iter().find(|r| r.record_type == QueryType::CNAME) {
                Some(alias) => {
                    let target = normalize(&alias.cname_target()?);
                    debug!(from = %searching, to = %target, "Following CNAME");
                    searching = target;
                }
                None => break,
            }
        }

        Ok(ChaseOutcome::Unresolved {
            last_name: searching,
        })
    }

    fn name(&self) -> &'static str {
        "indexed"
    }
}
