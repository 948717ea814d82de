//! Interpretation of answers from a recursive upstream (DoH or stub).

use crate::services::{AnswerChase, ChaseOutcome};
use tracing::{debug, warn};
use zorori_domain::wire::{Message, RCODE_NO_ERROR, RCODE_NXDOMAIN};
use zorori_domain::{AResult, DomainError, SvcbResult};

/// Rejects responses that do not belong to the query or carry an error RCODE.
pub fn check_response(message: &Message<'_>, query_id: u16) -> Result<(), DomainError> {
    if !message.is_response() {
        return Err(DomainError::Decode(format!(
            "message {} is not a response",
            message.id()
        )));
    }
    if message.id() != query_id {
        return Err(DomainError::Decode(format!(
            "response ID {} does not match query ID {}",
            message.id(),
            query_id
        )));
    }
    if message.header.tc() {
        warn!(id = query_id, "Response is truncated");
    }

    match message.response_code() {
        RCODE_NO_ERROR => Ok(()),
        RCODE_NXDOMAIN => Err(DomainError::NxDomain),
        rcode => Err(DomainError::ServerFailure(rcode)),
    }
}

/// Decodes `response` and chases its answers for `name`.
pub fn interpret_a_response(
    query_id: u16,
    name: &str,
    response: &[u8],
    chase: &dyn AnswerChase,
) -> Result<AResult, DomainError> {
    let message = Message::decode(response)?;
    debug!(header = %message.header, "Decoded response");
    check_response(&message, query_id)?;

    match chase.chase(name, &message.answers)? {
        ChaseOutcome::Found(result) => Ok(result),
        ChaseOutcome::Unresolved { last_name } => {
            debug!(name = %name, last_name = %last_name, "No A record on the chain");
            Err(DomainError::NoAnswer {
                name: name.to_string(),
            })
        }
    }
}

/// Takes the first answer as SVCB/HTTPS data, without following aliases.
pub fn interpret_svcb_response(
    query_id: u16,
    name: &str,
    response: &[u8],
) -> Result<SvcbResult, DomainError> {
    let message = Message::decode(response)?;
    debug!(header = %message.header, "Decoded response");
    check_response(&message, query_id)?;

    let first = message.answers.first().ok_or_else(|| DomainError::NoAnswer {
        name: name.to_string(),
    })?;
    first.service_binding()
}
