use crate::QueryType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    Decode(String),

    #[error("Record type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: QueryType,
    },

    #[error("No answer for {name}")]
    NoAnswer { name: String },

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Upstream server failure (rcode {0})")]
    ServerFailure(u8),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Referral loop while resolving {name}: every candidate server was already queried")]
    ReferralLoop { name: String },

    #[error("Resolution of {name} exceeded {limit} upstream queries")]
    ResolutionDepthExceeded { name: String, limit: usize },
}

impl DomainError {
    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        DomainError::Decode(reason.into())
    }

    /// True for failures of the network round trip itself, as opposed to
    /// failures to find data in a well-formed answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::Transport { .. }
        )
    }
}
