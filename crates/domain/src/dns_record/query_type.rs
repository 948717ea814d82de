use std::fmt;
use std::str::FromStr;

/// Resource record / question type.
///
/// Codes this client does not interpret are kept as `Unknown` so a decoded
/// message never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    NS,
    CNAME,
    SOA,
    AAAA,
    SVCB,
    HTTPS,
    Unknown(u16),
}

impl QueryType {
    pub fn to_u16(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::SOA => 6,
            QueryType::AAAA => 28,
            QueryType::SVCB => 64,
            QueryType::HTTPS => 65,
            QueryType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => QueryType::A,
            2 => QueryType::NS,
            5 => QueryType::CNAME,
            6 => QueryType::SOA,
            28 => QueryType::AAAA,
            64 => QueryType::SVCB,
            65 => QueryType::HTTPS,
            other => QueryType::Unknown(other),
        }
    }

    /// SVCB and HTTPS share one RDATA layout (RFC 9460 §2.2).
    pub fn is_service_binding(&self) -> bool {
        matches!(self, QueryType::SVCB | QueryType::HTTPS)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::A => f.write_str("A"),
            QueryType::NS => f.write_str("NS"),
            QueryType::CNAME => f.write_str("CNAME"),
            QueryType::SOA => f.write_str("SOA"),
            QueryType::AAAA => f.write_str("AAAA"),
            QueryType::SVCB => f.write_str("SVCB"),
            QueryType::HTTPS => f.write_str("HTTPS"),
            QueryType::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(QueryType::A),
            "NS" => Ok(QueryType::NS),
            "CNAME" => Ok(QueryType::CNAME),
            "SOA" => Ok(QueryType::SOA),
            "AAAA" => Ok(QueryType::AAAA),
            "SVCB" => Ok(QueryType::SVCB),
            "HTTPS" => Ok(QueryType::HTTPS),
            _ => Err(format!("unknown query type: {}", s)),
        }
    }
}
