use crate::QueryType;
use std::collections::BTreeMap;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Final answer of an address lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AResult {
    ip: IpAddr,
}

impl AResult {
    pub fn new(ip: IpAddr) -> Self {
        Self { ip }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn query_type(&self) -> QueryType {
        QueryType::A
    }
}

impl fmt::Display for AResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ip)
    }
}

pub const SVC_PARAM_ALPN: u16 = 1;
pub const SVC_PARAM_PORT: u16 = 3;
pub const SVC_PARAM_IPV4HINT: u16 = 4;
pub const SVC_PARAM_IPV6HINT: u16 = 6;
pub const SVC_PARAM_DOHPATH: u16 = 7;

/// One decoded SvcParam (RFC 9460 §7, plus dohpath from RFC 9461).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvcParam {
    Alpn(Vec<String>),
    Port(u16),
    Ipv4Hint(Vec<Ipv4Addr>),
    Ipv6Hint(Vec<Ipv6Addr>),
    DohPath(String),
    Unknown { key: u16, value: Vec<u8> },
}

impl fmt::Display for SvcParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvcParam::Alpn(ids) => write!(f, "alpn={}", ids.join(",")),
            SvcParam::Port(port) => write!(f, "port={}", port),
            SvcParam::Ipv4Hint(addrs) => write!(f, "ipv4hint={}", join_addrs(addrs)),
            SvcParam::Ipv6Hint(addrs) => write!(f, "ipv6hint={}", join_addrs(addrs)),
            SvcParam::DohPath(path) => write!(f, "dohpath={}", path),
            SvcParam::Unknown { key, value } => {
                write!(f, "key {}={}", key, String::from_utf8_lossy(value))
            }
        }
    }
}

fn join_addrs<T: fmt::Display>(addrs: &[T]) -> String {
    addrs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Decoded SVCB/HTTPS RDATA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvcbResult {
    pub priority: u16,
    pub target: String,
    pub params: BTreeMap<u16, SvcParam>,
}

impl SvcbResult {
    /// Priority 0 marks AliasMode (RFC 9460 §2.4.2).
    pub fn is_alias(&self) -> bool {
        self.priority == 0
    }
}

impl fmt::Display for SvcbResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.priority, self.target)?;
        for param in self.params.values() {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}
