use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// IPv4 addresses of the thirteen IANA root servers, a through m.
pub const ROOT_HINTS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(170, 247, 170, 2),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    #[default]
    Doh,

    Udp,
}

impl ResolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doh => "doh",
            Self::Udp => "udp",
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doh" => Ok(Self::Doh),
            "udp" => Ok(Self::Udp),
            _ => Err(format!("Invalid resolve mode '{}'. Expected 'doh' or 'udp'", s)),
        }
    }
}

/// How CNAME chains in an answer section are followed.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnswerChaseKind {
    /// Single in-order pass over the answers.
    #[default]
    Ordered,

    /// Index answers by owner and follow aliases regardless of order.
    Indexed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub mode: ResolveMode,

    /// In UDP mode, forward to `full_resolver` instead of walking from the roots.
    #[serde(default = "default_true")]
    pub stub: bool,

    #[serde(default = "default_full_resolver")]
    pub full_resolver: IpAddr,

    #[serde(default = "default_dns_port")]
    pub full_resolver_port: u16,

    #[serde(default = "default_doh_server")]
    pub doh_server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Extra attempts for a UDP hop that timed out.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Upstream queries one iterative resolution may spend.
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: usize,

    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<IpAddr>,

    #[serde(default)]
    pub query_id_seed: Option<u64>,

    #[serde(default)]
    pub answer_chase: AnswerChaseKind,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolveMode::default(),
            stub: true,
            full_resolver: default_full_resolver(),
            full_resolver_port: default_dns_port(),
            doh_server: default_doh_server(),
            query_timeout_ms: default_query_timeout_ms(),
            retries: default_retries(),
            max_referral_depth: default_max_referral_depth(),
            root_servers: default_root_servers(),
            query_id_seed: None,
            answer_chase: AnswerChaseKind::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_full_resolver() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))
}

fn default_dns_port() -> u16 {
    53
}

fn default_doh_server() -> String {
    "https://dns.google/dns-query".to_string()
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_retries() -> u32 {
    2
}

fn default_max_referral_depth() -> usize {
    20
}

fn default_root_servers() -> Vec<IpAddr> {
    ROOT_HINTS.iter().copied().map(IpAddr::V4).collect()
}
