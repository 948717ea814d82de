mod dns_resolver;
mod upstream_exchange;

pub use dns_resolver::DnsResolver;
pub use upstream_exchange::UpstreamExchange;
