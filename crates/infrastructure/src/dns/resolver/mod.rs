#[cfg(feature = "dns-over-https")]
pub mod doh;
mod forward;
pub mod full;
pub mod stub;

#[cfg(feature = "dns-over-https")]
pub use doh::DohResolver;
pub use full::UdpFullResolver;
pub use stub::UdpStubResolver;

use std::sync::Arc;
use tracing::info;
use zorori_application::ports::DnsResolver;
use zorori_domain::config::{ResolveMode, ResolverConfig};
use zorori_domain::DomainError;

/// Builds the resolver `config` selects.
pub fn create_resolver(config: &ResolverConfig) -> Result<Arc<dyn DnsResolver>, DomainError> {
    let resolver: Arc<dyn DnsResolver> = match (config.mode, config.stub) {
        #[cfg(feature = "dns-over-https")]
        (ResolveMode::Doh, _) => Arc::new(DohResolver::from_config(config)),

        #[cfg(not(feature = "dns-over-https"))]
        (ResolveMode::Doh, _) => {
            return Err(DomainError::Transport {
                server: config.doh_server.clone(),
                reason: "built without the 'dns-over-https' feature".to_string(),
            })
        }

        (ResolveMode::Udp, true) => Arc::new(UdpStubResolver::from_config(config)),
        (ResolveMode::Udp, false) => Arc::new(UdpFullResolver::from_config(config)),
    };

    info!(
        resolver = resolver.name(),
        chase = ?config.answer_chase,
        timeout_ms = config.query_timeout_ms,
        "Resolver created"
    );
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_resolver() {
        let mut config = ResolverConfig::default();
        config.mode = ResolveMode::Udp;
        assert_eq!(create_resolver(&config).unwrap().name(), "udp-stub");

        config.stub = false;
        assert_eq!(create_resolver(&config).unwrap().name(), "udp-full");
    }

    #[cfg(feature = "dns-over-https")]
    #[test]
    fn test_default_is_doh() {
        let config = ResolverConfig::default();
        assert_eq!(create_resolver(&config).unwrap().name(), "doh");
    }
}
