use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zorori_domain::config::LoggingConfig;

/// `RUST_LOG` wins when set. A bare level applies to the zorori crates only
/// and keeps dependencies at `warn`; anything else is used as a full filter.
fn filter_spec(level: &str) -> String {
    match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => spec,
        _ if level.contains(['=', ',']) => level.to_string(),
        _ => format!("warn,zorori={}", level),
    }
}

/// Installs the global subscriber. Events go to stderr so stdout carries
/// only answers.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter_spec(&config.level))?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
