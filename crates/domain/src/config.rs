mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{AnswerChaseKind, ResolveMode, ResolverConfig, ROOT_HINTS};
pub use root::{CliOverrides, Config};
