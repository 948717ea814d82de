//! zorori domain layer: DNS wire codec, names, record data and configuration.
pub mod config;
pub mod dns_name;
pub mod dns_record;
pub mod errors;
pub mod query_id;
pub mod rdata;
pub mod resolution;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_name::{normalize, same};
pub use dns_record::{Class, QueryType};
pub use errors::DomainError;
pub use query_id::QueryIdGenerator;
pub use rdata::{RecordData, Soa, SoaTimers};
pub use resolution::{AResult, SvcParam, SvcbResult};
pub use wire::{Message, Query, Question, ResourceRecord};
