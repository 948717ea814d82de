//! DNS message codec (RFC 1035 §4).

mod header;
mod message;
pub mod name;
mod query;
mod reader;

pub use header::{Header, RCODE_NO_ERROR, RCODE_NXDOMAIN};
pub use message::{Message, ResourceRecord};
pub use name::{read_name, write_name};
pub use query::{Query, Question};
