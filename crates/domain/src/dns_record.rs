mod class;
mod query_type;

pub use class::Class;
pub use query_type::QueryType;
