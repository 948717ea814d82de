pub mod exchange;
pub mod resolver;
pub mod transport;

pub use exchange::UdpExchange;
pub use resolver::create_resolver;
