pub mod builders;
pub mod mock_exchange;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mock_exchange::*;
