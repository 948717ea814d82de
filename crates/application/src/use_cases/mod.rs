mod direct;
mod iterative;
mod referral;

pub use direct::{check_response, interpret_a_response, interpret_svcb_response};
pub use iterative::IterativeResolution;
pub use referral::Referral;
