//! Value objects - immutable domain primitives

mod one_time_token;

pub use one_time_token::{OneTimeToken, TOKEN_VALIDITY_HOURS};
