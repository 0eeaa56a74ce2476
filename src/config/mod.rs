//! Configuration module for the bond scatter application.

pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

pub use constants::{FIELD_SEPARATOR, FINALIZE_MIN_TOKENS, MIN_TAGGED_TOKEN_LEN};
