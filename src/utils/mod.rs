//! Utility modules

pub mod errors;
pub mod logging;

pub use errors::{AdminError, Result};
