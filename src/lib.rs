//! Payroll client library
//!
//! Form state, table rendering and collection synchronization for the
//! employee payroll API.

pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
