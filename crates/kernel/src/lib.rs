//! Core settings shared by every payroll client crate.

pub mod settings;

pub use settings::Settings;
