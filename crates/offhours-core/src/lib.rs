//! Shared configuration, errors and constants for the offhours workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
