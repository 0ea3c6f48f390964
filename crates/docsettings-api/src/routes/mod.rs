//! Route modules for the API server
//!
//! - settings: read, validate and update the settings document

pub mod settings;
