//! Settings routes - JSON API over the settings store

pub mod api;

pub use api::{
    api_path_problems, api_settings, api_settings_section, api_update_settings,
    api_validate_settings,
};
