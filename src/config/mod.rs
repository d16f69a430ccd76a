//! Configuration module.
//!
//! Handles settings files and environment variable expansion.

mod settings;

pub use settings::{
    expand_env_vars, LoggingSettings, ResolverSettings, Settings, SettingsError, CONFIG_ENV_VAR,
};
