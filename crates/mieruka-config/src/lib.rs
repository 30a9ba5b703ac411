//! Profile configuration for the Mieruka configurator.
//!
//! A profile is a TOML file holding operator settings, monitors remembered
//! from earlier sessions, and the configured apps with their window
//! placement.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{
    PROFILE_ENV_VAR, default_profile_path, load_profile, load_profile_or_default, parse_profile,
    save_profile,
};
pub use types::{DEFAULT_CYCLE_INTERVAL_SECS, Profile, Settings};
pub use validation::validate_profile;
