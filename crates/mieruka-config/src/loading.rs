use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::ConfigError;
use crate::types::Profile;
use crate::validation::validate_profile;

/// Environment variable overriding the default profile location.
pub const PROFILE_ENV_VAR: &str = "MIERUKA_PROFILE";

/// Location of the profile file.
///
/// `MIERUKA_PROFILE` wins when set. Otherwise `~/.mieruka/profile.toml`,
/// falling back to `./.mieruka/profile.toml` if the home directory cannot be
/// determined.
pub fn default_profile_path() -> PathBuf {
    if let Some(path) = std::env::var_os(PROFILE_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".mieruka").join("profile.toml"),
        None => {
            warn!(
                event = "config.profile.home_dir_not_found",
                fallback = ".mieruka/profile.toml",
                "Could not determine home directory, using current directory fallback"
            );
            PathBuf::from(".mieruka").join("profile.toml")
        }
    }
}

/// Parse and validate a profile from TOML text.
pub fn parse_profile(content: &str) -> Result<Profile, ConfigError> {
    let profile: Profile = toml::from_str(content).map_err(|e| ConfigError::ProfileParseError {
        message: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Load a profile, failing if the file does not exist.
pub fn load_profile(path: &Path) -> Result<Profile, ConfigError> {
    info!(event = "config.profile.load_started", path = %path.display());

    if !path.exists() {
        return Err(ConfigError::ProfileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let profile = parse_profile(&content)?;

    info!(
        event = "config.profile.load_completed",
        path = %path.display(),
        apps = profile.apps.len(),
        monitors = profile.monitors.len()
    );
    Ok(profile)
}

/// Load a profile, treating a missing file as an empty profile.
///
/// Parse and validation errors still propagate so a broken profile is never
/// silently replaced on the next save.
pub fn load_profile_or_default(path: &Path) -> Result<Profile, ConfigError> {
    match load_profile(path) {
        Err(ConfigError::ProfileNotFound { .. }) => {
            info!(
                event = "config.profile.not_found_using_default",
                path = %path.display()
            );
            Ok(Profile::default())
        }
        other => other,
    }
}

/// Validate and write a profile, creating parent directories as needed.
pub fn save_profile(path: &Path, profile: &Profile) -> Result<(), ConfigError> {
    validate_profile(profile)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(profile).map_err(|e| ConfigError::SerializeError {
        message: e.to_string(),
    })?;
    std::fs::write(path, content)?;

    info!(
        event = "config.profile.saved",
        path = %path.display(),
        apps = profile.apps.len(),
        monitors = profile.monitors.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mieruka_core::errors::MierukaError;
    use mieruka_core::{AppConfig, MonitorInfo, MonitorKey, Rect, WindowConfig};

    const SAMPLE: &str = r#"
[settings]
cycle_interval_secs = 45

[[monitors]]
name = "Left"
device_name = '\\.\DISPLAY1'
width = 1920
height = 1080
is_primary = true
bounds = { x = 0, y = 0, width = 1920, height = 1080 }
work_area = { x = 0, y = 0, width = 1920, height = 1040 }

[[apps]]
id = "dash"
name = "Dashboard"
target = "https://dash.example.test"
target_monitor_stable_id = '\\.\DISPLAY1'

[apps.window]
x = 100
y = 50
width = 800
always_on_top = true

[apps.window.monitor]
device_id = "MONITOR\\DEL4321"
target_id = 4
"#;

    #[test]
    fn test_parse_profile_sample() {
        let profile = parse_profile(SAMPLE).unwrap();
        assert_eq!(profile.settings.cycle_interval_secs, 45);
        assert_eq!(profile.monitors.len(), 1);
        assert_eq!(profile.monitors[0].device_name, "\\\\.\\DISPLAY1");
        assert_eq!(profile.monitors[0].work_area.height, 1040);

        let app = profile.find_app("dash").unwrap();
        assert_eq!(app.target_monitor(), Some("\\\\.\\DISPLAY1"));
        assert_eq!(app.window.x, Some(100));
        assert_eq!(app.window.height, None);
        assert!(app.window.always_on_top);
        assert_eq!(app.window.monitor.device_id, "MONITOR\\DEL4321");
        assert_eq!(app.window.monitor.target_id, 4);
    }

    #[test]
    fn test_parse_profile_empty_is_default() {
        let profile = parse_profile("").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_parse_profile_syntax_error() {
        let err = parse_profile("[settings\ncycle = ").unwrap_err();
        assert_eq!(err.error_code(), "PROFILE_PARSE_ERROR");
    }

    #[test]
    fn test_parse_profile_runs_validation() {
        let err = parse_profile("[settings]\ncycle_interval_secs = 0\n").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PROFILE");
    }

    #[test]
    fn test_load_profile_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");

        let err = load_profile(&path).unwrap_err();
        assert_eq!(err.error_code(), "PROFILE_NOT_FOUND");

        let profile = load_profile_or_default(&path).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_load_profile_or_default_propagates_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "apps = 3").unwrap();

        let err = load_profile_or_default(&path).unwrap_err();
        assert_eq!(err.error_code(), "PROFILE_PARSE_ERROR");
    }

    #[test]
    fn test_save_then_load_preserves_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.toml");

        let mut profile = Profile::default();
        profile.remember_monitor(
            MonitorInfo::new("Right", Rect::new(1920, 0, 2560, 1440))
                .with_device_name("\\\\.\\DISPLAY2")
                .with_key(MonitorKey {
                    adapter_luid_low: 0xBEEF,
                    target_id: 2,
                    ..Default::default()
                }),
        );
        profile.upsert_app(
            AppConfig::new("dash", WindowConfig::at(10, 20, 640, 480).with_title("Dashboard"))
                .with_target_monitor("\\\\.\\DISPLAY2"),
        );

        save_profile(&path, &profile).unwrap();
        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_profile_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        let mut profile = Profile::default();
        profile.settings.cycle_interval_secs = 0;

        let err = save_profile(&path, &profile).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PROFILE");
        assert!(!path.exists());
    }

    #[test]
    fn test_default_profile_path_env_override() {
        temp_env::with_var(PROFILE_ENV_VAR, Some("/tmp/custom/profile.toml"), || {
            assert_eq!(
                default_profile_path(),
                PathBuf::from("/tmp/custom/profile.toml")
            );
        });
    }

    #[test]
    fn test_default_profile_path_under_home() {
        temp_env::with_var_unset(PROFILE_ENV_VAR, || {
            let path = default_profile_path();
            assert!(path.ends_with(".mieruka/profile.toml"));
        });
    }
}
