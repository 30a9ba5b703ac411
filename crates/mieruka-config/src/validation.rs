use std::collections::HashSet;

use crate::errors::ConfigError;
use crate::types::Profile;

/// Check a profile for problems the geometry engine cannot repair by clamping.
pub fn validate_profile(profile: &Profile) -> Result<(), ConfigError> {
    if profile.settings.cycle_interval_secs == 0 {
        return Err(invalid("settings.cycle_interval_secs must be greater than 0"));
    }

    let mut seen = HashSet::new();
    for (index, app) in profile.apps.iter().enumerate() {
        if app.id.trim().is_empty() {
            return Err(invalid(format!("app at index {} has an empty id", index)));
        }
        if !seen.insert(app.id.as_str()) {
            return Err(invalid(format!("duplicate app id '{}'", app.id)));
        }

        let window = &app.window;
        for (field, value) in [("width", window.width), ("height", window.height)] {
            if let Some(value) = value.filter(|v| *v < 1) {
                return Err(invalid(format!(
                    "app '{}' has window {} {}; expected at least 1",
                    app.id, field, value
                )));
            }
        }
    }

    if matches!(&profile.settings.default_monitor, Some(id) if id.trim().is_empty()) {
        return Err(invalid("settings.default_monitor must not be blank"));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidProfile {
        message: message.into(),
    }
}
