use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::error;

use mieruka_config::{Profile, default_profile_path, load_profile_or_default};
use mieruka_core::events;
use mieruka_core::monitors::{MonitorInfo, known_monitors, load_live_monitors};

use crate::color;

/// Profile path from `--profile`, else the default location.
pub(crate) fn profile_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("profile")
        .map(PathBuf::from)
        .unwrap_or_else(default_profile_path)
}

pub(crate) fn load_profile_for_command(path: &Path) -> Result<Profile, Box<dyn std::error::Error>> {
    load_profile_or_default(path).map_err(|e| {
        eprintln!("{}", color::error(&format!("Failed to load profile: {}", e)));
        error!(event = "cli.profile_load_failed", path = %path.display(), error = %e);
        events::log_app_error(&e);
        e.into()
    })
}

/// Live monitors from `--live`, if given.
pub(crate) fn load_live_for_command(
    matches: &ArgMatches,
) -> Result<Option<Vec<MonitorInfo>>, Box<dyn std::error::Error>> {
    let Some(live_path) = matches.get_one::<String>("live") else {
        return Ok(None);
    };

    match load_live_monitors(Path::new(live_path)) {
        Ok(monitors) => Ok(Some(monitors)),
        Err(e) => {
            eprintln!("{}", color::error(&format!("Failed to load live monitors: {}", e)));
            error!(event = "cli.live_monitors_failed", path = live_path, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Live monitors (if any) merged ahead of the profile's remembered monitors.
pub(crate) fn monitors_for_command(
    live: Option<&[MonitorInfo]>,
    profile: &Profile,
) -> Vec<MonitorInfo> {
    known_monitors(live, &profile.monitors)
}
