use clap::ArgMatches;
use tracing::{debug, error, info};

use mieruka_config::{Profile, save_profile};
use mieruka_core::events;
use mieruka_core::monitors::{
    MonitorError, MonitorInfo, create_stable_identifier, find_by_stable_id,
    resolve_monitor_for_app,
};
use mieruka_core::placement::{rebind_window, resolve_bounds, retarget_window};
use mieruka_core::AppConfig;

use super::helpers::{
    load_live_for_command, load_profile_for_command, monitors_for_command, profile_path,
};
use crate::color;

pub(crate) fn handle_retarget_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_id = matches
        .get_one::<String>("app")
        .ok_or("App argument is required")?;
    let monitor_id = matches
        .get_one::<String>("monitor")
        .ok_or("Monitor argument is required")?;
    let json_output = matches.get_flag("json");
    let write = matches.get_flag("write");
    let path = profile_path(matches);

    info!(
        event = "cli.retarget_started",
        app_id = app_id,
        monitor = monitor_id,
        write = write
    );

    let mut profile = load_profile_for_command(&path)?;
    let live = load_live_for_command(matches)?;
    let monitors = monitors_for_command(live.as_deref(), &profile);

    let (updated, target) = match retarget_app(&profile, &monitors, app_id, monitor_id) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", color::error(&format!("Failed to retarget '{}': {}", app_id, e)));
            error!(event = "cli.retarget_failed", app_id = app_id, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        let rect = resolve_bounds(&updated.window, &target);
        println!(
            "Retargeted '{}' to {}",
            app_id,
            color::accent(&create_stable_identifier(&target))
        );
        println!("  Bounds: {}", rect);
        println!(
            "  Full screen: {}",
            if updated.window.full_screen { "yes" } else { "no" }
        );
    }

    if write {
        profile.upsert_app(updated);
        profile.remember_monitor(target);
        if let Err(e) = save_profile(&path, &profile) {
            eprintln!("{}", color::error(&format!("Failed to save profile: {}", e)));
            error!(event = "cli.retarget_save_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
        println!("Saved {}", path.display());
    } else if !json_output {
        println!("{}", color::warning("Dry run: pass --write to save the profile."));
    }

    info!(event = "cli.retarget_completed", app_id = app_id);
    Ok(())
}

/// Retargeted copy of the app plus the monitor it now points at.
///
/// The window is scaled from its current monitor via zone math. When the
/// app's own monitor reference does not resolve, the stored rectangle is
/// clamped to the target instead; no default or primary fallback is used as
/// the source.
pub(crate) fn retarget_app(
    profile: &Profile,
    monitors: &[MonitorInfo],
    app_id: &str,
    monitor_id: &str,
) -> Result<(AppConfig, MonitorInfo), MonitorError> {
    let app = profile
        .find_app(app_id)
        .ok_or_else(|| MonitorError::AppNotFound {
            id: app_id.to_string(),
        })?;
    let target = find_by_stable_id(monitors, monitor_id).ok_or_else(|| {
        MonitorError::MonitorNotFound {
            stable_id: monitor_id.to_string(),
        }
    })?;

    let window = match resolve_monitor_for_app(app, monitors) {
        Some(current) => retarget_window(&app.window, current, target),
        None => {
            debug!(event = "cli.retarget_rebind", app_id = app_id);
            rebind_window(&app.window, target)
        }
    };

    let updated = AppConfig {
        target_monitor_stable_id: Some(create_stable_identifier(target)),
        window,
        ..app.clone()
    };
    Ok((updated, target.clone()))
}
