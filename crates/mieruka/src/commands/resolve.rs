use clap::ArgMatches;
use tracing::{info, warn};

use mieruka_config::Profile;
use mieruka_core::monitors::{MonitorInfo, create_stable_identifier, resolve_monitor_or_default};
use mieruka_core::placement::{
    calculate_monitor_relative_bounds, create_zone_from_window, resolve_bounds, to_virtual,
};

use super::helpers::{
    load_live_for_command, load_profile_for_command, monitors_for_command, profile_path,
};
use super::json_types::ResolvedPlacement;
use crate::{color, table};

pub(crate) fn handle_resolve_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let path = profile_path(matches);

    info!(
        event = "cli.resolve_started",
        json_output = json_output,
        profile = %path.display()
    );

    let profile = load_profile_for_command(&path)?;
    let live = load_live_for_command(matches)?;
    let monitors = monitors_for_command(live.as_deref(), &profile);

    let placements = resolve_placements(&profile, &monitors);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&placements)?);
    } else if placements.is_empty() {
        println!("No apps configured in {}", path.display());
    } else {
        println!("{}", color::bold("Placements:"));
        table::print_placements_table(&placements);
    }

    info!(event = "cli.resolve_completed", count = placements.len());
    Ok(())
}

pub(crate) fn resolve_placements(
    profile: &Profile,
    monitors: &[MonitorInfo],
) -> Vec<ResolvedPlacement> {
    let default_monitor = profile.settings.default_monitor.as_deref();

    profile
        .apps
        .iter()
        .map(|app| match resolve_monitor_or_default(app, monitors, default_monitor) {
            Some((monitor, resolution)) => {
                let bounds = resolve_bounds(&app.window, monitor);
                ResolvedPlacement {
                    app_id: app.id.clone(),
                    name: app.name.clone(),
                    monitor: Some(create_stable_identifier(monitor)),
                    resolution: resolution.as_str(),
                    bounds: Some(bounds),
                    virtual_bounds: Some(to_virtual(bounds, monitor)),
                    overlay_bounds: Some(calculate_monitor_relative_bounds(&app.window, monitor)),
                    zone: create_zone_from_window(&app.window, monitor),
                }
            }
            None => {
                warn!(event = "cli.resolve_no_monitor", app_id = app.id);
                ResolvedPlacement {
                    app_id: app.id.clone(),
                    name: app.name.clone(),
                    monitor: None,
                    resolution: "unresolved",
                    bounds: None,
                    virtual_bounds: None,
                    overlay_bounds: None,
                    zone: None,
                }
            }
        })
        .collect()
}
