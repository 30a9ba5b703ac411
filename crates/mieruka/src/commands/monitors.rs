use clap::ArgMatches;
use tracing::{error, info};

use mieruka_config::save_profile;
use mieruka_core::events;
use mieruka_core::monitors::create_stable_identifier;

use super::helpers::{
    load_live_for_command, load_profile_for_command, monitors_for_command, profile_path,
};
use super::json_types::IdentifiedMonitor;
use crate::{color, table};

pub(crate) fn handle_monitors_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let remember = matches.get_flag("remember");
    let path = profile_path(matches);

    info!(
        event = "cli.monitors_started",
        json_output = json_output,
        remember = remember,
        profile = %path.display()
    );

    let mut profile = load_profile_for_command(&path)?;
    let live = load_live_for_command(matches)?;
    let monitors = monitors_for_command(live.as_deref(), &profile);

    if json_output {
        let identified: Vec<_> = monitors
            .iter()
            .map(|monitor| IdentifiedMonitor {
                identifier: create_stable_identifier(monitor),
                monitor,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&identified)?);
    } else if monitors.is_empty() {
        println!(
            "{}",
            color::muted("No monitors known. Pass --live or add monitors to the profile.")
        );
    } else {
        println!("{}", color::bold("Monitors:"));
        table::print_monitors_table(&monitors);
    }

    let remembered = if remember { live } else { None };
    if let Some(live) = remembered {
        let count = live.len();
        for monitor in live {
            profile.remember_monitor(monitor);
        }
        if let Err(e) = save_profile(&path, &profile) {
            eprintln!("{}", color::error(&format!("Failed to save profile: {}", e)));
            error!(event = "cli.monitors_remember_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
        println!("Remembered {} monitor(s) in {}", count, path.display());
    }

    info!(event = "cli.monitors_completed", count = monitors.len());
    Ok(())
}
