use clap::ArgMatches;
use tracing::error;

use mieruka_core::events;

mod helpers;
pub(crate) mod json_types;
mod monitors;
mod resolve;
mod retarget;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("monitors", sub_matches)) => monitors::handle_monitors_command(sub_matches),
        Some(("resolve", sub_matches)) => resolve::handle_resolve_command(sub_matches),
        Some(("retarget", sub_matches)) => retarget::handle_retarget_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
