use clap::{Arg, ArgAction, Command};

fn live_arg() -> Arg {
    Arg::new("live")
        .long("live")
        .value_name("PATH")
        .help("JSON array of live monitors; takes priority over remembered monitors")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output as JSON")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("mieruka")
        .about("Inspect monitors and resolve window placement for configured apps")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("PATH")
                .help("Profile file (default: $MIERUKA_PROFILE or ~/.mieruka/profile.toml)")
                .global(true),
        )
        .subcommand(
            Command::new("monitors")
                .about("List known monitors with their stable identifiers")
                .arg(live_arg())
                .arg(json_arg())
                .arg(
                    Arg::new("remember")
                        .long("remember")
                        .help("Store the live monitors in the profile")
                        .action(ArgAction::SetTrue)
                        .requires("live"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the monitor and bounds of every configured app")
                .arg(live_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("retarget")
                .about("Move an app's window to another monitor, keeping its relative placement")
                .arg(
                    Arg::new("app")
                        .help("Id of the configured app")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("monitor")
                        .help("Stable identifier of the target monitor")
                        .required(true)
                        .index(2),
                )
                .arg(live_arg())
                .arg(json_arg())
                .arg(
                    Arg::new("write")
                        .long("write")
                        .help("Save the updated app to the profile")
                        .action(ArgAction::SetTrue),
                ),
        )
}
