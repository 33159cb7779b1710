use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("tabshift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move the active tab to the next display")
        .long_about(
            "Tabshift relocates the active tab of the current window to the adjacent \
             display, merging it into a suitable existing window there or creating a \
             new one, and restores fullscreen presentation state after the move. This \
             CLI drives the engine against scenario files describing a simulated host.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("run")
                .about("Run relocation against a scenario file")
                .arg(
                    Arg::new("scenario")
                        .help("Path to the scenario TOML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("private")
                        .long("private")
                        .short('p')
                        .help("Request a private-mode relocation (ignored when the scenario has a script)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the display topology and window placement of a scenario")
                .arg(
                    Arg::new("scenario")
                        .help("Path to the scenario TOML file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_run_requires_scenario() {
        let result = build_cli().try_get_matches_from(["tabshift", "run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_accepts_private_flag() {
        let matches = build_cli()
            .try_get_matches_from(["tabshift", "run", "layout.toml", "--private"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert!(sub.get_flag("private"));
        assert_eq!(
            sub.get_one::<String>("scenario").map(String::as_str),
            Some("layout.toml")
        );
    }

    #[test]
    fn test_quiet_flag_is_global() {
        let matches = build_cli()
            .try_get_matches_from(["tabshift", "inspect", "layout.toml", "--quiet"])
            .unwrap();
        assert!(matches.get_flag("quiet"));
    }
}
