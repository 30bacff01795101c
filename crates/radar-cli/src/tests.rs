use super::*;
use crate::settings::ListingTypeArg;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["listing-radar"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_scan_command() {
    let cli = Cli::try_parse_from(["listing-radar", "scan"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Scan)));
}

#[test]
fn dashboard_sample_flag_defaults_off() {
    let cli = Cli::try_parse_from(["listing-radar", "dashboard"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Dashboard { sample: false })
    ));

    let cli = Cli::try_parse_from(["listing-radar", "dashboard", "--sample"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Dashboard { sample: true })));
}

#[test]
fn history_defaults_to_all_scans() {
    let cli = Cli::try_parse_from(["listing-radar", "history"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            filter: HistoryFilter::All,
            sample: false,
            expand: None
        })
    ));
}

#[test]
fn history_accepts_filter_and_expand() {
    let cli = Cli::try_parse_from([
        "listing-radar",
        "history",
        "--filter",
        "apartments",
        "--sample",
        "--expand",
        "s2",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::History {
            filter: HistoryFilter::Apartments,
            sample: true,
            expand: Some(ref id)
        }) if id == "s2"
    ));
}

#[test]
fn history_rejects_unknown_filter() {
    let result = Cli::try_parse_from(["listing-radar", "history", "--filter", "houses"]);
    assert!(result.is_err());
}

#[test]
fn parses_schedule_subcommands() {
    let cli = Cli::try_parse_from(["listing-radar", "schedule", "status"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Schedule {
            command: ScheduleCommands::Status
        })
    ));

    let cli = Cli::try_parse_from(["listing-radar", "schedule", "toggle"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Schedule {
            command: ScheduleCommands::Toggle
        })
    ));
}

#[test]
fn schedule_requires_subcommand() {
    assert!(Cli::try_parse_from(["listing-radar", "schedule"]).is_err());
}

#[test]
fn settings_set_collects_repeated_flags() {
    let cli = Cli::try_parse_from([
        "listing-radar",
        "settings",
        "set",
        "--keyword",
        "rust",
        "--keyword",
        "backend",
        "--location",
        "Remote",
        "--listing-type",
        "jobs",
        "--url",
        "https://indeed.com",
        "--email",
        "me@example.com",
        "--frequency",
        "0 */6 * * *",
    ])
    .unwrap();

    let Some(Commands::Settings {
        command:
            SettingsCommands::Set {
                keywords,
                locations,
                listing_type,
                urls,
                email,
                frequency,
            },
    }) = cli.command
    else {
        panic!("expected settings set");
    };
    assert_eq!(keywords, ["rust", "backend"]);
    assert_eq!(locations, ["Remote"]);
    assert_eq!(listing_type, Some(ListingTypeArg::Jobs));
    assert_eq!(urls, ["https://indeed.com"]);
    assert_eq!(email.as_deref(), Some("me@example.com"));
    assert_eq!(frequency.as_deref(), Some("0 */6 * * *"));
}

#[test]
fn settings_set_rejects_unknown_frequency() {
    let result = Cli::try_parse_from([
        "listing-radar",
        "settings",
        "set",
        "--frequency",
        "*/5 * * * *",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_settings_show_and_reset() {
    let cli = Cli::try_parse_from(["listing-radar", "settings", "show", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Settings {
            command: SettingsCommands::Show { json: true }
        })
    ));

    let cli = Cli::try_parse_from(["listing-radar", "settings", "reset"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Settings {
            command: SettingsCommands::Reset
        })
    ));
}

#[test]
fn parses_agents_command() {
    let cli = Cli::try_parse_from(["listing-radar", "agents"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Agents)));
}
