pub mod commands;

pub use commands::handle_subcommands;

use clap::{Arg, Command};

pub fn build_cli() -> Command {
    Command::new("vehicle-diagnostics")
        .version(crate::VERSION)
        .about("Loads cleaned vehicle sensor data into the diagnostics SQLite database")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("PATH")
                .help("Input CSV path (default: data/processed/cleaned_sensor_data.csv)"),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("PATH")
                .help("SQLite database path (default: database/vehicle_diagnostics.db)"),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .value_name("NAME")
                .help("Destination table name (default: sensor_readings)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Report format: console or json"),
        )
        .subcommand(Command::new("load").about("Load the cleaned sensor CSV into the database (default action)"))
        .subcommand(Command::new("stats").about("Show row count and columns of the destination table"))
        .subcommand(
            Command::new("initconfig")
                .about("Write the effective configuration to a TOML file")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .default_value("config/loader.toml"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_overrides_and_subcommand() {
        let matches = build_cli().get_matches_from([
            "vehicle-diagnostics",
            "-i",
            "other.csv",
            "-t",
            "engine_readings",
            "stats",
        ]);

        assert_eq!(matches.get_one::<String>("input").unwrap(), "other.csv");
        assert_eq!(
            matches.get_one::<String>("table").unwrap(),
            "engine_readings"
        );
        assert!(matches.subcommand_matches("stats").is_some());
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let matches = build_cli().get_matches_from(["vehicle-diagnostics"]);
        assert!(matches.subcommand_name().is_none());
    }
}
