//! Command line definition and its mapping onto [`Config`].

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::core::config::{Config, Fact};

pub fn build_cli() -> Command {
    Command::new("ftc")
        .about("Print a short summary of this system")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("facts")
                .short('f')
                .long("facts")
                .value_name("LIST")
                .env("FTC_FACTS")
                .help("Comma separated facts to show, in order (see 'ftc list')")
                .global(true),
        )
        .arg(
            Arg::new("hide")
                .long("hide")
                .value_name("LIST")
                .help("Comma separated facts to leave out")
                .global(true),
        )
        .arg(
            Arg::new("temp-sensor")
                .long("temp-sensor")
                .value_name("PATH")
                .env("FTC_TEMP_SENSOR")
                .help("hwmon temperature input to read"),
        )
        .arg(
            Arg::new("pacman-log")
                .long("pacman-log")
                .value_name("PATH")
                .help("pacman log used for the installation date"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log skipped facts to stderr (repeat for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(Command::new("list").about("List the available facts"))
        .subcommand(Command::new("version").about("Shows version information"))
}

pub fn build_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::default();

    if let Some(list) = matches.get_one::<String>("facts") {
        let facts = Fact::parse_list(list).with_context(|| format!("Invalid --facts '{}'", list))?;
        config = config.with_facts(facts);
    }

    if let Some(list) = matches.get_one::<String>("hide") {
        let hidden = Fact::parse_list(list).with_context(|| format!("Invalid --hide '{}'", list))?;
        config = config.hide(&hidden);
    }

    if let Some(path) = matches.get_one::<String>("temp-sensor") {
        config = config.with_temperature_sensor(path);
    }

    if let Some(path) = matches.get_one::<String>("pacman-log") {
        config = config.with_pacman_log(path);
    }

    Ok(config)
}
