use ftc::cli::{build_cli, build_config};
use ftc::core::config::{Config, Fact};
use std::path::PathBuf;

fn config_from(args: &[&str]) -> anyhow::Result<Config> {
    let matches = build_cli().try_get_matches_from(args)?;
    build_config(&matches)
}

#[test]
fn test_facts_flag_sets_order() {
    let config = config_from(&["ftc", "--facts", "uptime,kernel"]).unwrap();
    assert_eq!(config.facts, vec![Fact::Uptime, Fact::Kernel]);

    let config = config_from(&["ftc", "-f", "temp"]).unwrap();
    assert_eq!(config.facts, vec![Fact::Temperature]);
}

#[test]
fn test_facts_from_environment() {
    // The only test touching FTC_FACTS; every other test passes --facts.
    std::env::set_var("FTC_FACTS", "memory,uptime");
    let from_env = config_from(&["ftc"]);
    let overridden = config_from(&["ftc", "--facts", "kernel"]);
    std::env::remove_var("FTC_FACTS");

    assert_eq!(from_env.unwrap().facts, vec![Fact::Memory, Fact::Uptime]);
    assert_eq!(overridden.unwrap().facts, vec![Fact::Kernel]);
}

#[test]
fn test_hide_applies_after_facts() {
    let config = config_from(&[
        "ftc",
        "--facts",
        "identity,kernel,memory",
        "--hide",
        "kernel",
    ])
    .unwrap();
    assert_eq!(config.facts, vec![Fact::Identity, Fact::Memory]);
}

#[test]
fn test_source_paths() {
    let config = config_from(&[
        "ftc",
        "--facts",
        "temperature,install-date",
        "--temp-sensor",
        "/sys/class/hwmon/hwmon3/temp1_input",
        "--pacman-log",
        "/tmp/pacman.log",
    ])
    .unwrap();

    assert_eq!(
        config.sources.temperature,
        PathBuf::from("/sys/class/hwmon/hwmon3/temp1_input")
    );
    assert_eq!(config.sources.pacman_log, PathBuf::from("/tmp/pacman.log"));
}

#[test]
fn test_unknown_fact_is_rejected() {
    let err = config_from(&["ftc", "--facts", "kernel,gpu"]).unwrap_err();
    assert!(format!("{:#}", err).contains("gpu"));

    assert!(config_from(&["ftc", "--facts", "kernel", "--hide", "nope"]).is_err());
}

#[test]
fn test_flags_and_subcommands() {
    let matches = build_cli()
        .try_get_matches_from(["ftc", "-vv", "--no-color", "--facts", "kernel", "list"])
        .unwrap();
    assert_eq!(matches.get_count("verbose"), 2);
    assert!(matches.get_flag("no-color"));
    assert_eq!(matches.subcommand_name(), Some("list"));

    let matches = build_cli()
        .try_get_matches_from(["ftc", "--facts", "kernel", "-V"])
        .unwrap();
    assert!(matches.get_flag("version"));
}
