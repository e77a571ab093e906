use ftc::core::config::{Config, Fact, PackageManager, Sources};
use ftc::FtcError;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.facts.len(), Fact::ALL.len());
    assert_eq!(config.sources, Sources::default());
}

#[test]
fn test_default_sources() {
    let sources = Sources::default();
    assert_eq!(sources.meminfo, PathBuf::from("/proc/meminfo"));
    assert_eq!(sources.kernel_version, PathBuf::from("/proc/version"));
    assert_eq!(sources.hostname, PathBuf::from("/proc/sys/kernel/hostname"));
    assert_eq!(sources.user_command, "whoami");
    assert_eq!(sources.uptime_command, "uptime");
    assert_eq!(
        sources.package_managers.first().map(|m| m.name.as_str()),
        Some("pacman")
    );
}

#[test]
fn test_default_package_managers_are_distinct() {
    let managers = PackageManager::defaults();
    for (i, a) in managers.iter().enumerate() {
        for b in &managers[i + 1..] {
            assert_ne!(a.name, b.name);
        }
        assert!(a.query.contains("wc -l"));
    }
}

#[test]
fn test_facts_then_hide() {
    let facts = Fact::parse_list("kernel,memory,uptime").unwrap();
    let config = Config::default().with_facts(facts).hide(&[Fact::Memory]);
    assert_eq!(config.facts, vec![Fact::Kernel, Fact::Uptime]);
}

#[test]
fn test_invalid_fact_is_config_error() {
    match Fact::parse_list("kernel,battery") {
        Err(FtcError::Config(msg)) => {
            assert!(msg.contains("battery"));
            assert!(msg.contains("install-date"));
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_aliases() {
    assert_eq!("mem".parse::<Fact>().unwrap(), Fact::Memory);
    assert_eq!("TEMP".parse::<Fact>().unwrap(), Fact::Temperature);
    assert_eq!("installed".parse::<Fact>().unwrap(), Fact::InstallDate);
}
