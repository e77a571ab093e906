use crate::core::facts::{MemoryUsage, PackageCount, ParsedFact};
use colored::*;

/// Render a colored `Label: value` line.
pub fn labeled(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}: {}", label.blue().bold(), value)
}

/// Format memory as `used MiB / total MiB`, flagging incomplete readings.
pub fn format_memory(usage: &MemoryUsage) -> String {
    let mut text = format!("{} MiB / {} MiB", usage.used_mib, usage.total_mib);
    if !usage.complete {
        text.push_str(&format!(" {}", "(incomplete)".dimmed()));
    }
    text
}

/// Format package counts as `1234 (pacman), 12 (flatpak)`.
pub fn format_packages(counts: &[PackageCount]) -> String {
    counts
        .iter()
        .map(|p| format!("{} ({})", p.count, p.manager))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lines printed for one fact.
pub fn format_fact(fact: &ParsedFact) -> Vec<String> {
    match fact {
        ParsedFact::Identity(identity) => vec![
            format!("{}@{}", identity.user.cyan().bold(), identity.host),
            identity.separator(),
        ],
        ParsedFact::Kernel { version } => vec![labeled("Kernel", format!("linux {}", version))],
        ParsedFact::Memory(usage) => vec![labeled("Memory", format_memory(usage))],
        ParsedFact::Packages(counts) => vec![labeled("Packages", format_packages(counts))],
        ParsedFact::InstallDate { date } => vec![labeled("System installed", date)],
        ParsedFact::Uptime(uptime) => vec![labeled("Uptime", uptime)],
        ParsedFact::Temperature(Some(celsius)) => {
            vec![labeled("CPU temp", format!("{}°C", celsius))]
        }
        ParsedFact::Temperature(None) => vec![labeled("CPU temp", "unavailable".yellow())],
    }
}
