use crate::error::{FtcError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One line (or block) of fetch output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    Identity,
    Kernel,
    Memory,
    Packages,
    InstallDate,
    Uptime,
    Temperature,
}

impl Fact {
    /// Every fact, in the default display order.
    pub const ALL: [Fact; 7] = [
        Fact::Identity,
        Fact::Kernel,
        Fact::Memory,
        Fact::Packages,
        Fact::InstallDate,
        Fact::Uptime,
        Fact::Temperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fact::Identity => "identity",
            Fact::Kernel => "kernel",
            Fact::Memory => "memory",
            Fact::Packages => "packages",
            Fact::InstallDate => "install-date",
            Fact::Uptime => "uptime",
            Fact::Temperature => "temperature",
        }
    }

    /// Parse a comma separated list such as `"kernel,memory, uptime"`.
    ///
    /// Order is kept; repeated names are collapsed to their first position.
    pub fn parse_list(list: &str) -> Result<Vec<Fact>> {
        let mut facts = Vec::new();
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let fact: Fact = item.parse()?;
            if !facts.contains(&fact) {
                facts.push(fact);
            }
        }
        Ok(facts)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fact {
    type Err = FtcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "user" | "host" => Ok(Fact::Identity),
            "kernel" => Ok(Fact::Kernel),
            "memory" | "mem" => Ok(Fact::Memory),
            "packages" | "pkgs" => Ok(Fact::Packages),
            "install-date" | "installed" => Ok(Fact::InstallDate),
            "uptime" => Ok(Fact::Uptime),
            "temperature" | "temp" => Ok(Fact::Temperature),
            other => Err(FtcError::config(format!(
                "unknown fact '{}' (expected one of: {})",
                other,
                Fact::ALL.map(|f| f.name()).join(", ")
            ))),
        }
    }
}

/// A package manager and the pipeline that prints its package count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub name: String,
    /// Executable that must be on `PATH` before the query is attempted.
    pub program: String,
    pub query: String,
}

impl PackageManager {
    pub fn new(name: &str, program: &str, query: &str) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            query: query.to_string(),
        }
    }

    pub fn defaults() -> Vec<PackageManager> {
        vec![
            PackageManager::new("pacman", "pacman", "pacman -Qq | wc -l"),
            PackageManager::new("dpkg", "dpkg-query", "dpkg-query -f '.\\n' -W | wc -l"),
            PackageManager::new("rpm", "rpm", "rpm -qa | wc -l"),
            PackageManager::new("xbps", "xbps-query", "xbps-query -l | wc -l"),
            PackageManager::new("apk", "apk", "apk info | wc -l"),
            PackageManager::new("flatpak", "flatpak", "flatpak list | wc -l"),
        ]
    }
}

/// Where each fact reads its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub meminfo: PathBuf,
    pub hostname: PathBuf,
    pub kernel_version: PathBuf,
    pub temperature: PathBuf,
    pub pacman_log: PathBuf,
    pub user_command: String,
    pub uptime_command: String,
    pub package_managers: Vec<PackageManager>,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            meminfo: PathBuf::from("/proc/meminfo"),
            hostname: PathBuf::from("/proc/sys/kernel/hostname"),
            kernel_version: PathBuf::from("/proc/version"),
            temperature: PathBuf::from("/sys/class/hwmon/hwmon1/temp2_input"),
            pacman_log: PathBuf::from("/var/log/pacman.log"),
            user_command: "whoami".to_string(),
            uptime_command: "uptime".to_string(),
            package_managers: PackageManager::defaults(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Facts to print, in order.
    pub facts: Vec<Fact>,
    pub sources: Sources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            facts: Fact::ALL.to_vec(),
            sources: Sources::default(),
        }
    }
}

impl Config {
    pub fn with_facts(mut self, facts: Vec<Fact>) -> Self {
        self.facts = facts;
        self
    }

    /// Drop the given facts from the display list.
    pub fn hide(mut self, hidden: &[Fact]) -> Self {
        self.facts.retain(|f| !hidden.contains(f));
        self
    }

    pub fn with_temperature_sensor<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sources.temperature = path.into();
        self
    }

    pub fn with_pacman_log<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sources.pacman_log = path.into();
        self
    }
}
