use ftc::error::{FtcError, Result};
use ftc::platform::{RawBuffer, SourceReader};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory stand-in for the live system.
#[derive(Debug, Default)]
pub struct FakeReader {
    files: HashMap<PathBuf, String>,
    commands: HashMap<String, String>,
    programs: HashSet<String>,
    reads: RefCell<Vec<String>>,
}

impl FakeReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .insert(path.as_ref().to_path_buf(), content.to_string());
        self
    }

    pub fn command(mut self, command: &str, output: &str) -> Self {
        self.commands
            .insert(command.to_string(), output.to_string());
        self
    }

    pub fn program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    /// Every file and command accessed so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    /// A typical Arch Linux box.
    pub fn arch_box() -> Self {
        Self::new()
            .file(
                "/proc/meminfo",
                "MemTotal:       16318480 kB\nMemFree:         1234567 kB\nMemAvailable:    8159240 kB\nHugePages_Total:       0\n",
            )
            .file("/proc/sys/kernel/hostname", "archbox\n")
            .file(
                "/proc/version",
                "Linux version 6.9.3-arch1-1 (linux@archlinux) (gcc (GCC) 14.1.1 20240522) #1 SMP PREEMPT_DYNAMIC\n",
            )
            .file("/sys/class/hwmon/hwmon1/temp2_input", "45231\n")
            .file(
                "/var/log/pacman.log",
                "[2023-04-01T10:00:00+0000] [PACMAN] Running 'pacman -r /mnt -Sy'\n[2023-04-01T10:00:05+0000] [PACMAN] synchronizing\n",
            )
            .command("whoami", "alice\n")
            .command(
                "uptime",
                " 10:15:01 up  3:45,  2 users,  load average: 0.10, 0.20, 0.30\n",
            )
            .program("pacman")
            .command("pacman -Qq | wc -l", "1234\n")
    }
}

impl SourceReader for FakeReader {
    fn read_file(&self, path: &Path) -> Result<RawBuffer> {
        self.reads.borrow_mut().push(path.display().to_string());
        self.files
            .get(path)
            .map(|content| RawBuffer::from(content.as_str()))
            .ok_or_else(|| FtcError::source_unavailable(path.display().to_string(), "not found"))
    }

    fn run_command(&self, command: &str) -> Result<RawBuffer> {
        self.reads.borrow_mut().push(command.to_string());
        self.commands
            .get(command)
            .map(|output| RawBuffer::from(output.as_str()))
            .ok_or_else(|| FtcError::source_unavailable(command, "command not found"))
    }

    fn has_program(&self, program: &str) -> bool {
        self.programs.contains(program)
    }
}
