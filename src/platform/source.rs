//! Raw byte sources: pseudo-files and captured command output.
//!
//! Parsers never touch the filesystem or spawn processes themselves. They go
//! through a [`SourceReader`], which lets the whole fetch run against an
//! in-memory fake in tests.

use crate::error::{FtcError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Upper bound on how much of any single source is read.
pub const IO_BUFFER_SIZE: u64 = 10 * 1024;

/// Owned bytes from one read. The length is exactly what was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBuffer(Vec<u8>);

impl RawBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bytes up to (not including) the first newline.
    pub fn first_line(&self) -> &[u8] {
        match self.0.iter().position(|&b| b == b'\n') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<&str> for RawBuffer {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for RawBuffer {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

/// Where the fact parsers get their input from.
pub trait SourceReader {
    /// Read a file, capped at [`IO_BUFFER_SIZE`].
    fn read_file(&self, path: &Path) -> Result<RawBuffer>;

    /// Run a shell command line and capture its standard output.
    fn run_command(&self, command: &str) -> Result<RawBuffer>;

    /// Whether `program` can be found on `PATH`.
    fn has_program(&self, program: &str) -> bool;
}

const SIGPIPE: i32 = 13;

/// Whether the command died writing into our closed pipe.
fn killed_by_sigpipe(status: ExitStatus) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(SIGPIPE) {
            return true;
        }
    }
    // sh reports a pipeline member killed by a signal as 128 + signo.
    status.code() == Some(128 + SIGPIPE)
}

/// Reads the live system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemReader;

impl SystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for SystemReader {
    fn read_file(&self, path: &Path) -> Result<RawBuffer> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| FtcError::source_unavailable(&name, e))?;

        let mut bytes = Vec::new();
        file.take(IO_BUFFER_SIZE)
            .read_to_end(&mut bytes)
            .map_err(|e| FtcError::source_unavailable(&name, e))?;

        debug!("Read {} bytes from {}", bytes.len(), name);
        Ok(RawBuffer::new(bytes))
    }

    fn run_command(&self, command: &str) -> Result<RawBuffer> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| FtcError::source_unavailable(command, e))?;

        let mut bytes = Vec::new();
        let read = match child.stdout.take() {
            Some(stdout) => stdout.take(IO_BUFFER_SIZE).read_to_end(&mut bytes),
            None => Ok(0),
        };

        if let Err(e) = read {
            let _ = child.kill();
            let _ = child.wait();
            return Err(FtcError::source_unavailable(command, e));
        }

        // stdout is closed by now; output past the cap gets EPIPE.
        let status = child
            .wait()
            .map_err(|e| FtcError::source_unavailable(command, e))?;

        let truncated = bytes.len() as u64 >= IO_BUFFER_SIZE;
        if truncated && killed_by_sigpipe(status) {
            debug!("Command '{}' truncated at {} bytes", command, bytes.len());
            return Ok(RawBuffer::new(bytes));
        }

        if !status.success() {
            return Err(FtcError::source_unavailable(
                command,
                format!("exited with {}", status),
            ));
        }

        debug!("Command '{}' produced {} bytes", command, bytes.len());
        Ok(RawBuffer::new(bytes))
    }

    fn has_program(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
