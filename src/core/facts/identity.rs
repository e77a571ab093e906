use crate::core::config::Sources;
use crate::error::{FtcError, Result};
use crate::platform::{RawBuffer, SourceReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Identity {
    /// Row of dashes as wide as `user@host`.
    pub fn separator(&self) -> String {
        "-".repeat(self.user.chars().count() + self.host.chars().count() + 1)
    }
}

/// First line of a name source, trimmed. Empty names are an error.
pub fn parse_name(buffer: &RawBuffer, source_name: &str) -> Result<String> {
    let name = String::from_utf8_lossy(buffer.first_line()).trim().to_string();
    if name.is_empty() {
        return Err(FtcError::empty(source_name));
    }
    Ok(name)
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<Identity> {
    let user = parse_name(
        &reader.run_command(&sources.user_command)?,
        &sources.user_command,
    )?;
    let host = parse_name(
        &reader.read_file(&sources.hostname)?,
        &sources.hostname.display().to_string(),
    )?;

    Ok(Identity { user, host })
}
