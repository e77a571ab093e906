use crate::core::config::Sources;
use crate::core::scanner::Cursor;
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;

const WHAT: &str = "pacman log";

/// Date part of the first pacman log entry.
///
/// Entries start with `[2023-04-01T10:00:00+0000]`; logs written by older
/// pacman releases use `[2019-01-01 10:00]`. A first line that does not open
/// with `[` means the log holds no entries.
pub fn parse_install_date(first_line: &[u8]) -> Result<String> {
    let mut cursor = Cursor::new(first_line);
    if !cursor.eat(b'[') {
        return Err(FtcError::empty(WHAT));
    }

    let date = cursor.scan_while(|b| b != b'T' && b != b' ' && b != b'\n');
    if cursor.at_end() || cursor.peek() == Some(b'\n') {
        return Err(FtcError::malformed(WHAT, "no time separator in first entry"));
    }
    if date.is_empty() {
        return Err(FtcError::malformed(WHAT, "empty date in first entry"));
    }

    Ok(cursor.text(date, WHAT)?.to_string())
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<String> {
    let log = reader.read_file(&sources.pacman_log)?;
    parse_install_date(log.first_line())
}
