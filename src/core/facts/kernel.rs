use crate::core::config::Sources;
use crate::core::scanner::{is_letter, Cursor};
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;

const WHAT: &str = "kernel version";

/// Extracts the release token from a `/proc/version` line.
///
/// `Linux version 6.9.3-arch1-1 (builduser@host) ...` gives `6.9.3-arch1-1`:
/// the leading words are skipped and the next space-delimited run is taken.
pub fn parse_kernel_version(content: &[u8]) -> Result<String> {
    let mut cursor = Cursor::new(content);
    cursor.skip_while(|b| is_letter(b) || b == b' ');

    let token = cursor.scan_while(|b| b != b' ' && b != b'\n');
    if token.is_empty() {
        return Err(FtcError::malformed(WHAT, "no version token after description"));
    }

    Ok(cursor.text(token, WHAT)?.to_string())
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<String> {
    let content = reader.read_file(&sources.kernel_version)?;
    parse_kernel_version(content.as_bytes())
}
