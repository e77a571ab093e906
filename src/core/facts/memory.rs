use crate::core::config::Sources;
use crate::core::scanner::{is_blank, is_digit, is_letter, parse_u64, Cursor};
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;
use log::warn;

const WHAT: &str = "meminfo";

/// The two `/proc/meminfo` values we care about, in kB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kb: Option<u64>,
    pub available_kb: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used_mib: u64,
    pub total_mib: u64,
    /// False when `MemTotal` or `MemAvailable` was missing and defaulted to 0.
    pub complete: bool,
}

impl MemInfo {
    pub fn usage(&self) -> MemoryUsage {
        let total = self.total_kb.unwrap_or(0);
        let available = self.available_kb.unwrap_or(0);

        MemoryUsage {
            used_mib: total.saturating_sub(available) / 1024,
            total_mib: total / 1024,
            complete: self.total_kb.is_some() && self.available_kb.is_some(),
        }
    }
}

fn is_key_byte(b: u8) -> bool {
    is_letter(b) || is_digit(b) || b == b'_' || b == b'(' || b == b')'
}

/// Parses `/proc/meminfo` content.
///
/// Each line is `Key:<spaces><digits>[<spaces><unit>]`. Every line is
/// checked, not only the interesting ones, so a structurally broken file is
/// reported instead of producing numbers from a misaligned scan.
pub fn parse_meminfo(content: &[u8]) -> Result<MemInfo> {
    let mut info = MemInfo::default();
    let mut cursor = Cursor::new(content);

    loop {
        cursor.skip_while(|b| b == b'\n');
        if cursor.at_end() {
            break;
        }

        let line_start = cursor.pos();
        if !cursor.peek().is_some_and(is_letter) {
            return Err(FtcError::malformed(
                WHAT,
                format!("line at offset {} does not start with a key", line_start),
            ));
        }
        let key = cursor.scan_while(is_key_byte);
        cursor.expect(b':', WHAT)?;

        cursor.skip_while(is_blank);
        let digits = cursor.scan_while(is_digit);
        let value = parse_u64(cursor.slice(digits), WHAT)?;

        cursor.skip_while(is_blank);
        let unit = cursor.scan_while(is_letter);
        if !unit.is_empty() && unit.len() != 2 {
            return Err(FtcError::malformed(
                WHAT,
                format!(
                    "unexpected unit '{}' at offset {}",
                    cursor.slice(unit).escape_ascii(),
                    unit.start
                ),
            ));
        }

        cursor.skip_while(is_blank);
        if !cursor.at_end() {
            cursor.expect(b'\n', WHAT)?;
        }

        match cursor.slice(key) {
            b"MemTotal" => info.total_kb = Some(value),
            b"MemAvailable" => info.available_kb = Some(value),
            _ => {}
        }
    }

    Ok(info)
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<MemoryUsage> {
    let content = reader.read_file(&sources.meminfo)?;
    let usage = parse_meminfo(content.as_bytes())?.usage();

    if !usage.complete {
        warn!(
            "{} is missing MemTotal or MemAvailable; memory figures are incomplete",
            sources.meminfo.display()
        );
    }

    Ok(usage)
}
