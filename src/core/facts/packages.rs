use crate::core::config::Sources;
use crate::core::scanner::{is_digit, parse_u64, Cursor};
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;
use log::{debug, warn};

const WHAT: &str = "package count";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCount {
    pub count: u64,
    pub manager: String,
}

/// Parses the output of a counting pipeline such as `pacman -Qq | wc -l`.
pub fn parse_count(content: &[u8]) -> Result<u64> {
    let mut cursor = Cursor::new(content);
    cursor.skip_while(|b| b.is_ascii_whitespace());
    if cursor.at_end() {
        return Err(FtcError::empty(WHAT));
    }

    let digits = cursor.scan_while(is_digit);
    let count = parse_u64(cursor.slice(digits), WHAT)?;

    cursor.skip_while(|b| b.is_ascii_whitespace());
    if !cursor.at_end() {
        return Err(FtcError::malformed(
            WHAT,
            format!("unexpected text after count at offset {}", cursor.pos()),
        ));
    }

    Ok(count)
}

/// Counts for every configured package manager that is installed.
///
/// A manager that fails or reports nothing is left out; the fact only fails
/// when none of them produced a count.
pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<Vec<PackageCount>> {
    let mut counts = Vec::new();

    for manager in &sources.package_managers {
        if !reader.has_program(&manager.program) {
            continue;
        }

        let result = reader
            .run_command(&manager.query)
            .and_then(|out| parse_count(out.as_bytes()));

        match result {
            Ok(0) => debug!("{} reports no packages", manager.name),
            Ok(count) => counts.push(PackageCount {
                count,
                manager: manager.name.clone(),
            }),
            Err(e) if e.is_malformed() => warn!("Skipping {}: {}", manager.name, e),
            Err(e) => debug!("Skipping {}: {}", manager.name, e),
        }
    }

    if counts.is_empty() {
        return Err(FtcError::source_unavailable(
            "packages",
            "no supported package manager found",
        ));
    }

    Ok(counts)
}
