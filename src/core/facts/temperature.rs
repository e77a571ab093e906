use crate::core::config::Sources;
use crate::core::scanner::{is_digit, parse_u64, Cursor};
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;

const WHAT: &str = "temperature";

/// Parses a hwmon `temp*_input` reading (signed millidegrees Celsius).
pub fn parse_millidegrees(content: &[u8]) -> Result<i64> {
    let mut cursor = Cursor::new(content);
    cursor.skip_while(|b| b.is_ascii_whitespace());

    let negative = cursor.eat(b'-');
    if !negative {
        cursor.eat(b'+');
    }

    let digits = cursor.scan_while(is_digit);
    let magnitude = parse_u64(cursor.slice(digits), WHAT)?;

    cursor.skip_while(|b| b.is_ascii_whitespace());
    if !cursor.at_end() {
        return Err(FtcError::malformed(
            WHAT,
            format!("unexpected text at offset {}", cursor.pos()),
        ));
    }

    let magnitude = i64::try_from(magnitude)
        .map_err(|_| FtcError::malformed(WHAT, "reading out of range"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Whole degrees Celsius, truncated toward zero.
pub fn to_celsius(millidegrees: i64) -> i64 {
    millidegrees / 1000
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<i64> {
    let content = reader.read_file(&sources.temperature)?;
    parse_millidegrees(content.as_bytes()).map(to_celsius)
}
