//! Parsing of the human-readable `uptime` report.
//!
//! The report looks like ` 10:15:01 up  3:45,  2 users,  load average: ...`.
//! Only the clause(s) right after `up` matter. Three shapes occur there:
//!
//! - `27 min` for less than an hour
//! - `3:45` for hours and minutes
//! - `12 days,` followed by one of the above

use crate::core::config::Sources;
use crate::core::scanner::{is_blank, is_digit, is_letter, parse_u64, Cursor, Span};
use crate::error::{FtcError, Result};
use crate::platform::SourceReader;
use std::fmt;

const WHAT: &str = "uptime";

/// Longest duration clause scanned before giving up on finding its end.
const FIELD_CAP: usize = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    /// `None` for the minutes-only form.
    pub hours: Option<u64>,
    pub minutes: u64,
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{} days, ", self.days)?;
        }
        if let Some(hours) = self.hours {
            write!(f, "{} hours, ", hours)?;
        }
        write!(f, "{} minutes", self.minutes)
    }
}

/// One comma-delimited clause of the duration.
enum Clause {
    Days(u64),
    Minutes(u64),
    HoursMinutes(u64, u64),
}

/// A number optionally padded with blanks, and nothing else.
fn padded_number(bytes: &[u8]) -> Result<u64> {
    let mut cursor = Cursor::new(bytes);
    cursor.skip_while(is_blank);
    let digits = cursor.scan_while(is_digit);
    cursor.skip_while(is_blank);
    if !cursor.at_end() {
        return Err(FtcError::malformed(
            WHAT,
            format!("unexpected '{}' in duration", bytes.escape_ascii()),
        ));
    }
    parse_u64(cursor.slice(digits), WHAT)
}

/// `<N> day` / `<N> days`, if that is what the clause is.
fn day_count(bytes: &[u8]) -> Option<u64> {
    let mut cursor = Cursor::new(bytes);
    cursor.skip_while(is_blank);
    let digits = cursor.scan_while(is_digit);
    cursor.skip_while(is_blank);
    let word = cursor.scan_while(is_letter);
    cursor.skip_while(is_blank);

    let unit = cursor.slice(word);
    if !cursor.at_end() || (unit != b"day" && unit != b"days") {
        return None;
    }
    parse_u64(cursor.slice(digits), WHAT).ok()
}

/// Scan one clause, leaving the cursor on the byte that ended it.
fn scan_clause(cursor: &mut Cursor<'_>) -> Result<Clause> {
    let start = cursor.pos();
    let mut colon = None;
    let mut scanned = 0;

    loop {
        match cursor.peek() {
            Some(b'm') => {
                let field = cursor.slice(Span {
                    start,
                    end: cursor.pos(),
                });
                return padded_number(field).map(Clause::Minutes);
            }
            Some(b',') | None => break,
            Some(_) if scanned >= FIELD_CAP => break,
            Some(b':') => colon = Some(cursor.pos()),
            Some(_) => {}
        }
        cursor.bump();
        scanned += 1;
    }

    let field = Span {
        start,
        end: cursor.pos(),
    };

    if let Some(days) = day_count(cursor.slice(field)) {
        return Ok(Clause::Days(days));
    }

    let colon = colon.ok_or_else(|| {
        FtcError::malformed(
            WHAT,
            format!(
                "expected 'H:MM' or 'N min', found '{}'",
                cursor.slice(field).escape_ascii()
            ),
        )
    })?;

    let hours = padded_number(cursor.slice(Span { start, end: colon }))?;
    let minutes = padded_number(cursor.slice(Span {
        start: colon + 1,
        end: field.end,
    }))?;
    Ok(Clause::HoursMinutes(hours, minutes))
}

pub fn parse_uptime(content: &[u8]) -> Result<Uptime> {
    let mut cursor = Cursor::new(content);
    if !cursor.seek_past(b"up") {
        return Err(FtcError::malformed(WHAT, "no 'up' in report"));
    }

    let mut uptime = Uptime::default();
    loop {
        cursor.skip_while(is_blank);
        match scan_clause(&mut cursor)? {
            Clause::Days(days) => {
                uptime.days = days;
                if !cursor.eat(b',') {
                    return Err(FtcError::malformed(WHAT, "report ends after day count"));
                }
            }
            Clause::Minutes(minutes) => {
                uptime.minutes = minutes;
                return Ok(uptime);
            }
            Clause::HoursMinutes(hours, minutes) => {
                uptime.hours = Some(hours);
                uptime.minutes = minutes;
                return Ok(uptime);
            }
        }
    }
}

pub fn fetch(reader: &dyn SourceReader, sources: &Sources) -> Result<Uptime> {
    let report = reader.run_command(&sources.uptime_command)?;
    parse_uptime(report.as_bytes())
}
