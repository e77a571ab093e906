use crate::core::config::{Config, Fact};
use crate::core::facts::{self, ParsedFact};
use crate::error::FtcError;
use crate::platform::{SourceReader, SystemReader};
use crate::ui::format_fact;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Write};

/// Log why a fact is left out of the output.
fn report_skip(fact: Fact, error: &FtcError) {
    match error {
        FtcError::MalformedInput { .. } => warn!("Skipping {}: {}", fact, error),
        // A missing pacman log just means pacman never ran here.
        _ if fact == Fact::InstallDate => debug!("Skipping {}: {}", fact, error),
        _ => info!("Skipping {}: {}", fact, error),
    }
}

/// Output lines for every configured fact, in order.
///
/// Temperature always yields a line, falling back to "unavailable"; every
/// other fact is dropped when its source is missing or unreadable.
pub fn render(config: &Config, reader: &dyn SourceReader) -> Vec<String> {
    let mut lines = Vec::new();

    for &fact in &config.facts {
        match facts::collect(fact, &config.sources, reader) {
            Ok(parsed) => lines.extend(format_fact(&parsed)),
            Err(e) if fact == Fact::Temperature => {
                if e.is_malformed() {
                    warn!("Temperature reading unusable: {}", e);
                } else {
                    info!("Temperature unavailable: {}", e);
                }
                lines.extend(format_fact(&ParsedFact::Temperature(None)));
            }
            Err(e) => report_skip(fact, &e),
        }
    }

    lines
}

/// Write the rendered facts framed by blank lines.
pub fn run<W: Write>(config: &Config, reader: &dyn SourceReader, out: &mut W) -> Result<()> {
    writeln!(out)?;
    for line in render(config, reader) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

pub fn execute(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(config, &SystemReader::new(), &mut out)
}
