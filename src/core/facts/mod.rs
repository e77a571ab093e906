//! Field parsers, one per fact.
//!
//! Each parser module exposes a pure `parse_*` function over raw bytes and a
//! `fetch` that reads its source once through a [`SourceReader`] and parses
//! the result. Buffers live only for the duration of that call.

pub mod identity;
pub mod install_date;
pub mod kernel;
pub mod memory;
pub mod packages;
pub mod temperature;
pub mod uptime;

pub use identity::Identity;
pub use memory::{MemInfo, MemoryUsage};
pub use packages::PackageCount;
pub use uptime::Uptime;

use crate::core::config::{Fact, Sources};
use crate::error::Result;
use crate::platform::SourceReader;

/// The value extracted for one fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFact {
    Identity(Identity),
    Kernel { version: String },
    Memory(MemoryUsage),
    Packages(Vec<PackageCount>),
    InstallDate { date: String },
    Uptime(Uptime),
    /// Whole degrees Celsius; `None` when the sensor could not be read.
    Temperature(Option<i64>),
}

/// Read and parse the source behind `fact`.
pub fn collect(fact: Fact, sources: &Sources, reader: &dyn SourceReader) -> Result<ParsedFact> {
    Ok(match fact {
        Fact::Identity => ParsedFact::Identity(identity::fetch(reader, sources)?),
        Fact::Kernel => ParsedFact::Kernel {
            version: kernel::fetch(reader, sources)?,
        },
        Fact::Memory => ParsedFact::Memory(memory::fetch(reader, sources)?),
        Fact::Packages => ParsedFact::Packages(packages::fetch(reader, sources)?),
        Fact::InstallDate => ParsedFact::InstallDate {
            date: install_date::fetch(reader, sources)?,
        },
        Fact::Uptime => ParsedFact::Uptime(uptime::fetch(reader, sources)?),
        Fact::Temperature => ParsedFact::Temperature(Some(temperature::fetch(reader, sources)?)),
    })
}
