// Core fetch logic: configuration, scanning and fact parsers

pub mod config;
pub mod facts;
pub mod scanner;

// Re-exports for cleaner imports
pub use config::{Config, Fact, PackageManager, Sources};
pub use facts::{collect, ParsedFact};
