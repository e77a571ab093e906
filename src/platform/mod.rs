// Platform access: pseudo-files and external commands

pub mod source;

// Re-exports for cleaner imports
pub use source::{RawBuffer, SourceReader, SystemReader, IO_BUFFER_SIZE};
