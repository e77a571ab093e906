// Command handlers module
pub mod fetch;
pub mod list;
pub mod version;

// Re-exports for cleaner imports
pub use fetch::execute as fetch;
pub use list::execute as list;
pub use version::execute as version;
