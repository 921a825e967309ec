// Public modules
pub mod case;
pub mod error;
pub mod names;
pub mod pad;
pub mod rename;
pub mod words;

// Internal modules - not part of public API
pub(crate) mod engine;
pub(crate) mod transliterate;

// Re-export common types for convenience
pub use error::{Error, Result};
