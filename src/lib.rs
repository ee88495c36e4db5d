//! # timeuuid
//!
//! A Rust implementation of a time-based (RFC 4122 version 1) UUID generator.
//!
//! Generates 128-bit identifiers built from a 60-bit timestamp, a 14-bit
//! clock sequence, and a 48-bit node identifier that are:
//! - 🔒 Thread-safe
//! - 🕐 Tolerant of coarse and non-monotonic clocks
//! - 💾 Stable across restarts via a pluggable node-id store
//! - 🔄 Unique even when minted within the same 100 ns tick
//!
//! ```no_run
//! use timeuuid::{MemoryRepository, UuidGenerator};
//!
//! let generator = UuidGenerator::new(MemoryRepository::new());
//! let uuid = generator.generate().unwrap();
//! println!("{uuid}"); // e.g. "81b59c10-8236-11ee-8001-a3f0e276c2d1"
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod generator;
mod repository;
mod uuid;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ConfigError, GeneratorConfig, GeneratorConfigBuilder};
pub use error::{RepositoryError, UuidError};
pub use generator::UuidGenerator;
pub use repository::{FileRepository, MemoryRepository, UuidRepository};
pub use uuid::Uuid;
