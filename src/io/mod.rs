//! Command-line surface, configuration, progress, and error types

/// Command-line parsing and the run driver
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for generation and encoding
pub mod error;
/// Carve progress reporting
pub mod progress;
