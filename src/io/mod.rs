//! Input/output operations and error handling

/// Command-line interface
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG board previews
pub mod image;
/// Level asset serialization
pub mod level;
/// Text board previews
pub mod preview;
/// Progress display
pub mod progress;
