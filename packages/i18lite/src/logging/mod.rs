// Logging
//
// Instance-level diagnostics: missing keys at debug level, degraded
// rendering at warn level.

mod console_logger;
mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, MemoryLogger, NullLogger};
