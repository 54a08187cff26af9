pub mod config;
pub mod errors;

pub use config::{ConfigError, GolexConfig, OutputFormat};
pub use errors::{Diagnostic, DiagnosticBag, Severity};
