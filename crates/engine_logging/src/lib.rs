#![deny(missing_docs)]
//! Shared logging utilities for the SEO analysis workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! the file logger used by the terminal front-end and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};
use thiserror::Error;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Failure to install the file logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("could not create log file {path:?}: {source}")]
    CreateFile {
        /// Requested log file location.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A global logger was already installed.
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Installs a logger that writes to `path`, truncating any previous content.
///
/// The terminal belongs to the UI while the app runs, so file output is the
/// only destination the app uses.
pub fn initialize_file(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let file = File::create(path).map_err(|source| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    CombinedLogger::init(vec![WriteLogger::new(level, build_config(), file)])
        .map_err(|_| LoggingError::AlreadyInitialized)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
