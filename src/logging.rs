//! File-based structured logging via `tracing`.
//!
//! The terminal is owned by the UI, so log output goes to
//! `<data dir>/contact-form/contact-form.log`. Field values are never logged;
//! events carry field names and lengths only.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive (e.g. `debug`).
pub const FILTER_ENV: &str = "CONTACT_FORM_LOG";
/// Environment variable overriding the log directory.
pub const DIR_ENV: &str = "CONTACT_FORM_LOG_DIR";
/// File name of the log inside the log directory.
pub const LOG_FILE_NAME: &str = "contact-form.log";

const DEFAULT_FILTER: &str = "info";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// An I/O error occurred while creating the log directory or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialized")]
    AlreadyInitialized,
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Directory that receives [`LOG_FILE_NAME`].
    pub dir: PathBuf,
}

impl LogConfig {
    /// Reads [`FILTER_ENV`] and [`DIR_ENV`], falling back to `info` and the
    /// platform's local data directory, or the temp directory when the
    /// platform has none (e.g. no `HOME`).
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(FILTER_ENV).ok(),
            std::env::var_os(DIR_ENV).map(PathBuf::from),
            dirs::data_local_dir(),
        )
    }

    fn from_vars(
        filter: Option<String>,
        dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let dir = dir.unwrap_or_else(|| {
            data_dir
                .unwrap_or_else(std::env::temp_dir)
                .join("contact-form")
        });
        Self { filter, dir }
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE_NAME)
    }
}

/// Creates `dir` if needed and opens the log file for appending.
pub fn open_log_file(dir: &Path) -> Result<File, LoggingError> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))?;
    Ok(file)
}

/// Installs the global subscriber described by `config`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let file = open_log_file(&config.dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
