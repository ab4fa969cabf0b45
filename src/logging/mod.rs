//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "logs/")

use std::{
    env,
    fs::{create_dir_all, OpenOptions},
    path::Path,
};

use chrono::Utc;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};

/// Computes the date-stamped log file path for the given base directory.
pub fn log_file_path(base_dir: &str, date_str: &str) -> String {
    let base_dir = base_dir.trim_end_matches('/');
    format!("{}/fundme-{}.log", base_dir, date_str)
}

/// Sets up logging by reading configuration from environment variables.
///
/// Repeated initialization (e.g., across tests) is harmless; only the first
/// call installs a logger.
pub fn setup_logging() {
    let level = env::var("LOG_LEVEL")
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());

    if mode.eq_ignore_ascii_case("file") {
        let base_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "logs/".to_string());
        let path = log_file_path(&base_dir, &Utc::now().format("%Y-%m-%d").to_string());

        if let Some(parent) = Path::new(&path).parent() {
            create_dir_all(parent).expect("Failed to create log directory");
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .expect("Failed to open log file");

        let _ = WriteLogger::init(level, Config::default(), file);
    } else {
        let _ = SimpleLogger::init(level, Config::default());
    }
}
