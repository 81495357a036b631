//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"

pub mod error;

use std::{env, fs::create_dir_all, path::Path};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Initializes the tracing subscriber from environment variables.
///
/// In "file" mode, log lines go to a daily-rolling `rule-evaluator.log`
/// under `LOG_DATA_DIR`; otherwise they go to stdout. The returned guard
/// must be held for the lifetime of the process so buffered file output is
/// flushed on shutdown.
pub fn setup_logging() -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, std::io::Error>
{
	let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
	let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

	// RUST_LOG takes precedence over LOG_LEVEL when set
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(log_level.clone()));

	if log_mode.eq_ignore_ascii_case("file") {
		let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "logs/".to_string());
		if !Path::new(&log_dir).exists() {
			create_dir_all(&log_dir)?;
		}

		let file_appender = tracing_appender::rolling::daily(&log_dir, "rule-evaluator.log");
		let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().with_writer(non_blocking).with_ansi(false))
			.init();

		tracing::info!(log_dir = %log_dir, log_level = %log_level, "Logging to rolling file");
		Ok(Some(guard))
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer())
			.init();

		tracing::info!(log_level = %log_level, "Logging to stdout");
		Ok(None)
	}
}
