//! Default crane logger

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{stderr, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

/// Public global variables to access logger and logfile
pub static CRANE_LOGGER: OnceCell<CraneLogger> = OnceCell::new();
pub static LOG_FILE: OnceCell<Option<File>> = OnceCell::new();

/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "CRANE_LOG_LEVEL";

/// If in debug mode, default level is debug to get maximum logging
#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// If not in debug mode, default level is warn to get important logs
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const LOG_FORMAT_TEXT: &str = "text";
const LOG_FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            unknown => bail!("unknown log format: {}", unknown),
        }
    }
}

fn level_filter(debug: bool) -> LevelFilter {
    match env::var(LOG_LEVEL_ENV) {
        Ok(level) => LevelFilter::from_str(&level).unwrap_or(DEFAULT_LOG_LEVEL),
        Err(_) if debug => LevelFilter::Debug,
        Err(_) => DEFAULT_LOG_LEVEL,
    }
}

/// Initialize the logger, must be called before accessing the logger.
/// Only the first call has an effect.
pub fn init(debug: bool, log_file: Option<PathBuf>, log_format: Option<String>) -> Result<()> {
    let level_filter = level_filter(debug);
    let format = match log_format.as_deref() {
        None => LogFormat::Text,
        Some(format) => format.parse()?,
    };

    let file = log_file
        .as_ref()
        .map(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))
        })
        .transpose()?;
    if LOG_FILE.set(file).is_err() {
        return Ok(());
    }

    let logger = CRANE_LOGGER.get_or_init(|| CraneLogger::new(level_filter.to_level(), format));
    log::set_logger(logger)
        .map(|()| log::set_max_level(level_filter))
        .context("set logger failed")?;
    Ok(())
}

pub struct CraneLogger {
    /// Indicates level up to which logs are to be printed
    level: Option<log::Level>,
    format: LogFormat,
}

impl CraneLogger {
    pub fn new(level: Option<log::Level>, format: LogFormat) -> Self {
        Self { level, format }
    }

    fn format(&self, record: &Record) -> String {
        let now = chrono::Local::now().to_rfc3339();
        match self.format {
            LogFormat::Json => serde_json::json!({
                "level": record.level().to_string(),
                "time": now,
                "file": record.file(),
                "line": record.line(),
                "msg": record.args().to_string(),
            })
            .to_string(),
            LogFormat::Text => match (record.file(), record.line()) {
                (Some(file), Some(line)) => format!(
                    "[{} {}:{}] {} {}",
                    record.level(),
                    file,
                    line,
                    now,
                    record.args()
                ),
                (_, _) => format!("[{}] {} {}", record.level(), now, record.args()),
            },
        }
    }
}

impl Log for CraneLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.level {
            Some(level) => metadata.level() <= level,
            None => false,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let log_msg = self.format(record);
        // if log file is set, write to it, else write to stderr
        if let Some(mut log_file) = LOG_FILE.get().and_then(Option::as_ref) {
            let _ = writeln!(log_file, "{}", log_msg);
        } else {
            let _ = writeln!(stderr(), "{}", log_msg);
        }
    }

    fn flush(&self) {
        if let Some(mut log_file) = LOG_FILE.get().and_then(Option::as_ref) {
            let _ = log_file.flush();
        } else {
            let _ = stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    #[serial]
    fn test_level_filter() {
        env::remove_var(LOG_LEVEL_ENV);
        assert_eq!(level_filter(false), DEFAULT_LOG_LEVEL);
        assert_eq!(level_filter(true), LevelFilter::Debug);

        env::set_var(LOG_LEVEL_ENV, "error");
        assert_eq!(level_filter(true), LevelFilter::Error);
        env::set_var(LOG_LEVEL_ENV, "nonsense");
        assert_eq!(level_filter(false), DEFAULT_LOG_LEVEL);
        env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn test_text_format() {
        let logger = CraneLogger::new(Some(Level::Info), LogFormat::Text);
        let line = logger.format(
            &Record::builder()
                .args(format_args!("pulled {}", "nginx"))
                .level(Level::Warn)
                .file(Some("src/group.rs"))
                .line(Some(42))
                .build(),
        );
        assert!(line.starts_with("[WARN src/group.rs:42] "), "{}", line);
        assert!(line.ends_with(" pulled nginx"), "{}", line);
    }

    #[test]
    fn test_json_format() -> anyhow::Result<()> {
        let logger = CraneLogger::new(Some(Level::Info), LogFormat::Json);
        let line = logger.format(
            &Record::builder()
                .args(format_args!("pulled {}", "nginx"))
                .level(Level::Info)
                .build(),
        );
        let value: serde_json::Value = serde_json::from_str(&line)?;
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["msg"], "pulled nginx");
        assert!(value["file"].is_null());
        Ok(())
    }

    #[test]
    fn test_enabled() {
        let logger = CraneLogger::new(Some(Level::Warn), LogFormat::Text);
        assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        let silent = CraneLogger::new(None, LogFormat::Text);
        assert!(!silent.enabled(&Metadata::builder().level(Level::Error).build()));
    }
}
