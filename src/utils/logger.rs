// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::OnceLock;

static MAX_LEVEL: OnceLock<LevelFilter> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs the console logger at `level`
///
/// Only one logger can be installed per process; a second call returns
/// `SetLoggerError`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER)?;
  let _ = MAX_LEVEL.set(level);
  log::set_max_level(level);
  Ok(())
}

/// Tag written in front of every line, e.g. "[WARN ]"
fn level_tag(level: Level) -> &'static str {
  match level {
    Level::Error => "[ERROR]",
    Level::Warn => "[WARN ]",
    Level::Info => "[INFO ]",
    Level::Debug => "[DEBUG]",
    Level::Trace => "[TRACE]",
  }
}

/// One log line: "[INFO ] coordgeom::config: Config loaded from ..."
fn format_line(record: &Record) -> String {
  format!("{} {}: {}\n", level_tag(record.level()), record.target(), record.args())
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= *MAX_LEVEL.get().unwrap_or(&LevelFilter::Info)
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let line = format_line(record);
      // stderr is unbuffered; a failed write has nowhere to be reported
      let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
