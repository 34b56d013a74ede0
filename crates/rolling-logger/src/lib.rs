//! Rolling Logger
//!
//! Routes `log` and `tracing` records into a size-rotated file set in the
//! app's log directory, and keeps the most recent lines in memory so they can
//! be shown in-app. On Android records go to logcat instead.

mod buffer;
mod file;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

pub use buffer::LineBuffer;
pub use file::RollingFile;

/// Rotation and buffer limits
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub max_file_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 200,
        }
    }
}

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

struct Inner {
    file: RollingFile,
    buffer: LineBuffer,
}

/// Shared handle to the log file set; also the subscriber's writer factory
#[derive(Clone)]
pub struct RollingHandle {
    inner: Arc<Mutex<Inner>>,
}

impl RollingHandle {
    pub fn open(dir: &Path, app_name: &str, config: LoggerConfig) -> Result<Self, LoggerError> {
        let mut file = RollingFile::open(dir, app_name, config.max_file_bytes, config.max_files)?;
        let banner = format!(
            "=== {} log opened {} ===\n",
            app_name,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
        file.write_all(banner.as_bytes())?;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                file,
                buffer: LineBuffer::new(config.buffer_lines),
            })),
        })
    }

    /// Most recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.buffer.lines(),
            Err(poisoned) => poisoned.into_inner().buffer.lines(),
        }
    }

    fn writer(&self) -> RollingWriter {
        RollingWriter { inner: self.inner.clone() }
    }
}

pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.file.write_all(buf)?;
        inner.buffer.push_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingHandle {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer()
    }
}

static LOGGER: OnceLock<RollingHandle> = OnceLock::new();

/// Install the global logger writing to `dir` with default limits
pub fn init_logger(dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_with_config(dir, app_name, LoggerConfig::default())
}

pub fn init_with_config(dir: PathBuf, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let handle = RollingHandle::open(&dir, app_name, config)?;

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name.to_string()),
    );

    #[cfg(not(target_os = "android"))]
    tracing_subscriber::fmt()
        .with_writer(handle.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER.set(handle).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::info!("Logging to {}", dir.display());
    Ok(())
}

fn handle() -> Result<&'static RollingHandle, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    let handle = handle()?;
    log::info!("{}", msg);
    mirror(handle, "INFO", msg)
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    let handle = handle()?;
    log::error!("{}", msg);
    mirror(handle, "ERROR", msg)
}

// logcat does not reach the file set, so copy the line there ourselves
#[cfg(target_os = "android")]
fn mirror(handle: &RollingHandle, level: &str, msg: &str) -> Result<(), LoggerError> {
    let line = format!("{} {:>5} {}\n", chrono::Local::now().format("%H:%M:%S%.3f"), level, msg);
    handle.writer().write_all(line.as_bytes())?;
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn mirror(_handle: &RollingHandle, _level: &str, _msg: &str) -> Result<(), LoggerError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writer_feeds_file_and_buffer() {
        let dir = tempdir().unwrap();
        let handle = RollingHandle::open(dir.path(), "wallet", LoggerConfig::default()).unwrap();

        let mut writer = handle.make_writer();
        writer.write_all(b"INFO first\n").unwrap();
        writer.write_all(b"WARN second\n").unwrap();
        writer.flush().unwrap();

        let lines = handle.recent_lines();
        assert_eq!(lines, vec!["INFO first", "WARN second"]);

        let on_disk = std::fs::read_to_string(dir.path().join("wallet.log")).unwrap();
        assert!(on_disk.starts_with("=== wallet log opened"));
        assert!(on_disk.ends_with("INFO first\nWARN second\n"));
    }

    #[test]
    fn test_small_limits_rotate() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig { max_file_bytes: 64, max_files: 2, buffer_lines: 3 };
        let handle = RollingHandle::open(dir.path(), "wallet", config).unwrap();

        let mut writer = handle.make_writer();
        for i in 0..10 {
            writeln!(writer, "line number {:02} padded out", i).unwrap();
        }

        assert!(dir.path().join("wallet.1.log").exists());
        assert!(!dir.path().join("wallet.2.log").exists());
        assert_eq!(handle.recent_lines().len(), 3);
        assert_eq!(handle.recent_lines()[2], "line number 09 padded out");
    }

    #[test]
    fn test_helpers_require_init() {
        // the global logger is never installed in unit tests
        assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
        assert!(matches!(error("x"), Err(LoggerError::NotInitialized)));
    }
}
