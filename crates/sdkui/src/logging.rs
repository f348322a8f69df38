#[cfg(debug_assertions)]
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use simplelog::{CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use sdkui_platform::AppPaths;

/// Append-only log file that reopens itself when the file is removed while
/// the application runs.
struct ReopeningFile {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl ReopeningFile {
    fn open(path: PathBuf) -> io::Result<Self> {
        let file = append_to(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    fn reopen_if_missing(&self) -> io::Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = append_to(&self.path)?;
        *self.file.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
        Ok(())
    }
}

fn append_to(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for ReopeningFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.reopen_if_missing()?;
        match self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            Some(file) => file.write(buf),
            None => Err(io::Error::other("log file not available")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Drop the older half of the log, cutting at a line boundary.
fn trim_to_recent_half(log_path: &Path, max_log_size: u64) {
    let Ok(metadata) = std::fs::metadata(log_path) else {
        return;
    };
    if metadata.len() <= max_log_size {
        return;
    }
    let Ok(contents) = std::fs::read(log_path) else {
        return;
    };

    let half = contents.len() / 2;
    let keep_from = contents[half..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(half, |pos| half + pos + 1);
    let _ = std::fs::write(log_path, &contents[keep_from..]);
}

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("sdkui")
        .build()
}

pub fn init_logging(debug_enabled: bool, max_log_size: u64) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    #[cfg(debug_assertions)]
    loggers.push(TermLogger::new(
        LevelFilter::Debug,
        log_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    let log_path = AppPaths::new().ok().and_then(|paths| {
        paths.ensure_dirs().ok()?;
        Some(paths.log_file())
    });

    if let Some(path) = &log_path {
        trim_to_recent_half(path, max_log_size);
        if let Ok(file) = ReopeningFile::open(path.clone()) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, log_config(), file));
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }

    set_debug_logging(debug_enabled);

    if debug_enabled && let Some(path) = log_path {
        log::info!("Debug logging enabled, writing to {}", path.display());
    }
}

/// Warnings and errors are always recorded; debug logging adds the rest.
pub fn set_debug_logging(enabled: bool) {
    if enabled {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::{ReopeningFile, set_debug_logging, trim_to_recent_half};

    #[test]
    fn log_file_is_recreated_after_deletion() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("sdkui.log");
        let mut writer = ReopeningFile::open(log_path.clone()).expect("log file should open");

        writer
            .write_all(b"before\n")
            .expect("initial write should succeed");
        std::fs::remove_file(&log_path).expect("log file should be removable");
        writer
            .write_all(b"after\n")
            .expect("write should recreate the file");

        let contents = std::fs::read_to_string(&log_path).expect("log file should be readable");
        assert_eq!(contents, "after\n");
    }

    #[test]
    fn oversized_log_keeps_whole_recent_lines() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("sdkui.log");
        std::fs::write(&log_path, "aaaa\nbbbb\ncccc\ndddd\n").expect("log should be written");

        trim_to_recent_half(&log_path, 8);

        let trimmed = std::fs::read_to_string(&log_path).expect("log should be readable");
        assert_eq!(trimmed, "dddd\n");
    }

    #[test]
    fn small_log_is_left_alone() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("sdkui.log");
        std::fs::write(&log_path, "one\ntwo\n").expect("log should be written");

        trim_to_recent_half(&log_path, 1024);

        let contents = std::fs::read_to_string(&log_path).expect("log should be readable");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn errors_are_logged_with_debug_logging_off() {
        set_debug_logging(true);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        set_debug_logging(false);
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        assert!(log::Level::Error <= log::max_level());
        assert!(log::Level::Info > log::max_level());
    }
}
