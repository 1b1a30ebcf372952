use std::fmt::Arguments;
use std::fs::{OpenOptions, create_dir_all, metadata, rename};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Rotate once the live log reaches this size (5 MiB).
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Warn  => "\x1b[33m", // Yellow
            LogLevel::Info  => "\x1b[36m", // Cyan
            LogLevel::Debug => "\x1b[90m", // Gray
        }
    }

    fn short(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn  => "WRN",
            LogLevel::Info  => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: atty::is(atty::Stream::Stdout),
    })
});

pub fn set_verbose(enabled: bool) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = if enabled { LogLevel::Debug } else { LogLevel::Info };
}

pub fn set_log_level(level: LogLevel) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = level;
}

/// Core logging function; prefer the `dinfo!`/`ddebug!` macros.
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let config = GLOBAL_CONFIG.lock().unwrap();

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.short(), prefix, args);

    let console_line = if config.use_colors {
        format!(
            "{}●{} [{}][{}] {}",
            level.color(),
            RESET_COLOR,
            timestamp,
            prefix,
            args
        )
    } else {
        file_line.clone()
    };

    if let Err(e) = write_line_to_log(&file_line) {
        eprintln!("Failed to write log: {}", e);
    }

    // Console is opt-in via verbose mode; errors always surface.
    if config.level == LogLevel::Debug || level == LogLevel::Error {
        match level {
            LogLevel::Error => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

#[macro_export]
macro_rules! dlog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! dinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::dlog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! dwarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::dlog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! derror {
    ($prefix:expr, $($arg:tt)*) => { $crate::dlog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! ddebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::dlog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

/// Log file path under the user cache dir.
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("dwell");
    if !path.exists() {
        let _ = create_dir_all(&path);
    }
    path.push("dwell.log");
    path
}

/// Keep one rotated backup rather than truncating outright.
fn rotate_log_if_needed(path: &PathBuf) {
    if let Ok(meta) = metadata(path) {
        if meta.len() >= MAX_LOG_SIZE {
            let backup = PathBuf::from(format!("{}.1", path.display()));
            let _ = rename(path, backup);
        }
    }
}

fn write_line_to_log(line: &str) -> std::io::Result<()> {
    let path = log_path();
    rotate_log_if_needed(&path);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}
