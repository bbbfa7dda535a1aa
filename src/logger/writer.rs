//! Process-wide log sinks
//!
//! Info and access lines go to stdout or `logging.access_log_file`,
//! errors and warnings to stderr or `logging.error_log_file`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

static SINKS: OnceLock<Sinks> = OnceLock::new();

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Sink {
    fn file_or(path: Option<&str>, console: Self) -> io::Result<Self> {
        path.map_or(Ok(console), |p| Ok(Self::File(Mutex::new(append_to(p)?))))
    }

    fn line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                // Nowhere left to report a failed log write
                let _ = writeln!(file, "{message}");
            }
        }
    }
}

pub struct Sinks {
    info: Sink,
    error: Sink,
}

impl Sinks {
    fn open(info_path: Option<&str>, error_path: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            info: Sink::file_or(info_path, Sink::Stdout)?,
            error: Sink::file_or(error_path, Sink::Stderr)?,
        })
    }

    pub fn info(&self, message: &str) {
        self.info.line(message);
    }

    pub fn error(&self, message: &str) {
        self.error.line(message);
    }
}

fn append_to(path: &str) -> io::Result<File> {
    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global sinks; fails if a log file cannot be opened or
/// if called twice.
pub fn init(info_path: Option<&str>, error_path: Option<&str>) -> io::Result<()> {
    SINKS
        .set(Sinks::open(info_path, error_path)?)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialized"))
}

/// The installed sinks; `None` before `init()` (as in unit tests)
pub fn get() -> Option<&'static Sinks> {
    SINKS.get()
}
