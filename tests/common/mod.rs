// Shared log capture for integration tests.
#![allow(dead_code)]

use std::sync::{Mutex, OnceLock};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Captured {
    pub thread: ThreadId,
    pub level: Level,
    pub message: String,
}

pub struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = Captured {
            thread: thread::current().id(),
            level: record.level(),
            message: record.args().to_string(),
        };
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(captured);
    }

    fn flush(&self) {}
}

impl CaptureLogger {
    /// Messages logged from `thread`, in order.
    pub fn lines_for(&self, thread: ThreadId) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|r| r.thread == thread)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Messages logged from the current thread, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines_for(thread::current().id())
    }
}

/// Installs the capture logger once per test binary. Must run before anything
/// that would install `env_logger`.
pub fn install() -> &'static CaptureLogger {
    static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger {
            records: Mutex::new(Vec::new()),
        }));
        log::set_logger(logger).expect("capture logger installed first");
        log::set_max_level(LevelFilter::Trace);
        logger
    })
}

/// Number of lines equal to `expected`.
pub fn count(lines: &[String], expected: &str) -> usize {
    lines.iter().filter(|l| l.as_str() == expected).count()
}

/// Value after `"<prefix> = "` on the first matching line.
pub fn field<'a>(lines: &'a [String], prefix: &str) -> Option<&'a str> {
    let needle = format!("{prefix} = ");
    lines
        .iter()
        .find_map(|l| l.strip_prefix(needle.as_str()))
}
