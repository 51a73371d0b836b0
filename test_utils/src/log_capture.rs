//! In-memory `log` backend for asserting on emitted diagnostics.
//!
//! Only one logger can be installed per process, so tests using this should
//! live in their own integration test binary and run under `#[serial]`.

use std::sync::{Mutex, OnceLock, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Captured record: level and formatted message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    pub level: Level,
    pub message: String,
}

/// Logger that appends every record to a shared buffer.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl CaptureLogger {
    /// Removes and returns everything captured so far.
    pub fn take(&self) -> Vec<Captured> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *records)
    }

    /// Records captured at exactly `level`, draining the buffer.
    pub fn take_at(&self, level: Level) -> Vec<Captured> {
        self.take()
            .into_iter()
            .filter(|record| record.level == level)
            .collect()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = Captured {
            level: record.level(),
            message: record.args().to_string(),
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }

    fn flush(&self) {}
}

/// Installs the process-wide capture logger on first call and returns it.
///
/// Later calls return the same logger. The buffer is cleared on every call so
/// each test starts empty.
///
/// # Panics
/// Panics if a different logger was installed first.
pub fn capture_logs() -> &'static CaptureLogger {
    static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
    let logger = *LOGGER.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::default());
        log::set_logger(logger).expect("another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
        logger
    });
    logger.take();
    logger
}
