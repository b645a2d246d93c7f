use derive_more::Display;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[repr(u8)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl LogLevel {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Emitting layer plus the type or subsystem inside it
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// One log line. `metadata` carries a JSON payload such as the gesture
/// sample that triggered the message.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries. Level filtering happens before an entry is built,
/// see [`enabled`].
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

static LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static TIME_PROVIDER: OnceCell<Box<dyn TimeProvider>> = OnceCell::new();
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Trace as u8);

/// Install the process logger. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the clock used to stamp entries. Only the first call wins.
pub fn init_time_provider(provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(provider);
}

/// Entries below `level` are dropped before their message is formatted.
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn max_level() -> LogLevel {
    LogLevel::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

/// Whether an entry at `level` would reach an installed logger.
pub fn enabled(level: LogLevel) -> bool {
    LOGGER.get().is_some() && level >= max_level()
}

pub fn logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn time_provider() -> &'static dyn TimeProvider {
    TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&TickCounter)
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter used until a real clock is installed
struct TickCounter;

impl TimeProvider for TickCounter {
    fn current_timestamp(&self) -> u64 {
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::domain::logging::enabled($level) {
            $crate::domain::logging::logger().log($crate::domain::logging::LogEntry::new(
                $level,
                $component,
                format!($($arg)*),
            ));
        }
    };
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__log_at!($crate::domain::logging::LogLevel::Trace, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__log_at!($crate::domain::logging::LogLevel::Debug, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::domain::logging::LogLevel::Info, $component, $($arg)*);
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::domain::logging::LogLevel::Warn, $component, $($arg)*);
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::domain::logging::LogLevel::Error, $component, $($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Info.to_string(), " INFO");
        assert_eq!(LogLevel::from_u8(LogLevel::Warn as u8), LogLevel::Warn);
    }

    #[test]
    fn component_display_carries_layer_prefix() {
        assert_eq!(LogComponent::Domain("Zoom").to_string(), "DOM:Zoom");
        assert_eq!(LogComponent::Application("Pinch").to_string(), "APP:Pinch");
    }

    #[test]
    fn entries_without_installed_clock_still_get_timestamps() {
        let a = LogEntry::new(LogLevel::Debug, LogComponent::Domain("Zoom"), "a");
        let b = LogEntry::new(LogLevel::Debug, LogComponent::Domain("Zoom"), "b").with_metadata("{}");
        assert!(b.timestamp >= a.timestamp);
        assert_eq!(b.metadata.as_deref(), Some("{}"));
    }

    #[test]
    fn nothing_is_enabled_without_a_logger() {
        assert!(!enabled(LogLevel::Error));
    }
}
