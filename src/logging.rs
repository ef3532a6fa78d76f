//! Diagnostic logging.
//!
//! Operations log through `tracing`. `init` installs a subscriber whose
//! writer forwards each formatted line to the platform log channel: logcat
//! on Android, stderr everywhere else. Lines carry the configured tag.

use std::ffi::{CStr, CString};
use std::io::{self, Write};
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::BridgeConfig;

static INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call has any effect.
///
/// If the host process already installed a subscriber, that one is kept.
pub fn init(config: &BridgeConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(LogcatMakeWriter::new(&config.log_tag))
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    });
}

/// Installs the subscriber with the default configuration.
///
/// Every C ABI entry calls this, so C callers get log output without going
/// through `JNI_OnLoad`.
pub fn init_default() {
    if !INIT.is_completed() {
        init(&BridgeConfig::default());
    }
}

/// Android log priorities (`android/log.h`).
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Priority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl Priority {
    #[cfg_attr(target_os = "android", allow(dead_code))]
    fn letter(self) -> char {
        match self {
            Priority::Verbose => 'V',
            Priority::Debug => 'D',
            Priority::Info => 'I',
            Priority::Warn => 'W',
            Priority::Error => 'E',
        }
    }
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => Priority::Verbose,
            Level::DEBUG => Priority::Debug,
            Level::INFO => Priority::Info,
            Level::WARN => Priority::Warn,
            Level::ERROR => Priority::Error,
        }
    }
}

pub struct LogcatMakeWriter {
    tag: CString,
}

impl LogcatMakeWriter {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: to_cstring(tag),
        }
    }
}

impl<'a> MakeWriter<'a> for LogcatMakeWriter {
    type Writer = LogcatWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogcatWriter::new(&self.tag, Priority::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LogcatWriter::new(&self.tag, Priority::from(*meta.level()))
    }
}

/// Buffers one formatted event and emits it line by line on flush or drop.
pub struct LogcatWriter<'a> {
    tag: &'a CStr,
    priority: Priority,
    buf: Vec<u8>,
}

impl<'a> LogcatWriter<'a> {
    fn new(tag: &'a CStr, priority: Priority) -> Self {
        Self {
            tag,
            priority,
            buf: Vec::new(),
        }
    }

    fn drain_lines(&mut self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        text.lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl Write for LogcatWriter<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for line in self.drain_lines() {
            emit(self.priority, self.tag, &line);
        }
        Ok(())
    }
}

impl Drop for LogcatWriter<'_> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn to_cstring(text: &str) -> CString {
    // Cannot fail once interior NULs are gone.
    CString::new(text.replace('\0', "\\0")).unwrap_or_default()
}

#[cfg(target_os = "android")]
mod sys {
    use libc::{c_char, c_int};

    #[link(name = "log")]
    extern "C" {
        pub fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
    }
}

#[cfg(target_os = "android")]
fn emit(priority: Priority, tag: &CStr, line: &str) {
    let text = to_cstring(line);
    // SAFETY: both pointers are valid NUL-terminated strings for the call.
    unsafe {
        sys::__android_log_write(priority as libc::c_int, tag.as_ptr(), text.as_ptr());
    }
}

#[cfg(not(target_os = "android"))]
fn emit(priority: Priority, tag: &CStr, line: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{}/{}: {}",
        priority.letter(),
        tag.to_string_lossy(),
        line
    );
}
