// tracing setup writing formatted events to the browser console

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Buffers one formatted event and hands it to `console.*` when dropped
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        let value = line.into();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

/// MakeWriter routing each event to the console method matching its level
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Install the global subscriber
///
/// `directive` is an EnvFilter string such as "info" or
/// "info,teametric_config_core=debug"; an unparsable directive falls back to "info".
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    // No clock on wasm32-unknown-unknown, and the console has no ANSI support
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(MakeConsoleWriter)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("logging already initialized: {}", e).into());
    }
}
