use std::cell::RefCell;
use std::io;

use gloo::net::http::Request;
use serde::Serialize;
use shared::DashboardConfig;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen_futures::spawn_local;

thread_local! {
    static REMOTE_ENDPOINT: RefCell<Option<String>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn from_tracing(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

/// Browser console logger, optionally mirroring lines to the API's log sink
pub struct Logger;

impl Logger {
    /// Sets up remote forwarding and routes `tracing` events from the
    /// shared crate through this logger.
    pub fn init(config: &DashboardConfig) {
        let endpoint = config
            .remote_logging
            .then(|| config.endpoint("/api/logs"));
        REMOTE_ENDPOINT.with(|slot| *slot.borrow_mut() = endpoint);

        let max_level = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        // No clock on wasm32-unknown-unknown, so no timestamps
        let installed = tracing_subscriber::fmt()
            .with_writer(TracingWriter)
            .with_max_level(max_level)
            .with_ansi(false)
            .with_level(false)
            .with_target(false)
            .without_time()
            .try_init();
        if let Err(e) = installed {
            Self::warn_with_component("logger", &format!("tracing already initialised: {}", e));
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    fn log(level: Level, message: &str, component: &str) {
        let line = format_line(level, component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }

        let Some(endpoint) = REMOTE_ENDPOINT.with(|slot| slot.borrow().clone()) else {
            return;
        };
        let request = LogRequest {
            level: level.as_str().to_string(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };

        // Fire and forget; a failing log sink must not produce more logs
        spawn_local(async move {
            if let Ok(request) = Request::post(&endpoint).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}

/// `MakeWriter` handing each formatted `tracing` event to [`Logger`],
/// with the event's target as the component.
#[derive(Debug, Clone, Copy)]
struct TracingWriter;

struct TracingLine {
    level: Level,
    component: String,
    buffer: Vec<u8>,
}

impl io::Write for TracingLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for TracingLine {
    fn drop(&mut self) {
        if let Some(message) = take_line(&mut self.buffer) {
            Logger::log(self.level, &message, &self.component);
        }
    }
}

impl<'a> MakeWriter<'a> for TracingWriter {
    type Writer = TracingLine;

    fn make_writer(&'a self) -> Self::Writer {
        TracingLine {
            level: Level::Info,
            component: "tracing".to_string(),
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        TracingLine {
            level: Level::from_tracing(meta.level()),
            component: meta.target().to_string(),
            buffer: Vec::new(),
        }
    }
}

fn take_line(buffer: &mut Vec<u8>) -> Option<String> {
    let line = String::from_utf8_lossy(buffer).trim_end().to_string();
    buffer.clear();
    (!line.is_empty()).then_some(line)
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level.as_str().to_uppercase(), component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "auth-form", "sign in rejected"),
            "[WARN] auth-form: sign in rejected"
        );
    }

    #[test]
    fn test_tracing_levels_map_to_console_levels() {
        assert_eq!(Level::from_tracing(&tracing::Level::ERROR), Level::Error);
        assert_eq!(Level::from_tracing(&tracing::Level::WARN), Level::Warn);
        assert_eq!(Level::from_tracing(&tracing::Level::INFO), Level::Info);
        assert_eq!(Level::from_tracing(&tracing::Level::TRACE), Level::Debug);
    }

    #[test]
    fn test_tracing_line_is_trimmed_and_cleared() {
        let mut buffer = b"submitting auth form mode=sign-up\n".to_vec();
        assert_eq!(
            take_line(&mut buffer).as_deref(),
            Some("submitting auth form mode=sign-up")
        );
        assert!(buffer.is_empty());
        assert_eq!(take_line(&mut buffer), None);
    }

    #[test]
    fn test_log_request_shape() {
        let request = LogRequest {
            level: Level::Error.as_str().to_string(),
            message: "boom".to_string(),
            component: Some("account-linker".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["level"], "error");
        assert_eq!(json["component"], "account-linker");
    }
}
