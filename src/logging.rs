use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_NAME: &str = "jotpad.log";
const DEFAULT_FILTER: &str = "jotpad=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    status_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Lines for the status bar, formatted as `LEVEL message fields`.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.status_rx.take()
    }
}

/// Buffers one formatted event and hands it to the status bar on drop.
struct StatusLineWriter {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl Write for StatusLineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StatusLineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim();
        if !line.is_empty() {
            let _ = self.tx.send(line.to_string());
        }
    }
}

#[derive(Clone)]
struct StatusMakeWriter {
    tx: Sender<String>,
}

impl<'a> MakeWriter<'a> for StatusMakeWriter {
    type Writer = StatusLineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        StatusLineWriter {
            buf: Vec::with_capacity(128),
            tx: self.tx.clone(),
        }
    }
}

/// Fall back to the temp dir when the per-user data dir is unavailable.
fn resolve_log_dir() -> io::Result<PathBuf> {
    jotpad::kernel::services::adapters::ensure_log_dir().or_else(|_| {
        let dir = std::env::temp_dir().join("jotpad").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
}

/// Install the global subscriber: everything that passes `RUST_LOG` goes to
/// the daily log file, WARN and above also go to the status bar channel.
/// `None` when logging could not be set up; the editor still runs.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let (status_tx, status_rx) = mpsc::channel::<String>();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false);
    let status_layer = tracing_subscriber::fmt::layer()
        .with_writer(StatusMakeWriter { tx: status_tx })
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::WARN);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(status_layer);

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        status_rx: Some(status_rx),
    })
}
