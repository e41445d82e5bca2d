//! Debug log bridge for form-pages.
//!
//! Routes every `log::info!()`/`log::debug!()` etc. to a log file in the
//! system temp directory (`/tmp/form_pages_debug.log` on Unix/macOS,
//! `%TEMP%\form_pages_debug.log` on Windows). When `RUST_LOG` is set the
//! records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` on the command line, then `RUST_LOG`,
//! then the `log_level` config key (applied later via [`set_level`]).

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Crates whose chatter is capped at `Warn` regardless of the chosen level.
const NOISY_TARGETS: &[&str] = &["wgpu", "naga", "egui", "egui_wgpu", "egui_winit", "winit"];

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/form_pages_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("form_pages_debug.log")
    }
}

struct LogSink {
    /// Opened on the first record so `Off` never creates the file
    file: Option<File>,
    opened: bool,
    mirror_stderr: bool,
}

impl LogSink {
    fn new(mirror_stderr: bool) -> Self {
        Self {
            file: None,
            opened: false,
            mirror_stderr,
        }
    }

    fn open_file(&mut self) {
        self.opened = true;
        // Silently fall back to no file; the app must still start
        self.file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(
                file,
                "{}\nform-pages debug session started at {}\n{}",
                "=".repeat(80),
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                "=".repeat(80)
            );
        }
    }

    fn write_line(&mut self, line: &str) {
        if !self.opened {
            self.open_file();
        }
        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprintln!("{}", line);
        }
    }
}

struct BridgeLogger {
    sink: Mutex<LogSink>,
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > log::max_level() {
            return false;
        }
        let target = metadata.target();
        let noisy = NOISY_TARGETS
            .iter()
            .any(|prefix| target == *prefix || target.starts_with(&format!("{prefix}::")));
        !noisy || metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}",
            Local::now().format("%H:%M:%S%.6f"),
            record.level(),
            record.target(),
            record.args()
        );
        self.sink.lock().write_line(&line);
    }

    fn flush(&self) {
        if let Some(file) = self.sink.lock().file.as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

/// Parse a `RUST_LOG`-style value. Only a bare level is understood
/// (`info`, `debug`, ...); anything else falls back to `Info`.
pub fn parse_env_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the log bridge.
///
/// `cli_level` comes from `--log-level` and wins over `RUST_LOG`. With
/// neither present logging stays off until [`set_level`] applies the config
/// value. Calling this twice is a no-op.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = std::env::var("RUST_LOG").ok().map(|v| parse_env_level(&v));
    let mirror_stderr = env_level.is_some();

    let logger = LOGGER.get_or_init(|| BridgeLogger {
        sink: Mutex::new(LogSink::new(mirror_stderr)),
    });
    if log::set_logger(logger).is_err() {
        return;
    }

    let level = cli_level.or(env_level).unwrap_or(LevelFilter::Off);
    log::set_max_level(level);
    LEVEL_FROM_STARTUP
        .set(cli_level.is_some() || env_level.is_some())
        .ok();
}

/// Whether the level was already fixed by the CLI or `RUST_LOG`.
static LEVEL_FROM_STARTUP: OnceLock<bool> = OnceLock::new();

/// Apply the level from the config file, unless the CLI or `RUST_LOG`
/// already chose one.
pub fn set_level(config_level: LevelFilter) {
    if LEVEL_FROM_STARTUP.get().copied().unwrap_or(false) {
        return;
    }
    log::set_max_level(config_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_level_parses_bare_levels() {
        assert_eq!(parse_env_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_env_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_env_level("off"), LevelFilter::Off);
    }

    #[test]
    fn env_level_falls_back_to_info() {
        assert_eq!(parse_env_level("form_pages=trace"), LevelFilter::Info);
        assert_eq!(parse_env_level(""), LevelFilter::Info);
    }

    #[test]
    fn log_file_lives_in_temp_dir() {
        let path = log_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("form_pages_debug.log")
        );
    }
}
