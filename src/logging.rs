use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "shelf.log";

/// Install the global subscriber.
///
/// Compact lines go to stderr. With `log_file`, the same events are also
/// written as JSON lines to a daily-rotated file next to that path.
/// `RUST_LOG` overrides the level picked from `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let json_file = log_file.map(|path| {
        let (dir, name) = split_log_path(&path);
        let _ = std::fs::create_dir_all(&dir);
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, name))
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(json_file)
        .init();
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("shelf={}", level)
}

/// Directory and file-name prefix for the rolling appender.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, name)
}
