use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file path.
pub const LOG_ENV_VAR: &str = "UNISTORE_LOG";

/// Install the file logger if `UNISTORE_LOG` is set; otherwise do nothing.
///
/// Stdout carries rendered state, so logs only ever go to a file. The
/// file is `{UNISTORE_LOG}.{unix_secs}.{pid}`, one per run. `RUST_LOG`
/// sets the filter, `info` when unset.
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };

    let (path, file) = match open_log_file(PathBuf::from(base)) {
        Ok(opened) => opened,
        Err(err) => {
            eprintln!("unistore: logging disabled: {}", err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    tracing::debug!(path = %path.display(), "Logging to file");
}

/// Create this run's log file next to `base`.
fn open_log_file(base: PathBuf) -> io::Result<(PathBuf, File)> {
    let path = run_log_path(base);
    let file = File::create(&path).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("cannot create '{}': {}", path.display(), err),
        )
    })?;
    Ok((path, file))
}

/// `{base}.{unix_secs}.{pid}`
fn run_log_path(base: PathBuf) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.into_os_string();
    name.push(format!(".{}.{}", secs, std::process::id()));
    PathBuf::from(name)
}
