// src/log.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Where log lines go.
pub enum Sink<'a> {
    Stderr,
    File(&'a Path),
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "petition_ingest=warn",
        1 => "petition_ingest=info",
        _ => "petition_ingest=debug",
    }
}

/// Install the process-wide subscriber. Lines read `<elapsed> LEVEL message`.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this twice is a no-op,
/// and an already-installed foreign subscriber is left alone.
pub fn init(verbosity: u8, sink: Sink<'_>) -> io::Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    let installed = match sink {
        Sink::Stderr => builder.with_writer(io::stderr).try_init(),
        Sink::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    if let Err(e) = installed {
        eprintln!("Warning: logging not installed: {e}");
    }

    let _ = INSTALLED.set(());
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_crate_directive() {
        assert_eq!(default_directive(0), "petition_ingest=warn");
        assert_eq!(default_directive(1), "petition_ingest=info");
        assert_eq!(default_directive(7), "petition_ingest=debug");
    }
}
