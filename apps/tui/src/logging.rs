use color_eyre::eyre::{eyre, WrapErr};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Where log lines go. The interactive UI owns the terminal, so it logs to a
/// file; headless runs log to stderr next to their stdout output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,cozy_map_tui={level},cozy_map_core={level}")
}

/// Installs the global subscriber. `RUST_LOG` wins over `--debug`.
pub fn init(settings: &Settings, target: LogTarget) -> color_eyre::eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(settings.debug)));

    let installed = match target {
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&settings.log_file)
                .wrap_err_with(|| {
                    format!("Failed to open log file {}", settings.log_file.display())
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| eyre!("Failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_crate_levels() {
        assert_eq!(
            default_filter(true),
            "warn,cozy_map_tui=debug,cozy_map_core=debug"
        );
        assert!(default_filter(false).contains("cozy_map_tui=info"));
    }
}
