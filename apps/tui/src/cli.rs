use clap::Parser;
use cozy_map_core::CoordinatePolicy;
use std::path::PathBuf;

use crate::config::{parse_base_url, parse_timeout, Settings, DEFAULT_EXPORT_FILE};

#[derive(Debug, Parser)]
#[command(name = "cozy-map", version, about = "Cozy hot chocolate spot map")]
pub struct CliArgs {
    /// Print the spot list and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Use /my_spots instead of /spots in headless mode
    #[arg(long)]
    pub mine: bool,

    /// Write the fetched spots to a KML file and exit
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    pub export: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the backend base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Backend session cookie value; enables the "my spots" toggle
    #[arg(long, value_name = "COOKIE")]
    pub session: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<String>,

    /// Place markers for spots with a coordinate of exactly 0
    #[arg(long = "allow-zero-coords")]
    pub allow_zero_coords: bool,

    /// Override the log file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// What headless mode should fetch and print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOptions {
    pub json: bool,
    pub mine: bool,
    pub export: Option<PathBuf>,
}

impl CliArgs {
    /// Applies flags on top of settings loaded from the environment.
    pub fn apply(&self, settings: &mut Settings) -> color_eyre::eyre::Result<()> {
        if let Some(url) = &self.base_url {
            settings.base_url = parse_base_url(url)?;
        }
        if let Some(session) = &self.session {
            let session = session.trim();
            settings.session = (!session.is_empty()).then(|| session.to_string());
        }
        if let Some(timeout) = &self.timeout {
            settings.timeout = Some(parse_timeout(timeout)?);
        }
        if self.allow_zero_coords {
            settings.coordinate_policy = CoordinatePolicy::Present;
        }
        if let Some(path) = &self.log_file {
            settings.log_file.clone_from(path);
        }
        if let Some(path) = &self.export {
            settings.export_path.clone_from(path);
        }
        if self.debug {
            settings.debug = true;
        }
        Ok(())
    }

    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json || self.export.is_some()
    }

    pub fn headless_options(&self) -> HeadlessOptions {
        HeadlessOptions {
            json: self.json,
            mine: self.mine,
            export: self.export.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("cozy-map").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_settings() -> color_eyre::eyre::Result<()> {
        let mut settings = Settings::from_lookup(|_| None)?;
        let args = parse(&[
            "--base-url",
            "https://cocoa.example.org",
            "--session",
            "s3cret",
            "--timeout",
            "5",
            "--allow-zero-coords",
            "--debug",
        ]);

        args.apply(&mut settings)?;

        assert_eq!(settings.base_url.host_str(), Some("cocoa.example.org"));
        assert_eq!(settings.session.as_deref(), Some("s3cret"));
        assert_eq!(settings.timeout, Some(std::time::Duration::from_secs(5)));
        assert_eq!(settings.coordinate_policy, CoordinatePolicy::Present);
        assert!(settings.debug);
        Ok(())
    }

    #[test]
    fn bare_export_uses_default_file() {
        let args = parse(&["--export"]);
        assert_eq!(args.export, Some(PathBuf::from(DEFAULT_EXPORT_FILE)));
        assert!(args.wants_headless());

        let args = parse(&["--export", "out.kml", "--mine"]);
        assert_eq!(
            args.headless_options(),
            HeadlessOptions {
                json: false,
                mine: true,
                export: Some(PathBuf::from("out.kml")),
            }
        );
    }

    #[test]
    fn interactive_by_default() {
        assert!(!parse(&[]).wants_headless());
    }
}
