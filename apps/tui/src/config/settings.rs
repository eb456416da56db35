use color_eyre::eyre::{eyre, WrapErr};
use cozy_map_core::CoordinatePolicy;
use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILE: &str = "cozy-map.log";
pub const DEFAULT_EXPORT_FILE: &str = "cozy_hot_chocolate_spots.kml";

pub const ENV_BASE_URL: &str = "COZY_MAP_BASE_URL";
pub const ENV_SESSION: &str = "COZY_MAP_SESSION";
pub const ENV_TIMEOUT_SECS: &str = "COZY_MAP_TIMEOUT_SECS";
pub const ENV_ALLOW_ZERO_COORDS: &str = "COZY_MAP_ALLOW_ZERO_COORDS";
pub const ENV_LOG_FILE: &str = "COZY_MAP_LOG_FILE";

/// Runtime configuration, resolved from `.env`, the environment and flags
/// (in increasing priority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Url,
    /// Value of the backend's `session` cookie. Its presence means signed in.
    pub session: Option<String>,
    pub timeout: Option<Duration>,
    pub coordinate_policy: CoordinatePolicy,
    pub log_file: PathBuf,
    pub export_path: PathBuf,
    pub debug: bool,
}

impl Settings {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn load() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base_url)?;

        let session = lookup(ENV_SESSION)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let timeout = lookup(ENV_TIMEOUT_SECS)
            .map(|value| parse_timeout(&value))
            .transpose()?;

        let coordinate_policy = if lookup(ENV_ALLOW_ZERO_COORDS).is_some_and(|value| is_truthy(&value)) {
            CoordinatePolicy::Present
        } else {
            CoordinatePolicy::Truthy
        };

        let log_file = lookup(ENV_LOG_FILE).map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        Ok(Self {
            base_url,
            session,
            timeout,
            coordinate_policy,
            log_file,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            debug: false,
        })
    }

    pub const fn signed_in(&self) -> bool {
        self.session.is_some()
    }
}

pub fn parse_base_url(value: &str) -> color_eyre::eyre::Result<Url> {
    let url = Url::parse(value.trim()).wrap_err_with(|| format!("Invalid backend URL: {value}"))?;
    if url.cannot_be_a_base() {
        return Err(eyre!("Backend URL cannot be used as a base: {value}"));
    }
    Ok(url)
}

pub fn parse_timeout(value: &str) -> color_eyre::eyre::Result<Duration> {
    let seconds: u64 = value
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid timeout in seconds: {value}"))?;
    if seconds == 0 {
        return Err(eyre!("Timeout must be at least one second"));
    }
    Ok(Duration::from_secs(seconds))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> color_eyre::eyre::Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() -> color_eyre::eyre::Result<()> {
        let settings = settings_from(&[])?;
        assert_eq!(settings.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(settings.session, None);
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.coordinate_policy, CoordinatePolicy::Truthy);
        assert_eq!(settings.log_file, PathBuf::from("cozy-map.log"));
        assert!(!settings.signed_in());
        Ok(())
    }

    #[test]
    fn reads_overrides() -> color_eyre::eyre::Result<()> {
        let settings = settings_from(&[
            (ENV_BASE_URL, "https://cocoa.example.org"),
            (ENV_SESSION, " abc123 "),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_ALLOW_ZERO_COORDS, "yes"),
            (ENV_LOG_FILE, "/tmp/cozy.log"),
        ])?;

        assert_eq!(settings.base_url.host_str(), Some("cocoa.example.org"));
        assert_eq!(settings.session.as_deref(), Some("abc123"));
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.coordinate_policy, CoordinatePolicy::Present);
        assert_eq!(settings.log_file, PathBuf::from("/tmp/cozy.log"));
        assert!(settings.signed_in());
        Ok(())
    }

    #[test]
    fn blank_session_means_anonymous() -> color_eyre::eyre::Result<()> {
        let settings = settings_from(&[(ENV_SESSION, "   ")])?;
        assert!(!settings.signed_in());
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings_from(&[(ENV_BASE_URL, "not a url")]).is_err());
        assert!(settings_from(&[(ENV_BASE_URL, "mailto:cocoa@example.org")]).is_err());
        assert!(settings_from(&[(ENV_TIMEOUT_SECS, "soon")]).is_err());
        assert!(settings_from(&[(ENV_TIMEOUT_SECS, "0")]).is_err());
    }
}
