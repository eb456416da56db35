mod settings;

pub use settings::{
    parse_base_url, parse_timeout, Settings, DEFAULT_BASE_URL, DEFAULT_EXPORT_FILE,
    DEFAULT_LOG_FILE, ENV_ALLOW_ZERO_COORDS, ENV_BASE_URL, ENV_LOG_FILE, ENV_SESSION,
    ENV_TIMEOUT_SECS,
};
