//! HTTP access to the spot endpoints.

use cozy_map_core::{parse_spots, Spot, SpotEndpoint, SpotError};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, Url};
use thiserror::Error;

use crate::config::Settings;

/// Name of the backend's session cookie.
pub const SESSION_COOKIE: &str = "session";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(String),

    #[error("{path} answered {status}")]
    Status { path: &'static str, status: u16 },

    #[error(transparent)]
    Decode(#[from] SpotError),

    #[error("session cookie contains characters not allowed in a header")]
    Cookie,
}

/// Read-only client for `/spots` and `/my_spots`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SpotClient {
    client: Client,
    base_url: Url,
}

impl SpotClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(session) = &settings.session {
            let cookie = HeaderValue::from_str(&format!("{SESSION_COOKIE}={session}"))
                .map_err(|_| ClientError::Cookie)?;
            headers.insert(COOKIE, cookie);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("cozy-map/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.clone(),
        })
    }

    pub fn endpoint_url(&self, endpoint: SpotEndpoint) -> Result<Url, ClientError> {
        endpoint_url(&self.base_url, endpoint)
    }

    pub async fn fetch_spots(&self, endpoint: SpotEndpoint) -> Result<Vec<Spot>, ClientError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, "fetching spots");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                path: endpoint.path(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(parse_spots(&body)?)
    }
}

/// Endpoint paths are absolute, so any path on the base URL is replaced.
pub fn endpoint_url(base_url: &Url, endpoint: SpotEndpoint) -> Result<Url, ClientError> {
    base_url
        .join(endpoint.path())
        .map_err(|error| ClientError::Url(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_against_base() -> Result<(), Box<dyn std::error::Error>> {
        let base = Url::parse("http://127.0.0.1:5000")?;
        assert_eq!(
            endpoint_url(&base, SpotEndpoint::All)?.as_str(),
            "http://127.0.0.1:5000/spots"
        );
        assert_eq!(
            endpoint_url(&base, SpotEndpoint::Mine)?.as_str(),
            "http://127.0.0.1:5000/my_spots"
        );

        let nested = Url::parse("https://cocoa.example.org/app/")?;
        assert_eq!(
            endpoint_url(&nested, SpotEndpoint::All)?.as_str(),
            "https://cocoa.example.org/spots"
        );
        Ok(())
    }

    #[test]
    fn rejects_session_with_newline() -> color_eyre::eyre::Result<()> {
        let mut settings = Settings::from_lookup(|_| None)?;
        settings.session = Some("abc\ndef".to_string());
        assert!(matches!(SpotClient::new(&settings), Err(ClientError::Cookie)));
        Ok(())
    }

    #[test]
    fn status_errors_name_the_endpoint() {
        let error = ClientError::Status {
            path: SpotEndpoint::Mine.path(),
            status: 401,
        };
        assert_eq!(error.to_string(), "/my_spots answered 401");
    }
}
