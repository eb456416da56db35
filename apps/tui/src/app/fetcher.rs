use cozy_map_core::{Spot, SpotEndpoint};
use tokio::sync::mpsc::UnboundedSender;

use crate::client::{ClientError, SpotClient};

/// A finished request, waiting to be applied on the UI loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub endpoint: SpotEndpoint,
    pub result: Result<Vec<Spot>, ClientError>,
}

/// Starts requests in the background. Nothing is cancelled or ordered:
/// outcomes arrive on the channel in whatever order the server answers.
#[derive(Debug, Clone)]
pub struct SpotFetcher {
    client: SpotClient,
    outcomes: UnboundedSender<FetchOutcome>,
}

impl SpotFetcher {
    pub const fn new(client: SpotClient, outcomes: UnboundedSender<FetchOutcome>) -> Self {
        Self { client, outcomes }
    }

    pub fn request(&self, endpoint: SpotEndpoint) {
        let client = self.client.clone();
        let outcomes = self.outcomes.clone();

        tokio::spawn(async move {
            let result = client.fetch_spots(endpoint).await;
            if outcomes.send(FetchOutcome { endpoint, result }).is_err() {
                tracing::debug!(endpoint = endpoint.path(), "UI gone before fetch finished");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn failed_request_still_reports_back() {
        let mut settings = Settings::from_lookup(|_| None).expect("default settings");
        // Nothing listens on the discard port.
        settings.base_url = "http://127.0.0.1:9".parse().expect("valid url");
        settings.timeout = Some(Duration::from_secs(2));

        let client = SpotClient::new(&settings).expect("client");
        let (tx, mut rx) = mpsc::unbounded_channel();
        SpotFetcher::new(client, tx).request(SpotEndpoint::Mine);

        let outcome = rx.recv().await.expect("an outcome");
        assert_eq!(outcome.endpoint, SpotEndpoint::Mine);
        assert!(outcome.result.is_err());
    }
}
