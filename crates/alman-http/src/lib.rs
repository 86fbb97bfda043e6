use alman_config::http::HttpConfig;
use alman_core::{FetchError, PageFetcher};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Page fetcher backed by a shared `reqwest` client
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let status = response.status();
        tracing::debug!("got response {} for {}", status.as_u16(), response.url());

        // Every error status reads as a missing page to callers
        if !status.is_success() {
            return Err(FetchError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport(url, e))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str, cancel: &CancellationToken) -> Result<String, FetchError> {
        tracing::debug!("fetching {}", url);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("request to {} cancelled", url);
                Err(FetchError::Cancelled)
            }
            result = self.get(url) => result,
        }
    }
}

fn transport(url: &str, error: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        message: error.to_string(),
    }
}
