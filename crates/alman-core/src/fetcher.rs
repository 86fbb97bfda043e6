use tokio_util::sync::CancellationToken;

use crate::error::FetchError;

/// Retrieves raw HTML for a URL
///
/// Implementations must be stateless and safe to call concurrently.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str, cancel: &CancellationToken) -> Result<String, FetchError>;
}
