use tokio_util::sync::CancellationToken;

use crate::error::LookupError;
use crate::types::Entry;

/// An online dictionary that can resolve a word to an [`Entry`]
#[async_trait::async_trait]
pub trait OnlineDictionary: Send + Sync {
    /// Short identifier used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Look up a word; cancelling the token abandons any in-flight request
    async fn find(&self, word: &str, cancel: &CancellationToken) -> Result<Entry, LookupError>;
}
