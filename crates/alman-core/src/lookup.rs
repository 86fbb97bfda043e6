use std::fmt;
use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::LookupError;
use crate::types::Entry;

/// Ways of resolving a word to an entry page, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Guess the entry URL from the normalized word
    DirectUrl,
    /// Query the site search and follow the first entry link
    Search,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Strategy::DirectUrl => write!(f, "direct-url"),
            Strategy::Search => write!(f, "search"),
        }
    }
}

pub type Outcome = (Strategy, Result<Entry, LookupError>);

/// Run the direct and search strategies as separate tasks and wait for both.
///
/// Each closure receives a child of `cancel`. Dropping the returned future
/// cancels that child, so abandoned lookups stop their requests too.
pub async fn race<D, DF, S, SF>(
    cancel: &CancellationToken,
    direct: D,
    search: S,
) -> Result<Entry, LookupError>
where
    D: FnOnce(CancellationToken) -> DF,
    DF: Future<Output = Result<Entry, LookupError>> + Send + 'static,
    S: FnOnce(CancellationToken) -> SF,
    SF: Future<Output = Result<Entry, LookupError>> + Send + 'static,
{
    let token = cancel.child_token();
    let _guard = token.clone().drop_guard();

    let direct = tokio::spawn(direct(token.clone()));
    let search = tokio::spawn(search(token.clone()));

    let outcomes = vec![
        (Strategy::DirectUrl, join(direct).await),
        (Strategy::Search, join(search).await),
    ];

    resolve(outcomes)
}

/// Pick the result of a finished race.
///
/// The first success by strategy priority wins, whatever order the tasks
/// finished in. Without a success, `NotFound` is only reported when every
/// strategy agreed the word is absent; otherwise the highest-priority other
/// failure is returned.
pub fn resolve(mut outcomes: Vec<Outcome>) -> Result<Entry, LookupError> {
    outcomes.sort_by_key(|(strategy, _)| *strategy);

    let mut failure = None;
    for (strategy, outcome) in outcomes {
        match outcome {
            Ok(entry) => {
                tracing::debug!("{} strategy resolved '{}'", strategy, entry.word);
                return Ok(entry);
            }
            Err(LookupError::NotFound) => {
                tracing::debug!("{} strategy found nothing", strategy);
            }
            Err(e) => {
                tracing::warn!("{} strategy failed: {}", strategy, e);
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }
    }

    Err(failure.unwrap_or(LookupError::NotFound))
}

async fn join(handle: JoinHandle<Result<Entry, LookupError>>) -> Result<Entry, LookupError> {
    handle.await.map_err(LookupError::from).and_then(|outcome| outcome)
}
