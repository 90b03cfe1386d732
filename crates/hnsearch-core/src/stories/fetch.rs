use std::future::Future;
use std::pin::Pin;

use super::reducer::StoriesAction;
use super::{SearchResponse, Story};
use crate::error::FetchError;

/// Network seam for the fetch cycle
pub trait StoryClient: Send + Sync {
    /// Issue one GET against `url` and decode the `hits` list.
    fn fetch(&self, url: String) -> Pin<Box<dyn Future<Output = Result<Vec<Story>, FetchError>> + Send>>;
}

/// reqwest-backed client: no auth, no retry, no custom headers, no timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpStoryClient {
    client: reqwest::Client,
}

impl HttpStoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl StoryClient for HttpStoryClient {
    fn fetch(&self, url: String) -> Pin<Box<dyn Future<Output = Result<Vec<Story>, FetchError>> + Send>> {
        let client = self.client.clone();
        Box::pin(async move {
            let response = client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status));
            }
            let body = response.bytes().await?;
            let parsed: SearchResponse = serde_json::from_slice(&body)?;
            Ok(parsed.hits)
        })
    }
}

/// Build the committed query URL for `term`.
pub fn query_url(endpoint: &str, term: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!("{endpoint}{encoded}")
}

/// Collapse a fetch result into the action that completes the cycle.
pub fn outcome(result: Result<Vec<Story>, FetchError>) -> StoriesAction {
    match result {
        Ok(hits) => {
            tracing::info!("Fetched {} stories", hits.len());
            StoriesAction::FetchSuccess(hits)
        }
        Err(e) => {
            tracing::warn!("Story fetch failed: {}", e);
            StoriesAction::FetchFailure
        }
    }
}

/// Start the network step and resolve to its completing action.
///
/// The returned future owns everything it needs, so it can be handed to a
/// runtime while the caller keeps sole ownership of the view state.
pub fn fetch_outcome<C>(client: &C, url: String) -> impl Future<Output = StoriesAction> + Send + 'static
where
    C: StoryClient + ?Sized,
{
    tracing::debug!("GET {}", url);
    let pending = client.fetch(url);
    async move { outcome(pending.await) }
}

/// Run one full cycle: `FetchInit`, then the outcome of a single GET.
///
/// Failures never reach the caller; they end up as `FetchFailure`.
pub async fn run<C, F>(client: &C, url: &str, mut dispatch: F)
where
    C: StoryClient + ?Sized,
    F: FnMut(StoriesAction),
{
    dispatch(StoriesAction::FetchInit);
    dispatch(fetch_outcome(client, url.to_string()).await);
}
