pub mod fetch;
pub mod reducer;

use serde::{Deserialize, Deserializer, Serialize};

pub use fetch::{fetch_outcome, outcome, query_url, run, HttpStoryClient, StoryClient};
pub use reducer::{reduce, Stories, StoriesAction, ViewState};

/// A search hit as returned by the remote API. Identity is `object_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Absent for text posts (Ask HN and the like)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub author: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub points: u64,
}

impl Story {
    /// Title to render; untitled hits fall back to their URL, then to the id.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or(&self.object_id)
    }
}

/// The response envelope: `{ "hits": [...] }`. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: Vec<Story>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}
