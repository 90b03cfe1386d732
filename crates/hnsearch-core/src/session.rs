//! The surface a view talks to: staged term, committed URL and view state.

use crate::config::Config;
use crate::storage::{KeyValueStore, PersistentPreference};
use crate::stories::{query_url, Stories, StoriesAction, Story, ViewState};

pub struct SearchSession<S> {
    endpoint: String,
    term: PersistentPreference<S>,
    committed_url: String,
    stories: Stories,
}

impl<S: KeyValueStore> SearchSession<S> {
    /// Restore the persisted term and commit its URL. The caller is expected
    /// to run the first fetch against [`committed_url`](Self::committed_url).
    pub fn new(store: S, config: &Config) -> Self {
        let term = PersistentPreference::new(
            store,
            config.search.storage_key.clone(),
            config.search.default_term.clone(),
        );
        let committed_url = query_url(&config.api.endpoint, term.value());
        tracing::info!("Restored search term '{}'", term.value());
        Self {
            endpoint: config.api.endpoint.clone(),
            term,
            committed_url,
            stories: Stories::new(),
        }
    }

    pub fn search_term(&self) -> &str {
        self.term.value()
    }

    pub fn committed_url(&self) -> &str {
        &self.committed_url
    }

    pub fn view_state(&self) -> &ViewState {
        self.stories.state()
    }

    /// Submitting is disabled while the staged term is empty.
    pub fn can_submit(&self) -> bool {
        !self.term.value().is_empty()
    }

    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.term.set(text);
    }

    /// Promote the staged term. Returns the URL to fetch when the committed
    /// URL actually changed; `None` when blank or identical to the last one.
    pub fn on_search_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let url = query_url(&self.endpoint, self.term.value());
        if url == self.committed_url {
            tracing::debug!("Submitted term unchanged, not refetching");
            return None;
        }
        self.committed_url = url.clone();
        Some(url)
    }

    pub fn on_remove_item(&mut self, story: Story) {
        self.stories.dispatch(StoriesAction::RemoveStory(story));
    }

    /// Feed a lifecycle action produced by the fetch orchestrator.
    pub fn apply(&mut self, action: StoriesAction) {
        self.stories.dispatch(action);
    }

    pub fn into_store(self) -> S {
        self.term.into_store()
    }
}
