use super::Story;

/// What the view renders: the story list plus the two lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Lifecycle actions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchInit,
    FetchSuccess(Vec<Story>),
    FetchFailure,
    RemoveStory(Story),
}

impl StoriesAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchInit => "fetch_init",
            Self::FetchSuccess(_) => "fetch_success",
            Self::FetchFailure => "fetch_failure",
            Self::RemoveStory(_) => "remove_story",
        }
    }
}

/// Pure transition function.
///
/// Stale data stays visible while a reload is in flight. A success replaces
/// `data` wholesale, so a late response can bring back a story the user has
/// already dismissed: whichever action is dispatched last wins.
pub fn reduce(state: ViewState, action: StoriesAction) -> ViewState {
    match action {
        StoriesAction::FetchInit => ViewState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoriesAction::FetchSuccess(data) => ViewState {
            data,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => ViewState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoriesAction::RemoveStory(story) => ViewState {
            data: state
                .data
                .into_iter()
                .filter(|s| s.object_id != story.object_id)
                .collect(),
            ..state
        },
    }
}

/// Single owner of the view state; every mutation goes through `dispatch`.
#[derive(Debug, Default)]
pub struct Stories {
    state: ViewState,
}

impl Stories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: StoriesAction) {
        tracing::debug!(action = action.name(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn data(&self) -> &[Story] {
        &self.state.data
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str) -> Story {
        Story {
            object_id: id.to_string(),
            url: Some(format!("https://example.com/{id}")),
            title: Some(title.to_string()),
            author: "author".to_string(),
            num_comments: 1,
            points: 2,
        }
    }

    fn loaded(data: Vec<Story>) -> ViewState {
        ViewState {
            data,
            is_loading: false,
            is_error: false,
        }
    }

    #[test]
    fn init_keeps_stale_data_visible() {
        let state = ViewState {
            data: vec![story("1", "A")],
            is_loading: false,
            is_error: true,
        };

        let next = reduce(state, StoriesAction::FetchInit);
        assert!(next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.data, vec![story("1", "A")]);
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let state = ViewState {
            data: vec![story("1", "A"), story("2", "B")],
            is_loading: true,
            is_error: false,
        };
        let payload = vec![story("3", "C"), story("1", "A again")];

        let next = reduce(state, StoriesAction::FetchSuccess(payload.clone()));
        assert_eq!(next, loaded(payload));
    }

    #[test]
    fn failure_keeps_data_and_sets_error() {
        let state = ViewState {
            data: vec![story("1", "A")],
            is_loading: true,
            is_error: false,
        };

        let next = reduce(state, StoriesAction::FetchFailure);
        assert!(!next.is_loading);
        assert!(next.is_error);
        assert_eq!(next.data, vec![story("1", "A")]);
    }

    #[test]
    fn remove_drops_only_matching_id() {
        let state = loaded(vec![story("1", "A"), story("2", "B"), story("3", "C")]);

        let next = reduce(state, StoriesAction::RemoveStory(story("2", "B")));
        assert_eq!(next.data, vec![story("1", "A"), story("3", "C")]);
        assert!(!next.is_loading);
        assert!(!next.is_error);
    }

    #[test]
    fn remove_matches_on_identity_not_content() {
        let state = loaded(vec![story("1", "A")]);

        let mut stale_copy = story("1", "edited elsewhere");
        stale_copy.points = 999;
        let next = reduce(state, StoriesAction::RemoveStory(stale_copy));
        assert!(next.data.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let state = ViewState {
            data: vec![story("1", "A")],
            is_loading: true,
            is_error: false,
        };

        let next = reduce(state.clone(), StoriesAction::RemoveStory(story("9", "Z")));
        assert_eq!(next, state);
    }

    #[test]
    fn remove_leaves_flags_untouched_mid_fetch() {
        let state = ViewState {
            data: vec![story("1", "A"), story("2", "B")],
            is_loading: true,
            is_error: false,
        };

        let next = reduce(state, StoriesAction::RemoveStory(story("1", "A")));
        assert!(next.is_loading);
        assert_eq!(next.data, vec![story("2", "B")]);
    }

    #[test]
    fn loading_and_error_never_both_set() {
        let actions = [
            StoriesAction::FetchInit,
            StoriesAction::FetchFailure,
            StoriesAction::RemoveStory(story("1", "A")),
            StoriesAction::FetchInit,
            StoriesAction::FetchSuccess(vec![story("1", "A"), story("2", "B")]),
            StoriesAction::FetchFailure,
            StoriesAction::FetchInit,
            StoriesAction::RemoveStory(story("2", "B")),
            StoriesAction::FetchFailure,
            StoriesAction::FetchSuccess(Vec::new()),
        ];

        // every suffix of the sequence, each from a fresh state
        for start in 0..actions.len() {
            let mut state = ViewState::default();
            for action in actions[start..].iter().cloned() {
                state = reduce(state, action);
                assert!(!(state.is_loading && state.is_error), "{state:?}");
            }
        }
    }

    #[test]
    fn init_success_remove_scenario() {
        let mut stories = Stories::new();
        assert_eq!(stories.state(), &ViewState::default());

        stories.dispatch(StoriesAction::FetchInit);
        assert_eq!(
            stories.state(),
            &ViewState {
                data: Vec::new(),
                is_loading: true,
                is_error: false,
            }
        );

        stories.dispatch(StoriesAction::FetchSuccess(vec![story("1", "A")]));
        assert_eq!(stories.state(), &loaded(vec![story("1", "A")]));

        stories.dispatch(StoriesAction::RemoveStory(story("1", "A")));
        assert_eq!(stories.state(), &loaded(Vec::new()));
    }

    #[test]
    fn stale_success_reintroduces_dismissed_story() {
        let mut stories = Stories::new();
        stories.dispatch(StoriesAction::FetchSuccess(vec![story("1", "A")]));
        stories.dispatch(StoriesAction::FetchInit);
        stories.dispatch(StoriesAction::RemoveStory(story("1", "A")));
        assert!(stories.data().is_empty());

        stories.dispatch(StoriesAction::FetchSuccess(vec![story("1", "A")]));
        assert_eq!(stories.data(), &[story("1", "A")]);
    }
}
