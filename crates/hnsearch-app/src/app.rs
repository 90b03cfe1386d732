use iced::widget::{column, container, text};
use iced::window;
use iced::{Element, Fill, Padding, Size, Subscription, Task, Theme};

use crate::ui::{result_list, search_input, theme};
use hnsearch_core::config::Config;
use hnsearch_core::storage::{self, KeyValueStore};
use hnsearch_core::stories::{fetch_outcome, HttpStoryClient, StoriesAction, Story};
use hnsearch_core::SearchSession;

type Store = Box<dyn KeyValueStore + Send>;

pub struct State {
    session: SearchSession<Store>,
    client: HttpStoryClient,

    /// The one window this app shows
    window_id: Option<window::Id>,
}

#[derive(Debug, Clone)]
pub enum Message {
    WindowOpened(window::Id),
    WindowClosed(window::Id),
    SearchInput(String),
    SearchSubmit,
    /// Completion of a fetch cycle, delivered back from the runtime
    Stories(StoriesAction),
    RemoveItem(Story),
    OpenLink(String),
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let (id, open_task) = window::open(window::Settings {
            size: Size::new(config.window.width, config.window.height),
            ..window::Settings::default()
        });

        let mut state = Self::with_store(&config, storage::open_default());
        state.window_id = Some(id);

        // Initial cycle for the restored term
        let url = state.session.committed_url().to_string();
        let fetch_task = state.start_fetch(url);

        (state, Task::batch([open_task.map(Message::WindowOpened), fetch_task]))
    }

    fn with_store(config: &Config, store: Store) -> Self {
        Self {
            session: SearchSession::new(store, config),
            client: HttpStoryClient::new(),
            window_id: None,
        }
    }

    pub fn title(&self, _window: window::Id) -> String {
        String::from("HN Search")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::batch([
                    window::gain_focus(id),
                    iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
                ])
            }
            Message::WindowClosed(id) => {
                if self.window_id == Some(id) {
                    self.window_id = None;
                    tracing::info!("Window closed, exiting");
                    iced::exit()
                } else {
                    Task::none()
                }
            }
            Message::SearchInput(term) => {
                self.session.on_search_input(term);
                Task::none()
            }
            Message::SearchSubmit => match self.session.on_search_submit() {
                Some(url) => self.start_fetch(url),
                None => Task::none(),
            },
            Message::Stories(action) => {
                self.session.apply(action);
                Task::none()
            }
            Message::RemoveItem(story) => {
                self.session.on_remove_item(story);
                Task::none()
            }
            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self, _window: window::Id) -> Element<'_, Message> {
        let form = search_input::view(self.session.search_term(), self.session.can_submit());

        let state = self.session.view_state();
        let body: Element<'_, Message> = if state.is_loading {
            text("Loading......").size(14).color(theme::TEXT_SECONDARY).into()
        } else {
            result_list::view(&state.data)
        };

        let mut content = column![form, body].spacing(12).padding(Padding::new(12.0));
        if state.is_error {
            content = content.push(text("Something went wrong.....").size(14).color(theme::TEXT_ERROR));
        }

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }

    pub fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }

    // ---- Fetch ----

    /// Mark the cycle as started and hand the network step to the runtime.
    /// Overlapping cycles are not de-duplicated; the last one to finish wins.
    fn start_fetch(&mut self, url: String) -> Task<Message> {
        self.session.apply(StoriesAction::FetchInit);
        Task::perform(fetch_outcome(&self.client, url), Message::Stories)
    }
}
