mod app;
mod ui;

use app::State;
use hnsearch_core::config;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load();

    tracing::info!("Starting hnsearch");

    iced::daemon(move || State::new(config.clone()), State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .run()
}
