use iced::widget::{button, row, text, text_input};
use iced::{font, Alignment, Element, Fill, Font, Padding};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "hnsearch-search-input";

/// Build the search form: label, input and a submit button that is
/// disabled while the term is empty
pub fn view(term: &str, can_submit: bool) -> Element<'_, Message> {
    let label = text("Search:")
        .size(16)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(theme::TEXT_PRIMARY);

    let input = text_input("Search stories...", term)
        .on_input(Message::SearchInput)
        .on_submit(Message::SearchSubmit)
        .id(SEARCH_INPUT_ID)
        .padding(10)
        .size(16)
        .width(Fill)
        .style(theme::search_input);

    let submit = button(text("Submit").size(16))
        .on_press_maybe(can_submit.then_some(Message::SearchSubmit))
        .padding(Padding::from([10, 16]));

    row![label, input, submit]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
