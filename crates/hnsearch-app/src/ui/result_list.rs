use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Column};
use iced::{mouse, Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;
use hnsearch_core::stories::Story;

/// Build the story list. Each row carries its own Dismiss button.
pub fn view(stories: &[Story]) -> Element<'_, Message> {
    if stories.is_empty() {
        return column![].into();
    }

    let mut rows = Column::new().spacing(4);
    for story in stories {
        rows = rows.push(story_row(story));
    }

    scrollable(rows).height(Fill).into()
}

fn story_row(story: &Story) -> Element<'_, Message> {
    let title: Element<'_, Message> = match &story.url {
        Some(url) => mouse_area(text(story.display_title()).size(16).color(theme::TEXT_LINK))
            .on_press(Message::OpenLink(url.clone()))
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => text(story.display_title())
            .size(16)
            .color(theme::TEXT_PRIMARY)
            .into(),
    };

    let meta = text(format!(
        "{}  |  {} comments  |  {} points",
        story.author, story.num_comments, story.points
    ))
    .size(12)
    .color(theme::TEXT_SECONDARY);

    let dismiss = button(text("Dismiss").size(12))
        .on_press(Message::RemoveItem(story.clone()))
        .padding(Padding::from([4, 10]));

    let content = row![column![title, meta].spacing(2).width(Fill), dismiss]
        .spacing(8)
        .align_y(Alignment::Center);

    container(content)
        .padding(Padding::from([6, 12]))
        .width(Fill)
        .style(theme::result_row)
        .into()
}
