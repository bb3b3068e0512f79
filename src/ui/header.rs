use iced::widget::{container, text};
use iced::{Element, Length};

use super::style;
use crate::Message;

/// The header banner for the cat view
pub fn header() -> Element<'static, Message> {
    container(text("Cat show").size(style::HEADER_TEXT_SIZE))
        .center_x(Length::Fill)
        .center_y(style::HEADER_HEIGHT)
        .style(|_theme| container::Style {
            text_color: Some(style::HEADER_TEXT),
            background: Some(style::HEADER_BACKGROUND.into()),
            ..container::Style::default()
        })
        .into()
}
