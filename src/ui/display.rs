use iced::widget::{container, image};
use iced::{Element, Length};

use crate::Message;

/// The cat display: the fetched picture, centered in the card
pub fn display(picture: &image::Handle) -> Element<'static, Message> {
    container(image(picture.clone()).width(Length::Fill))
        .center_x(Length::Fill)
        .into()
}
