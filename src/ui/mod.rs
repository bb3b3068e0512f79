/// View components for the cat show
///
/// The view is a pure function of the last fetched picture: an
/// elevated card holding a dark header banner and, once any fetch has
/// succeeded, the cat itself. No logic lives here beyond the
/// conditional inclusion of the image.

mod card;
mod display;
mod header;
mod style;

use iced::widget::{column, image};
use iced::{Element, Length};

use crate::Message;

/// The whole view: a bit of paper containing the header and, if a cat
/// has been fetched, the cat too
pub fn cat_viewer(picture: Option<&image::Handle>) -> Element<'static, Message> {
    let content = match picture {
        Some(handle) => column![header::header(), display::display(handle)],
        None => column![header::header()],
    };

    card::card(style::CARD_ELEVATION, content.width(Length::Fill))
        .max_width(520.0)
        .into()
}
