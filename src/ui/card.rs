use iced::widget::{container, Container};
use iced::{Border, Color, Element, Shadow, Vector};

use super::style;
use crate::Message;

/// An elevated paper-style card: white surface, rounded corners, and a
/// drop shadow that deepens with the elevation
pub fn card<'a>(
    elevation: u8,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    let depth = f32::from(elevation);

    container(content).style(move |_theme| container::Style {
        background: Some(style::CARD_SURFACE.into()),
        border: Border {
            radius: style::CARD_RADIUS.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, depth * 0.6),
            blur_radius: depth * 2.0,
        },
        ..container::Style::default()
    })
}
