use iced::Color;

/// Header banner background
pub const HEADER_BACKGROUND: Color = Color::BLACK;

/// Header text colour
pub const HEADER_TEXT: Color = Color::WHITE;

/// Fixed height of the header banner
pub const HEADER_HEIGHT: f32 = 80.0;

/// Heading text size, sized like an h2
pub const HEADER_TEXT_SIZE: f32 = 24.0;

/// Card surface colour
pub const CARD_SURFACE: Color = Color::WHITE;

/// Card corner rounding
pub const CARD_RADIUS: f32 = 4.0;

/// Depth of the card's drop shadow
pub const CARD_ELEVATION: u8 = 10;
