use iced::widget::image::Handle;
use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::core::data_uri;

/// Decoded image handle for a base64 data URI, or `None` when the value is
/// not a decodable image URI.
pub fn image_handle(uri: &str) -> Option<Handle> {
    data_uri::decode(uri).map(Handle::from_bytes)
}

pub fn section_heading<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(28).into()
}

/// Rounded tag chip used for skills, interests and social links.
pub fn tag_pill<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(14))
        .padding([4, 10])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style::default()
                .background(palette.background.weak.color)
                .border(Border {
                    radius: 12.0.into(),
                    ..Border::default()
                })
        })
        .into()
}
