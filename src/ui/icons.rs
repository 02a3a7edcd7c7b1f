use iced::widget::{text, Text};
use iced::Center;

fn glyph(unicode: char) -> Text<'static> {
    text(unicode.to_string())
        .shaping(text::Shaping::Advanced)
        .width(20)
        .align_x(Center)
}

pub fn heart_icon(filled: bool) -> Text<'static> {
    glyph(if filled { '\u{2665}' } else { '\u{2661}' })
}

pub fn dot_icon(active: bool) -> Text<'static> {
    glyph(if active { '\u{25CF}' } else { '\u{25CB}' }).size(12)
}

pub fn close_icon() -> Text<'static> {
    glyph('\u{00D7}')
}
