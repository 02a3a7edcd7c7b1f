use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Center, Element, Fill};

use crate::ui::icons::dot_icon;

use super::{Gallery, GalleryMessage};

pub fn gallery_view(gallery: &Gallery) -> Element<'_, GalleryMessage> {
    let Some(slide) = gallery.slides().get(gallery.current()) else {
        return container(Space::with_height(0)).into();
    };

    let tone = slide.tone;

    let panel = container(
        column![
            text(slide.title).size(30),
            text(slide.medium).size(14),
        ]
        .spacing(8)
        .align_x(Center),
    )
    .width(Fill)
    .height(340)
    .align_x(Center)
    .align_y(Center)
    .style(move |_theme| container::Style {
        background: Some(tone.into()),
        text_color: Some(iced::Color::WHITE),
        border: iced::Border {
            color: tone,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    });

    let dots = row(gallery.slides().iter().enumerate().map(|(index, _)| {
        button(dot_icon(index == gallery.current()))
            .on_press(GalleryMessage::DotPressed(index))
            .padding(4)
            .style(button::text)
            .into()
    }))
    .spacing(6);

    let content = column![panel, container(dots).center_x(Fill)]
        .spacing(12)
        .width(Fill);

    // Hovering anywhere over the gallery pauses the rotation.
    mouse_area(content)
        .on_enter(GalleryMessage::Entered)
        .on_exit(GalleryMessage::Exited)
        .into()
}
