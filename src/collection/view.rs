use iced::widget::{button, column, container, row, text, Space};
use iced::{Center, Element, Fill};

use crate::state::Filter;
use crate::ui::icons::heart_icon;
use crate::ui::styles;

use super::{CollectionItem, CollectionMessage, Favorites};

pub fn collection_view<'a>(
    items: &'a [CollectionItem],
    favorites: &'a Favorites,
    filter: &'a Filter,
) -> Element<'a, CollectionMessage> {
    let visible: Vec<&CollectionItem> = items
        .iter()
        .filter(|item| filter.matches(item, favorites))
        .collect();

    if visible.is_empty() {
        return empty_message(filter);
    }

    let mut grid = column![].spacing(12).width(Fill);

    // Two works per row.
    for pair in visible.chunks(2) {
        let mut cells = row![].spacing(12);

        for item in pair {
            cells = cells.push(item_card(item, favorites.contains(item.id)));
        }

        if pair.len() == 1 {
            cells = cells.push(Space::with_width(Fill));
        }

        grid = grid.push(cells);
    }

    grid.into()
}

fn item_card(item: &CollectionItem, favorited: bool) -> Element<'_, CollectionMessage> {
    let favorite = button(heart_icon(favorited))
        .on_press(CollectionMessage::ToggleFavorite(item.id.to_string()))
        .padding(4)
        .style(if favorited {
            button::danger
        } else {
            button::text
        });

    container(
        column![
            row![text(item.title).size(16).width(Fill), favorite].align_y(Center),
            text(item.category).size(12).style(styles::subtle),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Fill)
    .style(|theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: iced::Border {
            color: theme.extended_palette().background.weak.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn empty_message<'a>(filter: &Filter) -> Element<'a, CollectionMessage> {
    let message = match filter {
        Filter::All => "The collection is empty.",
        Filter::Favorites => "Nothing favorited yet. Tap a heart to keep a work here.",
        Filter::Category(_) => "No works in this category.",
    };

    container(
        text(message)
            .width(Fill)
            .size(18)
            .align_x(Center)
            .style(styles::subtle),
    )
    .padding(24)
    .width(Fill)
    .into()
}
