use iced::widget::{button, row, text};
use iced::{Center, Element, Fill};

use crate::collection::{categories, CollectionItem, CollectionMessage, Favorites};
use crate::state::Filter;

/// The filter row above the collection grid: a favorites tally on the left,
/// one button per filter on the right. Pressing a button makes it the single
/// active filter.
pub fn view_controls<'a>(
    items: &'a [CollectionItem],
    favorites: &'a Favorites,
    current_filter: &'a Filter,
) -> Element<'a, CollectionMessage> {
    let favorited = items
        .iter()
        .filter(|item| favorites.contains(item.id))
        .count();

    let filter_button = |label: String, filter: Filter| {
        let active = filter == *current_filter;

        button(text(label).size(14))
            .style(if active { button::primary } else { button::text })
            .on_press(CollectionMessage::FilterChanged(filter))
            .padding(iced::Padding {
                top: 5.0,
                left: 12.0,
                bottom: 5.0,
                right: 12.0,
            })
    };

    let mut buttons = row![
        filter_button("All".to_string(), Filter::All),
        filter_button("Favorites".to_string(), Filter::Favorites),
    ]
    .spacing(8)
    .align_y(Center);

    for category in categories(items) {
        buttons = buttons.push(filter_button(
            display_name(category),
            Filter::Category(category.to_string()),
        ));
    }

    row![
        text(match favorited {
            1 => "1 work favorited".to_string(),
            n => format!("{n} works favorited"),
        })
        .size(14)
        .width(Fill),
        buttons,
    ]
    .spacing(20)
    .align_y(Center)
    .into()
}

fn display_name(category: &str) -> String {
    let mut name = category.replace('-', " ");

    if let Some(first) = name.get_mut(..1) {
        first.make_ascii_uppercase();
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_read_like_labels() {
        assert_eq!(display_name("paintings"), "Paintings");
        assert_eq!(display_name("works-on-paper"), "Works on paper");
    }
}
