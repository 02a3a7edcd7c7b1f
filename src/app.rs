use iced::keyboard::{self, key};
use iced::widget::{button, column, row, scrollable, text, text_input};
use iced::{Center, Element, Fill, Subscription, Task};

use crate::collection::{view::collection_view, CollectionMessage, Favorites};
use crate::contact::{self, view::form_view, ContactMessage, Submission};
use crate::gallery::{self, view::gallery_view, GalleryMessage};
use crate::state::persistence::{SaveError, SavedCollections, Store};
use crate::state::State;
use crate::ui::controls::view_controls;

/// The portfolio's section anchors, mapped to where each section sits in the
/// scrolled page. Anchors that resolve to no section are ignored.
const SECTIONS: [(&str, &str, f32); 3] = [
    ("#featured", "Featured", 0.0),
    ("#collection", "Collection", 0.45),
    ("#contact", "Contact", 1.0),
];

fn resolve_anchor(anchor: &str) -> Option<scrollable::RelativeOffset> {
    SECTIONS
        .iter()
        .find(|(target, _, _)| *target == anchor)
        .map(|&(_, _, y)| scrollable::RelativeOffset { x: 0.0, y })
}

fn main_scroll() -> scrollable::Id {
    scrollable::Id::new("atelier-page")
}

#[derive(Debug)]
pub enum Atelier {
    Loading,
    Loaded(State),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(SavedCollections),
    Saved(Result<(), SaveError>),
    Gallery(GalleryMessage),
    Contact(ContactMessage),
    Collection(CollectionMessage),
    AnchorPressed(&'static str),
    TabPressed { shift: bool },
}

impl Atelier {
    pub fn new() -> (Self, Task<Message>) {
        let store = Store::new();

        tracing::info!(dir = %store.dir().display(), "loading saved collections");

        (Self::Loading, Task::perform(store.load(), Message::Loaded))
    }

    pub fn title(&self) -> String {
        let saving = match self {
            Atelier::Loading => false,
            Atelier::Loaded(state) => state.saving > 0,
        };

        format!("Atelier Noir{}", if saving { "..." } else { "" })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match self {
            Atelier::Loading => {
                if let Message::Loaded(saved) = message {
                    *self = Atelier::Loaded(State {
                        submissions: saved.submissions,
                        favorites: Favorites::from_ids(saved.favorites),
                        ..State::default()
                    });
                }

                text_input::focus(text_input::Id::new("contact-name"))
            }
            Atelier::Loaded(state) => match message {
                Message::Loaded(_) => Task::none(),
                Message::Saved(result) => {
                    state.saving = state.saving.saturating_sub(1);

                    if let Err(error) = result {
                        tracing::warn!(?error, "failed to persist a collection");
                    }

                    Task::none()
                }
                Message::Gallery(message) => {
                    state.gallery.update(message);
                    Task::none()
                }
                Message::Collection(CollectionMessage::ToggleFavorite(id)) => {
                    state.favorites.toggle(&id);
                    state.saving += 1;

                    Task::perform(
                        state
                            .store
                            .clone()
                            .save_favorites(state.favorites.ids().to_vec()),
                        Message::Saved,
                    )
                }
                Message::Collection(CollectionMessage::FilterChanged(filter)) => {
                    state.filter = filter;
                    Task::none()
                }
                Message::Contact(message) => Self::update_contact(state, message),
                Message::AnchorPressed(anchor) => match resolve_anchor(anchor) {
                    Some(offset) => scrollable::snap_to(main_scroll(), offset),
                    None => Task::none(),
                },
                Message::TabPressed { shift } => {
                    if shift {
                        iced::widget::focus_previous()
                    } else {
                        iced::widget::focus_next()
                    }
                }
            },
        }
    }

    fn update_contact(state: &mut State, message: ContactMessage) -> Task<Message> {
        match message {
            ContactMessage::NameChanged(name) => {
                state.form.name = name;
                Task::none()
            }
            ContactMessage::EmailChanged(email) => {
                state.form.email = email;
                Task::none()
            }
            ContactMessage::MessageChanged(body) => {
                state.form.message = body;
                Task::none()
            }
            ContactMessage::Submit => {
                let data = state.form.data();
                let errors = contact::validate_form(&data);

                if !errors.is_empty() {
                    state.form.errors = errors;
                    return Task::none();
                }

                state.submissions.push(Submission::new(data));
                state.form.reset();

                let token = state.form.show_notice();
                state.saving += 1;

                Task::batch(vec![
                    Task::perform(
                        state
                            .store
                            .clone()
                            .save_submissions(state.submissions.clone()),
                        Message::Saved,
                    ),
                    Task::perform(tokio::time::sleep(contact::NOTICE_LIFETIME), move |()| {
                        Message::Contact(ContactMessage::NoticeExpired(token))
                    }),
                ])
            }
            ContactMessage::NoticeDismissed => {
                state.form.dismiss_notice();
                Task::none()
            }
            ContactMessage::NoticeExpired(token) => {
                state.form.expire_notice(token);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            Atelier::Loading => self.loading_view(),
            Atelier::Loaded(state) => self.loaded_view(state),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![keyboard::on_key_press(|key, modifiers| {
            let keyboard::Key::Named(key::Named::Tab) = key else {
                return None;
            };

            Some(Message::TabPressed {
                shift: modifiers.shift(),
            })
        })];

        // The rotation timer only exists while the pointer is off the
        // gallery; re-subscribing starts a fresh five-second interval.
        if let Atelier::Loaded(state) = self {
            if state.gallery.is_rotating() {
                subscriptions.push(
                    iced::time::every(gallery::ROTATION_INTERVAL)
                        .map(|_| Message::Gallery(GalleryMessage::Tick)),
                );
            }
        }

        Subscription::batch(subscriptions)
    }

    fn loading_view(&self) -> Element<'_, Message> {
        iced::widget::center(text("Loading...").width(Fill).align_x(Center).size(50)).into()
    }

    fn loaded_view<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        let featured = section("Featured", gallery_view(&state.gallery).map(Message::Gallery));

        let collection = section(
            "Collection",
            column![
                view_controls(&state.items, &state.favorites, &state.filter)
                    .map(Message::Collection),
                collection_view(&state.items, &state.favorites, &state.filter)
                    .map(Message::Collection),
            ]
            .spacing(16)
            .into(),
        );

        let contact = section("Contact", form_view(&state.form).map(Message::Contact));

        let content = column![self.nav_bar(), featured, collection, contact]
            .spacing(48)
            .padding(iced::Padding {
                top: 24.0,
                left: 32.0,
                bottom: 48.0,
                right: 32.0,
            });

        scrollable(content).id(main_scroll()).height(Fill).into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let links = SECTIONS.iter().fold(
            row![].spacing(8).align_y(Center),
            |links, &(anchor, label, _)| {
                links.push(
                    button(text(label).size(14))
                        .on_press(Message::AnchorPressed(anchor))
                        .padding(iced::Padding {
                            top: 5.0,
                            left: 12.0,
                            bottom: 5.0,
                            right: 12.0,
                        })
                        .style(button::text),
                )
            },
        );

        row![text("Atelier Noir").size(20).width(Fill), links]
            .align_y(Center)
            .into()
    }
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(22), body]
        .spacing(16)
        .width(Fill)
        .into()
}
