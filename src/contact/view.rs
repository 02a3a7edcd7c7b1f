use iced::widget::{button, column, container, row, text, text_input};
use iced::{Center, Element, Fill, Theme};

use crate::ui::icons::close_icon;
use crate::ui::styles;

use super::{ContactForm, ContactMessage};

pub fn form_view(form: &ContactForm) -> Element<'_, ContactMessage> {
    let mut content = column![].spacing(12).max_width(560);

    // Feedback goes above the fields, errors replacing whatever the last
    // attempt left behind.
    if form.notice_visible() {
        content = content.push(success_notice());
    }

    for error in &form.errors {
        content = content.push(text(error.as_str()).size(14).style(styles::danger));
    }

    let name = text_input("Your name", &form.name)
        .id(text_input::Id::new("contact-name"))
        .on_input(ContactMessage::NameChanged)
        .padding(10);

    let email = text_input("Email address", &form.email)
        .id(text_input::Id::new("contact-email"))
        .on_input(ContactMessage::EmailChanged)
        .padding(10);

    let message = text_input("What would you like to ask?", &form.message)
        .id(text_input::Id::new("contact-message"))
        .on_input(ContactMessage::MessageChanged)
        .on_submit(ContactMessage::Submit)
        .padding(10);

    let send = button(text("Send Message"))
        .on_press(ContactMessage::Submit)
        .padding(iced::Padding {
            top: 8.0,
            left: 24.0,
            bottom: 8.0,
            right: 24.0,
        })
        .style(button::primary);

    content
        .push(name)
        .push(email)
        .push(message)
        .push(send)
        .into()
}

fn success_notice<'a>() -> Element<'a, ContactMessage> {
    let body = text("Thank you for your message! We will get back to you soon.")
        .size(14)
        .width(Fill);

    let dismiss = button(close_icon())
        .on_press(ContactMessage::NoticeDismissed)
        .padding(4)
        .style(button::text);

    container(row![body, dismiss].spacing(8).align_y(Center))
        .padding(10)
        .width(Fill)
        .style(|theme: &Theme| {
            let success = theme.extended_palette().success;

            container::Style {
                background: Some(success.weak.color.into()),
                text_color: Some(success.weak.text),
                border: iced::Border {
                    color: success.base.color,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
