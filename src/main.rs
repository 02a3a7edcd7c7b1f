#![windows_subsystem = "windows"]

mod app;
mod collection;
mod contact;
mod gallery;
mod state;
mod ui;

use iced::window;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(app::Atelier::title, app::Atelier::update, app::Atelier::view)
        .subscription(app::Atelier::subscription)
        .window(window::Settings {
            size: (920.0, 720.0).into(),
            min_size: Some((760.0, 560.0).into()),
            ..window::Settings::default()
        })
        .run_with(app::Atelier::new)
}
