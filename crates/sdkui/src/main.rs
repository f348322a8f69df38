mod app;
mod error;
mod icon;
mod logging;
mod message;
mod settings;
mod state;
mod theme;
mod views;
mod widgets;

use iced::{Point, Size, window};

use app::Sdkui;
use settings::{AppSettings, WindowGeometry};

fn window_settings(settings: &AppSettings) -> window::Settings {
    let mut window = window::Settings {
        size: Size::new(1000.0, 680.0),
        min_size: Some(Size::new(760.0, 480.0)),
        icon: icon::window_icon(),
        exit_on_close_request: false,
        ..Default::default()
    };

    if let Some(geometry) = settings
        .window_geometry
        .filter(WindowGeometry::is_likely_visible)
    {
        window.size = Size::new(geometry.width, geometry.height);
        window.position = window::Position::Specific(Point::new(geometry.x, geometry.y));
    }

    window
}

pub fn main() -> iced::Result {
    let settings = AppSettings::load();
    logging::init_logging(settings.debug_logging, settings.max_log_size_bytes);
    log::info!(
        "Starting SDKMAN UI {} for candidate {}",
        env!("CARGO_PKG_VERSION"),
        settings.candidate
    );

    iced::application(Sdkui::new, Sdkui::update, Sdkui::view)
        .title(Sdkui::title)
        .theme(Sdkui::theme)
        .subscription(Sdkui::subscription)
        .window(window_settings(&settings))
        .run()
}
