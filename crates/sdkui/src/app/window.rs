//! Window lifecycle and geometry persistence.
//!
//! Handles messages: `WindowEvent`

use log::{info, warn};

use iced::Task;

use crate::error::AppError;
use crate::message::Message;
use crate::settings::WindowGeometry;

use super::Sdkui;

impl Sdkui {
    pub(super) fn handle_window_opened(
        &mut self,
        position: Option<iced::Point>,
        size: iced::Size,
    ) -> Task<Message> {
        self.window_size = Some(size);
        if position.is_some() {
            self.window_position = position;
        }
        Task::none()
    }

    pub(super) fn handle_window_resized(&mut self, size: iced::Size) -> Task<Message> {
        self.window_size = Some(size);
        Task::none()
    }

    pub(super) fn handle_window_moved(&mut self, point: iced::Point) -> Task<Message> {
        self.window_position = Some(point);
        Task::none()
    }

    /// Close the window. Reached from the close button and from a confirmed
    /// "Yes, and close".
    pub(super) fn exit_app(&mut self) -> Task<Message> {
        if self.remember_window_geometry() {
            self.save_settings();
        }
        info!("Exiting application");
        iced::exit()
    }

    /// Copy the last known size and position into the settings. Returns
    /// whether anything changed.
    pub(super) fn remember_window_geometry(&mut self) -> bool {
        let (Some(size), Some(pos)) = (self.window_size, self.window_position) else {
            return false;
        };

        let geometry = WindowGeometry {
            width: size.width,
            height: size.height,
            x: pos.x,
            y: pos.y,
        };
        if self.settings.window_geometry == Some(geometry) {
            return false;
        }

        self.settings.window_geometry = Some(geometry);
        true
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!("{}", AppError::operation_failed("Saving settings", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_app;
    use crate::settings::WindowGeometry;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < f32::EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn opened_event_seeds_size_and_position() {
        let mut app = test_app();

        let _ = app.handle_window_opened(
            Some(iced::Point::new(40.0, 60.0)),
            iced::Size::new(1000.0, 680.0),
        );

        assert_eq!(app.window_size, Some(iced::Size::new(1000.0, 680.0)));
        assert_eq!(app.window_position, Some(iced::Point::new(40.0, 60.0)));
    }

    #[test]
    fn remember_geometry_stores_latest_size_and_position() {
        let mut app = test_app();
        let _ = app.handle_window_resized(iced::Size::new(1200.0, 800.0));
        let _ = app.handle_window_moved(iced::Point::new(100.0, 150.0));

        assert!(app.remember_window_geometry());

        let geometry = app
            .settings
            .window_geometry
            .expect("window geometry should be stored");
        assert_close(geometry.width, 1200.0);
        assert_close(geometry.height, 800.0);
        assert_close(geometry.x, 100.0);
        assert_close(geometry.y, 150.0);
    }

    #[test]
    fn remember_geometry_is_noop_without_position() {
        let mut app = test_app();
        app.settings.window_geometry = None;
        app.window_size = Some(iced::Size::new(1200.0, 800.0));

        assert!(!app.remember_window_geometry());
        assert!(app.settings.window_geometry.is_none());
    }

    #[test]
    fn unchanged_geometry_is_not_saved_again() {
        let mut app = test_app();
        app.settings.window_geometry = Some(WindowGeometry {
            width: 900.0,
            height: 600.0,
            x: 10.0,
            y: 20.0,
        });
        app.window_size = Some(iced::Size::new(900.0, 600.0));
        app.window_position = Some(iced::Point::new(10.0, 20.0));

        assert!(!app.remember_window_geometry());
    }
}
