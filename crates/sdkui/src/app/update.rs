use iced::Task;

use crate::message::Message;
use crate::state::AppState;

use super::Sdkui;

type DispatchResult = Result<Task<Message>, Box<Message>>;

impl Sdkui {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let message = match self.dispatch_lifecycle(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };
        let message = match self.dispatch_versions(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };
        let message = match self.dispatch_operations(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };
        let message = match self.dispatch_system(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };

        let _ = message;
        Task::none()
    }

    fn dispatch_lifecycle(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::Initialized(result) => Ok(self.handle_initialized(result)),
            Message::RetryDetection => Ok(self.retry_detection()),
            other => Err(Box::new(other)),
        }
    }

    fn dispatch_versions(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::Refresh => Ok(self.handle_refresh()),
            Message::SnapshotLoaded {
                request_seq,
                result,
            } => Ok(self.handle_snapshot_loaded(request_seq, result)),
            Message::SearchChanged(query) => {
                self.handle_search_changed(query);
                Ok(Task::none())
            }
            Message::InstalledOnlyToggled(installed_only) => {
                self.handle_installed_only_toggled(installed_only);
                Ok(Task::none())
            }
            Message::VersionRowHovered(identifier) => {
                self.handle_row_hovered(identifier);
                Ok(Task::none())
            }
            other => Err(Box::new(other)),
        }
    }

    fn dispatch_operations(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::RequestAction(intent) => Ok(self.handle_request_action(intent)),
            Message::Confirm(confirmation) => Ok(self.handle_confirm(confirmation)),
            Message::CloseModal => Ok(self.handle_close_modal()),
            Message::ActionFinished {
                intent,
                confirmation,
                result,
            } => Ok(self.handle_action_finished(&intent, confirmation, result)),
            other => Err(Box::new(other)),
        }
    }

    fn dispatch_system(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::NoOp => Ok(Task::none()),
            Message::Tick => {
                let timeout = self.settings.toast_timeout_secs;
                if let AppState::Main(state) = &mut self.state {
                    state.prune_toasts(timeout);
                }
                Ok(Task::none())
            }
            Message::DismissToast(id) => {
                if let AppState::Main(state) = &mut self.state {
                    state.dismiss_toast(id);
                }
                Ok(Task::none())
            }
            Message::WindowEvent(
                iced::window::Event::CloseRequested | iced::window::Event::Closed,
            ) => Ok(self.exit_app()),
            Message::WindowEvent(iced::window::Event::Opened { position, size }) => {
                Ok(self.handle_window_opened(position, size))
            }
            Message::WindowEvent(iced::window::Event::Resized(size)) => {
                Ok(self.handle_window_resized(size))
            }
            Message::WindowEvent(iced::window::Event::Moved(point)) => {
                Ok(self.handle_window_moved(point))
            }
            Message::WindowEvent(_) => Ok(Task::none()),
            Message::SystemThemeChanged(mode) => {
                self.system_theme_mode = mode;
                Ok(Task::none())
            }
            other => Err(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use sdkui_core::{Action, Intent};

    use super::super::test_app;
    use crate::message::Message;

    #[test]
    fn dismiss_toast_removes_only_that_toast() {
        let mut app = test_app();
        app.main_state_mut().add_toast("first".to_string());
        app.main_state_mut().add_toast("second".to_string());
        let first_id = app.main_state().toasts[0].id;

        let _ = app.update(Message::DismissToast(first_id));

        let toasts = &app.main_state().toasts;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "second");
    }

    #[test]
    fn tick_prunes_expired_toasts() {
        let mut app = test_app();
        app.main_state_mut().add_toast("old".to_string());
        app.main_state_mut().toasts[0].created_at = Instant::now()
            .checked_sub(Duration::from_secs(60))
            .expect("instant should support subtraction");

        let _ = app.update(Message::Tick);

        assert!(app.main_state().toasts.is_empty());
    }

    #[test]
    fn system_theme_change_is_recorded() {
        let mut app = test_app();

        let _ = app.update(Message::SystemThemeChanged(iced::theme::Mode::Dark));

        assert_eq!(app.system_theme_mode, iced::theme::Mode::Dark);
    }

    #[test]
    fn escape_path_cancels_open_confirmation() {
        let mut app = test_app();
        let _ = app.update(Message::RequestAction(Intent::new(
            Action::SetLocal,
            "17.0.10-tem".parse().expect("valid identifier in test"),
        )));
        assert!(app.main_state().modal.is_some());

        let _ = app.update(Message::CloseModal);

        assert!(app.main_state().modal.is_none());
        assert!(!app.main_state().is_busy());
    }

    #[test]
    fn window_events_track_geometry() {
        let mut app = test_app();

        let _ = app.update(Message::WindowEvent(iced::window::Event::Resized(
            iced::Size::new(800.0, 600.0),
        )));
        let _ = app.update(Message::WindowEvent(iced::window::Event::Moved(
            iced::Point::new(5.0, 6.0),
        )));

        assert_eq!(app.window_size, Some(iced::Size::new(800.0, 600.0)));
        assert_eq!(app.window_position, Some(iced::Point::new(5.0, 6.0)));
    }
}
