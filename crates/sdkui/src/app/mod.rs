mod async_helpers;
mod init;
mod operations;
mod startup;
mod update;
mod versions;
mod window;

use std::sync::Arc;
use std::time::Duration;

use iced::keyboard::{Key, Modifiers, key::Named};
use iced::{Element, Subscription, Task, Theme};

use sdkui_backend::BackendProvider;
use sdkui_core::Role;
use sdkui_sdkman::SdkmanProvider;

use crate::message::Message;
use crate::settings::{AppSettings, ThemeSetting};
use crate::state::AppState;
use crate::theme::{dark_theme, light_theme};
use crate::views;

pub struct Sdkui {
    pub(crate) state: AppState,
    pub(crate) settings: AppSettings,
    pub(crate) window_size: Option<iced::Size>,
    pub(crate) window_position: Option<iced::Point>,
    pub(crate) provider: Arc<dyn BackendProvider>,
    pub(crate) system_theme_mode: iced::theme::Mode,
}

fn build_provider(settings: &AppSettings) -> Arc<dyn BackendProvider> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http_timeout_secs))
        .user_agent(format!("sdkui/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();

    Arc::new(
        SdkmanProvider::new()
            .with_sdkman_dir(settings.sdkman_dir.clone())
            .with_candidates_api(settings.candidates_api.clone())
            .with_http_client(http_client)
            .with_timeouts(settings.backend_timeouts()),
    )
}

/// Keyboard shortcuts: `Esc` answers an open confirmation with Cancel and
/// Ctrl+R (Cmd+R on macOS) reloads the list.
fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if *key == Key::Named(Named::Escape) {
        return Some(Message::CloseModal);
    }

    #[cfg(target_os = "macos")]
    let cmd = modifiers.command();
    #[cfg(not(target_os = "macos"))]
    let cmd = modifiers.control();

    match key {
        Key::Character(c) if cmd && c.as_str().eq_ignore_ascii_case("r") => Some(Message::Refresh),
        _ => None,
    }
}

impl Sdkui {
    pub fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::load();
        let provider = build_provider(&settings);

        let app = Self {
            state: AppState::Loading,
            settings,
            window_size: None,
            window_position: None,
            provider,
            system_theme_mode: iced::theme::Mode::None,
        };

        let init_task = app.detection_task();
        let theme_task = iced::system::theme().map(Message::SystemThemeChanged);

        (app, Task::batch([init_task, theme_task]))
    }

    pub fn title(&self) -> String {
        match &self.state {
            AppState::Loading => "SDKMAN UI".to_string(),
            AppState::SdkmanMissing(_) => "SDKMAN UI - Setup".to_string(),
            AppState::Main(state) => {
                let candidate = state.selection.candidate();
                match state.selection.pointers().holder(Role::Global) {
                    Some(global) => format!("SDKMAN UI - {candidate} {global}"),
                    None => format!("SDKMAN UI - {candidate}"),
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            AppState::Loading => views::loading::view(),
            AppState::SdkmanMissing(missing) => views::sdkman_missing::view(missing),
            AppState::Main(state) => views::main_view::view(state, &self.settings),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeSetting::System => {
                if self.system_theme_mode == iced::theme::Mode::Dark {
                    dark_theme()
                } else {
                    light_theme()
                }
            }
            ThemeSetting::Light => light_theme(),
            ThemeSetting::Dark => dark_theme(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard = iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = event
            {
                shortcut(&key, modifiers)
            } else {
                None
            }
        });

        let window_events = iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Window(window_event) = event {
                Some(Message::WindowEvent(window_event))
            } else {
                None
            }
        });

        let toast_tick = if self.has_toasts() {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        let theme_changes = iced::system::theme_changes().map(Message::SystemThemeChanged);

        Subscription::batch([keyboard, window_events, toast_tick, theme_changes])
    }

    fn has_toasts(&self) -> bool {
        matches!(&self.state, AppState::Main(state) if !state.toasts.is_empty())
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> Sdkui {
    use std::path::PathBuf;

    use sdkui_backend::{BackendDetection, Identifier, VersionRecord};
    use sdkui_core::{RolePointers, SdkSelection, Snapshot};

    use crate::state::MainState;

    let id = |value: &str| -> Identifier { value.parse().expect("valid identifier in test") };
    let settings = AppSettings::default();
    let provider = build_provider(&settings);
    let detection = BackendDetection {
        found: true,
        sdkman_dir: Some(PathBuf::from("/tmp/sdkui-test-sdkman")),
        init_script: None,
        version: Some("5.18.2".to_string()),
    };

    let mut state = MainState::new("java", provider.create_manager(&detection), None);
    state.selection = SdkSelection::from_snapshot(
        "java",
        Snapshot {
            versions: vec![
                VersionRecord::plain(id("21.0.2-tem"), true, true),
                VersionRecord::plain(id("17.0.10-tem"), true, true),
                VersionRecord::plain(id("11.0.22-tem"), false, true),
                VersionRecord::plain(id("8.0.402-old"), false, false),
            ],
            pointers: RolePointers::new(Some(id("21.0.2-tem")), None),
        },
    );

    Sdkui {
        state: AppState::Main(Box::new(state)),
        settings,
        window_size: None,
        window_position: None,
        provider,
        system_theme_mode: iced::theme::Mode::None,
    }
}

#[cfg(test)]
impl Sdkui {
    pub(crate) fn main_state(&self) -> &crate::state::MainState {
        match &self.state {
            AppState::Main(state) => state,
            AppState::Loading | AppState::SdkmanMissing(_) => panic!("expected the main view"),
        }
    }

    pub(crate) fn main_state_mut(&mut self) -> &mut crate::state::MainState {
        match &mut self.state {
            AppState::Main(state) => state,
            AppState::Loading | AppState::SdkmanMissing(_) => panic!("expected the main view"),
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Key, Modifiers, key::Named};

    use super::{shortcut, test_app};
    use crate::message::Message;
    use crate::settings::ThemeSetting;
    use crate::state::{AppState, MissingState};
    use crate::theme::is_dark;

    #[test]
    fn title_shows_candidate_and_global_version() {
        let app = test_app();

        assert_eq!(app.title(), "SDKMAN UI - java 21.0.2-tem");
    }

    #[test]
    fn title_outside_main_view_is_plain() {
        let mut app = test_app();
        app.state = AppState::Loading;
        assert_eq!(app.title(), "SDKMAN UI");

        app.state = AppState::SdkmanMissing(MissingState::default());
        assert_eq!(app.title(), "SDKMAN UI - Setup");
    }

    #[test]
    fn escape_closes_the_modal() {
        let message = shortcut(&Key::Named(Named::Escape), Modifiers::empty());

        assert!(matches!(message, Some(Message::CloseModal)));
    }

    #[test]
    fn command_r_refreshes_and_plain_r_does_not() {
        #[cfg(target_os = "macos")]
        let cmd = Modifiers::LOGO;
        #[cfg(not(target_os = "macos"))]
        let cmd = Modifiers::CTRL;

        assert!(matches!(
            shortcut(&Key::Character("r".into()), cmd),
            Some(Message::Refresh)
        ));
        assert!(shortcut(&Key::Character("r".into()), Modifiers::empty()).is_none());
    }

    #[test]
    fn explicit_theme_setting_overrides_system_mode() {
        let mut app = test_app();
        app.system_theme_mode = iced::theme::Mode::Dark;
        app.settings.theme = ThemeSetting::Light;

        assert!(!is_dark(&app.theme()));

        app.settings.theme = ThemeSetting::System;
        assert!(is_dark(&app.theme()));
    }
}
