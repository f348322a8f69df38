use std::sync::Arc;

use log::{error, info};

use iced::Task;

use sdkui_backend::{BackendDetection, BackendProvider};

use crate::error::AppError;
use crate::message::Message;
use crate::state::{AppState, MainState, MissingState};

use super::Sdkui;
use super::startup::run_one_shot;

async fn detect(provider: Arc<dyn BackendProvider>) -> Result<BackendDetection, AppError> {
    run_one_shot("sdkman-detect", move || provider.detect())
        .await
        .map_err(AppError::detection_failed)
}

impl Sdkui {
    pub(super) fn detection_task(&self) -> Task<Message> {
        Task::perform(detect(Arc::clone(&self.provider)), Message::Initialized)
    }

    pub(super) fn retry_detection(&mut self) -> Task<Message> {
        info!("Retrying SDKMAN detection");
        self.state = AppState::Loading;
        self.detection_task()
    }

    pub(super) fn handle_initialized(
        &mut self,
        result: Result<BackendDetection, AppError>,
    ) -> Task<Message> {
        let detection = match result {
            Ok(detection) => detection,
            Err(e) => {
                error!("{e}");
                self.state = AppState::SdkmanMissing(MissingState {
                    sdkman_dir: None,
                    reason: Some(e.to_string()),
                });
                return Task::none();
            }
        };

        if !detection.found {
            info!("SDKMAN not found, showing setup screen");
            self.state = AppState::SdkmanMissing(MissingState {
                sdkman_dir: detection.sdkman_dir,
                reason: None,
            });
            return Task::none();
        }

        let manager = self.provider.create_manager(&detection);
        info!(
            "Using {} at {} for {}",
            self.provider.display_name(),
            manager.backend_info().sdkman_dir.display(),
            self.settings.candidate
        );

        self.state = AppState::Main(Box::new(MainState::new(
            self.settings.candidate.clone(),
            manager,
            detection.version,
        )));
        self.request_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sdkui_backend::BackendDetection;

    use super::super::test_app;
    use crate::error::AppError;
    use crate::state::AppState;

    #[test]
    fn missing_installation_shows_setup_screen() {
        let mut app = test_app();

        let _ = app.handle_initialized(Ok(BackendDetection {
            found: false,
            sdkman_dir: Some(PathBuf::from("/home/dev/.sdkman")),
            init_script: None,
            version: None,
        }));

        let AppState::SdkmanMissing(missing) = &app.state else {
            panic!("expected setup screen");
        };
        assert_eq!(
            missing.sdkman_dir.as_deref(),
            Some(std::path::Path::new("/home/dev/.sdkman"))
        );
        assert!(missing.reason.is_none());
    }

    #[test]
    fn failed_detection_keeps_the_reason() {
        let mut app = test_app();

        let _ = app.handle_initialized(Err(AppError::detection_failed("worker stopped")));

        let AppState::SdkmanMissing(missing) = &app.state else {
            panic!("expected setup screen");
        };
        assert_eq!(
            missing.reason.as_deref(),
            Some("SDKMAN detection failed: worker stopped")
        );
    }

    #[test]
    fn found_installation_enters_main_view_and_starts_loading() {
        let mut app = test_app();
        app.state = AppState::Loading;

        let _ = app.handle_initialized(Ok(BackendDetection {
            found: true,
            sdkman_dir: Some(PathBuf::from("/tmp/sdkui-test-sdkman")),
            init_script: Some(PathBuf::from("/tmp/sdkui-test-sdkman/bin/sdkman-init.sh")),
            version: Some("5.18.2".to_string()),
        }));

        let AppState::Main(state) = &app.state else {
            panic!("expected main view");
        };
        assert_eq!(state.selection.candidate(), "java");
        assert_eq!(state.sdkman_version.as_deref(), Some("5.18.2"));
        assert!(state.loading);
        assert_eq!(state.load_request_seq, 1);
    }
}
