//! Loading the version list and the view-side filters over it.
//!
//! Handles messages: `Refresh`, `SnapshotLoaded`, `SearchChanged`,
//! `InstalledOnlyToggled`, `VersionRowHovered`

use std::time::Duration;

use log::{debug, info, warn};

use iced::Task;

use sdkui_core::{SelectionEvent, Snapshot, load_snapshot};

use crate::error::AppError;
use crate::message::Message;
use crate::state::AppState;

use super::Sdkui;
use super::async_helpers::run_with_timeout;

pub(super) fn log_selection_events(events: &[SelectionEvent]) {
    for event in events {
        match event {
            SelectionEvent::RoleChanged {
                role,
                previous,
                current,
            } => info!("{role} version changed: {previous:?} -> {current:?}"),
            SelectionEvent::Rebuilt { rows } => debug!("Rebuilt {rows} version rows"),
        }
    }
}

impl Sdkui {
    /// Start a fresh load. Responses to earlier requests are dropped when
    /// they arrive.
    pub(super) fn request_snapshot(&mut self) -> Task<Message> {
        let timeout = Duration::from_secs(self.settings.fetch_timeout_secs);
        let AppState::Main(state) = &mut self.state else {
            return Task::none();
        };

        state.load_request_seq += 1;
        state.loading = true;
        let request_seq = state.load_request_seq;
        let manager = state.manager.clone();
        let candidate = state.selection.candidate().to_string();
        debug!("Loading {candidate} versions (request {request_seq})");

        Task::perform(
            async move {
                run_with_timeout(
                    timeout,
                    "Loading versions",
                    load_snapshot(manager.as_ref(), &candidate),
                    AppError::snapshot_load_failed,
                )
                .await
            },
            move |result| Message::SnapshotLoaded {
                request_seq,
                result,
            },
        )
    }

    pub(super) fn handle_refresh(&mut self) -> Task<Message> {
        match &self.state {
            AppState::Main(state) if state.is_busy() => {
                debug!("Refresh skipped while an action is running");
                Task::none()
            }
            AppState::Main(_) => self.request_snapshot(),
            AppState::Loading | AppState::SdkmanMissing(_) => Task::none(),
        }
    }

    pub(super) fn handle_snapshot_loaded(
        &mut self,
        request_seq: u64,
        result: Result<Snapshot, AppError>,
    ) -> Task<Message> {
        let AppState::Main(state) = &mut self.state else {
            return Task::none();
        };

        if request_seq != state.load_request_seq {
            debug!(
                "Ignoring stale version list (request {request_seq}, latest {})",
                state.load_request_seq
            );
            return Task::none();
        }

        state.loading = false;
        match result {
            Ok(snapshot) => log_selection_events(&state.selection.replace(snapshot)),
            Err(e) => {
                warn!("{e}");
                state.add_toast(e.to_string());
            }
        }
        Task::none()
    }

    pub(super) fn handle_search_changed(&mut self, query: String) {
        if let AppState::Main(state) = &mut self.state {
            state.search_query = query;
        }
    }

    pub(super) fn handle_installed_only_toggled(&mut self, installed_only: bool) {
        if let AppState::Main(state) = &mut self.state {
            state.installed_only = installed_only;
        }
    }

    pub(super) fn handle_row_hovered(&mut self, identifier: Option<sdkui_backend::Identifier>) {
        if let AppState::Main(state) = &mut self.state {
            state.hovered = identifier;
        }
    }
}
