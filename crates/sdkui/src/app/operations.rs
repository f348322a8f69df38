//! Confirmation flow for the four version actions.
//!
//! Handles messages: `RequestAction`, `Confirm`, `CloseModal`, `ActionFinished`

use log::{debug, error, info, warn};

use iced::Task;

use sdkui_backend::BackendError;
use sdkui_core::{Confirmation, DispatchError, Intent, Presenter, SelectionEvent, execute};

use crate::error::AppError;
use crate::message::Message;
use crate::state::{AppState, MainState, Modal};

use super::Sdkui;
use super::versions::log_selection_events;

fn report_rejection(state: &mut MainState, rejection: DispatchError) {
    if let DispatchError::Rejected(e) = &rejection
        && e.is_contract_violation()
    {
        error!("Offered an action the version cannot take: {e}");
        debug_assert!(!e.is_contract_violation(), "{e}");
        return;
    }

    let e = AppError::from(rejection);
    warn!("{e}");
    state.add_toast(e.to_string());
}

/// What a finished action asks of the app once it has been folded in.
#[derive(Debug, Default)]
struct NextSteps {
    errors: Vec<DispatchError>,
    refresh: bool,
    exit: bool,
}

impl Presenter for NextSteps {
    fn show_error(&mut self, error: &DispatchError) {
        self.errors.push(error.clone());
    }

    fn request_refresh(&mut self) {
        self.refresh = true;
    }

    fn request_exit(&mut self) {
        self.exit = true;
    }

    fn selection_changed(&mut self, events: &[SelectionEvent]) {
        log_selection_events(events);
    }
}

impl Sdkui {
    pub(super) fn handle_request_action(&mut self, intent: Intent) -> Task<Message> {
        let AppState::Main(state) = &mut self.state else {
            return Task::none();
        };

        if state.is_busy() || state.modal.is_some() {
            debug!("Ignoring {} {} while busy", intent.action, intent.identifier);
            return Task::none();
        }

        let Some(from) = state.selection.row(&intent.identifier).map(|row| row.state) else {
            report_rejection(
                state,
                DispatchError::UnknownVersion {
                    identifier: intent.identifier,
                },
            );
            return Task::none();
        };

        match state.selection.check(&intent) {
            Ok(to) => state.modal = Some(Modal::Confirm { intent, from, to }),
            Err(rejection) => report_rejection(state, rejection),
        }
        Task::none()
    }

    pub(super) fn handle_close_modal(&mut self) -> Task<Message> {
        self.handle_confirm(Confirmation::Cancel)
    }

    pub(super) fn handle_confirm(&mut self, confirmation: Confirmation) -> Task<Message> {
        let AppState::Main(state) = &mut self.state else {
            return Task::none();
        };

        let Some(Modal::Confirm { intent, .. }) = state.modal.take() else {
            return Task::none();
        };

        if confirmation == Confirmation::Cancel {
            debug!("{} {} cancelled", intent.action, intent.identifier);
            return Task::none();
        }

        // The list may have been reloaded while the dialog was open.
        if let Err(rejection) = state.selection.check(&intent) {
            report_rejection(state, rejection);
            return Task::none();
        }

        state.in_flight = Some(intent.clone());
        let manager = state.manager.clone();
        let candidate = state.selection.candidate().to_string();

        Task::perform(
            async move {
                let result = execute(manager.as_ref(), &candidate, &intent).await;
                (intent, result)
            },
            move |(intent, result)| Message::ActionFinished {
                intent,
                confirmation,
                result,
            },
        )
    }

    pub(super) fn handle_action_finished(
        &mut self,
        intent: &Intent,
        confirmation: Confirmation,
        result: Result<(), BackendError>,
    ) -> Task<Message> {
        let AppState::Main(state) = &mut self.state else {
            return Task::none();
        };

        state.in_flight = None;
        let mut next = NextSteps::default();
        state.selection.apply(intent, confirmation, result, &mut next);
        for e in next.errors {
            report_rejection(state, e);
        }

        if next.exit {
            info!("{} {} done, closing", intent.action, intent.identifier);
            self.exit_app()
        } else if next.refresh {
            self.request_snapshot()
        } else {
            Task::none()
        }
    }
}
