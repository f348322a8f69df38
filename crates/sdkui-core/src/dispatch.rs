//! Turning confirmed user intents into backend calls.
//!
//! [`execute`] makes the call itself. [`SdkSelection::apply`] folds the
//! result back into the rows and tells a [`Presenter`] what should happen
//! next. The two are split so that an event loop can run the call in the
//! background and feed the result back as a message.

use log::{debug, info, warn};
use sdkui_backend::{BackendError, Identifier, SdkManager, VersionRecord};
use thiserror::Error;

use crate::rows::{VersionRow, build_rows};
use crate::selection::{Action, Role, RolePointers, SelectionState, TransitionError};

/// Answer given in the confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Cancel,
    Confirm,
    ConfirmAndExit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub action: Action,
    pub identifier: Identifier,
}

impl Intent {
    #[must_use]
    pub fn new(action: Action, identifier: Identifier) -> Self {
        Self { action, identifier }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Failed to {action} {identifier}: {source}")]
    Api {
        action: Action,
        identifier: Identifier,
        #[source]
        source: BackendError,
    },

    #[error("Failed to refresh versions: {0}")]
    Refresh(#[source] BackendError),

    #[error(transparent)]
    Rejected(#[from] TransitionError),

    #[error("Unknown version: {identifier}")]
    UnknownVersion { identifier: Identifier },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    RoleChanged {
        role: Role,
        previous: Option<Identifier>,
        current: Option<Identifier>,
    },
    Rebuilt {
        rows: usize,
    },
}

/// Everything a refresh reads from the backend, taken together.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub versions: Vec<VersionRecord>,
    pub pointers: RolePointers,
}

/// Read both role pointers, then the version list.
///
/// # Errors
/// Returns the first backend error encountered.
pub async fn load_snapshot(
    manager: &dyn SdkManager,
    candidate: &str,
) -> Result<Snapshot, BackendError> {
    let global = manager.current_global(candidate).await?;
    let local = manager.current_local(candidate).await?;
    let versions = manager.list_versions(candidate).await?;

    debug!(
        "Loaded {} {candidate} versions (global: {global:?}, local: {local:?})",
        versions.len()
    );

    Ok(Snapshot {
        versions,
        pointers: RolePointers::new(global, local),
    })
}

/// Perform the single backend call behind `intent`.
///
/// # Errors
/// Returns whatever the backend reports.
pub async fn execute(
    manager: &dyn SdkManager,
    candidate: &str,
    intent: &Intent,
) -> Result<(), BackendError> {
    let Intent { action, identifier } = intent;
    info!("Running {action} for {candidate} {identifier}");

    let result = match action {
        Action::SetGlobal => manager.set_global(candidate, identifier).await,
        Action::SetLocal => manager.set_local(candidate, identifier).await,
        Action::Install => manager.install(candidate, identifier).await,
        Action::Uninstall => manager.uninstall(candidate, identifier).await,
    };

    if let Err(e) = &result {
        warn!("{action} {candidate} {identifier} failed: {e}");
    }
    result
}

/// Where the outcome of a finished call is reported.
///
/// Every call on it happens after the backend call has resolved.
pub trait Presenter {
    fn show_error(&mut self, error: &DispatchError);

    /// Reload the list from the backend.
    fn request_refresh(&mut self);

    /// Terminate without reloading.
    fn request_exit(&mut self);

    fn selection_changed(&mut self, _events: &[SelectionEvent]) {}
}

/// Rows and role pointers for one candidate.
#[derive(Debug, Clone)]
pub struct SdkSelection {
    candidate: String,
    versions: Vec<VersionRecord>,
    pointers: RolePointers,
    rows: Vec<VersionRow>,
}

impl SdkSelection {
    #[must_use]
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            versions: Vec::new(),
            pointers: RolePointers::default(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_snapshot(candidate: impl Into<String>, snapshot: Snapshot) -> Self {
        let mut selection = Self::new(candidate);
        selection.replace(snapshot);
        selection
    }

    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    #[must_use]
    pub fn rows(&self) -> &[VersionRow] {
        &self.rows
    }

    #[must_use]
    pub fn pointers(&self) -> &RolePointers {
        &self.pointers
    }

    #[must_use]
    pub fn row(&self, identifier: &Identifier) -> Option<&VersionRow> {
        self.rows
            .iter()
            .find(|row| &row.record.identifier == identifier)
    }

    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.state.is_installed()).count()
    }

    /// Swap in a fresh snapshot and rebuild every row.
    pub fn replace(&mut self, snapshot: Snapshot) -> Vec<SelectionEvent> {
        let Snapshot { versions, pointers } = snapshot;
        let mut events = Vec::new();

        for role in [Role::Global, Role::Local] {
            let previous = self.pointers.holder(role);
            let current = pointers.holder(role);
            if previous != current {
                events.push(SelectionEvent::RoleChanged {
                    role,
                    previous: previous.cloned(),
                    current: current.cloned(),
                });
            }
        }

        self.versions = versions;
        self.pointers = pointers;
        events.push(self.rebuild());
        events
    }

    /// State the target version will reach if `intent` goes through.
    ///
    /// # Errors
    /// Returns [`DispatchError::UnknownVersion`] when the identifier has no
    /// row, or [`DispatchError::Rejected`] when the transition is refused.
    pub fn check(&self, intent: &Intent) -> Result<SelectionState, DispatchError> {
        let row = self
            .row(&intent.identifier)
            .ok_or_else(|| DispatchError::UnknownVersion {
                identifier: intent.identifier.clone(),
            })?;

        Ok(row.state.transition(intent.action, &row.record)?)
    }

    /// Fold the result of the backend call for `intent` into the selection
    /// and report what happens next.
    ///
    /// A failed call leaves the pointers and rows untouched, shows the error
    /// and asks for a reload so partially applied changes become visible; it
    /// never exits. A successful role change moves the pointer and rebuilds
    /// the rows, so the previous holder demotes in the same step. Success then
    /// reloads for [`Confirmation::Confirm`] and exits for
    /// [`Confirmation::ConfirmAndExit`]. A cancelled intent made no call and
    /// reports nothing.
    pub fn apply<P: Presenter + ?Sized>(
        &mut self,
        intent: &Intent,
        confirmation: Confirmation,
        result: Result<(), BackendError>,
        presenter: &mut P,
    ) {
        if confirmation == Confirmation::Cancel {
            debug!("{} {} cancelled", intent.action, intent.identifier);
            return;
        }

        if let Err(source) = result {
            presenter.show_error(&DispatchError::Api {
                action: intent.action,
                identifier: intent.identifier.clone(),
                source,
            });
            presenter.request_refresh();
            return;
        }

        if let Some(role) = intent.action.role() {
            let mut events = Vec::new();
            let previous = self.pointers.assign(role, intent.identifier.clone());
            if previous.as_ref() != Some(&intent.identifier) {
                events.push(SelectionEvent::RoleChanged {
                    role,
                    previous,
                    current: Some(intent.identifier.clone()),
                });
            }
            events.push(self.rebuild());
            presenter.selection_changed(&events);
        }

        match confirmation {
            Confirmation::Confirm => presenter.request_refresh(),
            Confirmation::ConfirmAndExit => presenter.request_exit(),
            Confirmation::Cancel => {}
        }
    }

    fn rebuild(&mut self) -> SelectionEvent {
        self.rows = build_rows(&self.versions, &self.pointers);
        SelectionEvent::Rebuilt {
            rows: self.rows.len(),
        }
    }
}
