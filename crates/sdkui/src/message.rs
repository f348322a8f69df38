use sdkui_backend::{BackendDetection, BackendError, Identifier};
use sdkui_core::{Confirmation, Intent, Snapshot};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    Tick,

    Initialized(Result<BackendDetection, AppError>),
    RetryDetection,

    Refresh,
    SnapshotLoaded {
        request_seq: u64,
        result: Result<Snapshot, AppError>,
    },

    SearchChanged(String),
    InstalledOnlyToggled(bool),
    VersionRowHovered(Option<Identifier>),

    RequestAction(Intent),
    Confirm(Confirmation),
    CloseModal,
    ActionFinished {
        intent: Intent,
        confirmation: Confirmation,
        result: Result<(), BackendError>,
    },

    DismissToast(usize),

    WindowEvent(iced::window::Event),
    SystemThemeChanged(iced::theme::Mode),
}
