//! Selection logic for SDK versions: what state each version is in, which
//! controls a row offers, and how a confirmed action is carried out.

pub mod dispatch;
pub mod rows;
pub mod selection;

pub use dispatch::{
    Confirmation, DispatchError, Intent, Presenter, SdkSelection, SelectionEvent, Snapshot,
    execute, load_snapshot,
};
pub use rows::{Control, RowControls, VersionRow, build_rows};
pub use selection::{
    Action, InvalidTransitionError, Role, RolePointers, SelectionState, TransitionError,
};
