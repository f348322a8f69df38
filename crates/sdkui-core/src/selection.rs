//! Installed/global/local state of a single version and the rules for moving
//! between those states.

use std::fmt;

use sdkui_backend::{Identifier, VersionRecord};
use thiserror::Error;

/// Which version currently holds each role. At most one version per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePointers {
    pub global: Option<Identifier>,
    pub local: Option<Identifier>,
}

impl RolePointers {
    #[must_use]
    pub fn new(global: Option<Identifier>, local: Option<Identifier>) -> Self {
        Self { global, local }
    }

    #[must_use]
    pub fn is_global(&self, identifier: &Identifier) -> bool {
        self.global.as_ref() == Some(identifier)
    }

    #[must_use]
    pub fn is_local(&self, identifier: &Identifier) -> bool {
        self.local.as_ref() == Some(identifier)
    }

    #[must_use]
    pub fn holder(&self, role: Role) -> Option<&Identifier> {
        match role {
            Role::Global => self.global.as_ref(),
            Role::Local => self.local.as_ref(),
        }
    }

    /// Move `role` to `identifier`, returning the previous holder.
    pub fn assign(&mut self, role: Role, identifier: Identifier) -> Option<Identifier> {
        let slot = match role {
            Role::Global => &mut self.global,
            Role::Local => &mut self.local,
        };
        slot.replace(identifier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Global,
    Local,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SetGlobal,
    SetLocal,
    Install,
    Uninstall,
}

impl Action {
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::SetGlobal => Some(Role::Global),
            Self::SetLocal => Some(Role::Local),
            Self::Install | Self::Uninstall => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SetGlobal => "Set global",
            Self::SetLocal => "Set local",
            Self::Install => "Install",
            Self::Uninstall => "Uninstall",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetGlobal => write!(f, "set global"),
            Self::SetLocal => write!(f, "set local"),
            Self::Install => write!(f, "install"),
            Self::Uninstall => write!(f, "uninstall"),
        }
    }
}

/// Derived state of one version. Never stored; always recomputed from the
/// record and the current [`RolePointers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Uninstalled,
    InstalledOnly,
    InstalledAndLocal,
    InstalledAndGlobal,
    InstalledLocalAndGlobal,
}

impl SelectionState {
    #[must_use]
    pub fn derive(installed: bool, is_global: bool, is_local: bool) -> Self {
        match (installed, is_global, is_local) {
            (false, _, _) => Self::Uninstalled,
            (true, false, false) => Self::InstalledOnly,
            (true, false, true) => Self::InstalledAndLocal,
            (true, true, false) => Self::InstalledAndGlobal,
            (true, true, true) => Self::InstalledLocalAndGlobal,
        }
    }

    #[must_use]
    pub fn of(record: &VersionRecord, pointers: &RolePointers) -> Self {
        Self::derive(
            record.installed,
            pointers.is_global(&record.identifier),
            pointers.is_local(&record.identifier),
        )
    }

    #[must_use]
    pub fn is_installed(self) -> bool {
        self != Self::Uninstalled
    }

    #[must_use]
    pub fn is_global(self) -> bool {
        matches!(self, Self::InstalledAndGlobal | Self::InstalledLocalAndGlobal)
    }

    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self, Self::InstalledAndLocal | Self::InstalledLocalAndGlobal)
    }

    #[must_use]
    pub fn holds(self, role: Role) -> bool {
        match role {
            Role::Global => self.is_global(),
            Role::Local => self.is_local(),
        }
    }

    /// First role held, global before local.
    #[must_use]
    pub fn held_role(self) -> Option<Role> {
        if self.is_global() {
            Some(Role::Global)
        } else if self.is_local() {
            Some(Role::Local)
        } else {
            None
        }
    }

    /// State the version ends up in when `action` succeeds, or why the action
    /// is not allowed from here.
    ///
    /// # Errors
    /// Returns [`TransitionError::NotAvailable`] or [`TransitionError::RoleHeld`]
    /// for refusals a user can run into, and [`TransitionError::Invalid`] for
    /// requests the UI should never have offered.
    pub fn transition(
        self,
        action: Action,
        record: &VersionRecord,
    ) -> Result<SelectionState, TransitionError> {
        let invalid = || {
            TransitionError::Invalid(InvalidTransitionError {
                identifier: record.identifier.clone(),
                action,
                state: self,
            })
        };

        match action {
            Action::Install => {
                if self.is_installed() {
                    return Err(invalid());
                }
                if !record.available {
                    return Err(TransitionError::NotAvailable {
                        identifier: record.identifier.clone(),
                    });
                }
                Ok(Self::InstalledOnly)
            }
            Action::Uninstall => {
                if !self.is_installed() {
                    return Err(invalid());
                }
                if let Some(role) = self.held_role() {
                    return Err(TransitionError::RoleHeld {
                        identifier: record.identifier.clone(),
                        role,
                    });
                }
                Ok(Self::Uninstalled)
            }
            Action::SetGlobal | Action::SetLocal => {
                let role = action.role().ok_or_else(invalid)?;
                if !self.is_installed() || self.holds(role) {
                    return Err(invalid());
                }
                Ok(match role {
                    Role::Global => Self::derive(true, true, self.is_local()),
                    Role::Local => Self::derive(true, self.is_global(), true),
                })
            }
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninstalled => write!(f, "not installed"),
            Self::InstalledOnly => write!(f, "installed"),
            Self::InstalledAndLocal => write!(f, "installed, local"),
            Self::InstalledAndGlobal => write!(f, "installed, global"),
            Self::InstalledLocalAndGlobal => write!(f, "installed, local and global"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{identifier} is not available for download")]
    NotAvailable { identifier: Identifier },

    #[error("{identifier} is the {role} version; choose another {role} version before uninstalling it")]
    RoleHeld { identifier: Identifier, role: Role },

    #[error(transparent)]
    Invalid(#[from] InvalidTransitionError),
}

impl TransitionError {
    /// Refusals caused by a programming error rather than by the user.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} {identifier} while it is {state}")]
pub struct InvalidTransitionError {
    pub identifier: Identifier,
    pub action: Action,
    pub state: SelectionState,
}
