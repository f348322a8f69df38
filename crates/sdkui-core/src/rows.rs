use std::collections::HashSet;

use log::warn;
use sdkui_backend::VersionRecord;

use crate::selection::{RolePointers, SelectionState};

/// How a row control should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Hidden,
    Disabled,
    Enabled,
}

impl Control {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    pub global: Control,
    pub local: Control,
    pub install: Control,
}

impl RowControls {
    #[must_use]
    pub fn for_state(state: SelectionState, available: bool) -> Self {
        let role_control = |held: bool| {
            if !state.is_installed() {
                Control::Hidden
            } else if held {
                Control::Disabled
            } else {
                Control::Enabled
            }
        };

        let install = match (state.is_installed(), available) {
            (false, true) => Control::Enabled,
            (false, false) => Control::Disabled,
            (true, _) if state.held_role().is_some() => Control::Disabled,
            (true, _) => Control::Enabled,
        };

        Self {
            global: role_control(state.is_global()),
            local: role_control(state.is_local()),
            install,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRow {
    pub record: VersionRecord,
    pub state: SelectionState,
    pub controls: RowControls,
}

impl VersionRow {
    #[must_use]
    pub fn new(record: VersionRecord, pointers: &RolePointers) -> Self {
        let state = SelectionState::of(&record, pointers);
        let controls = RowControls::for_state(state, record.available);
        Self {
            record,
            state,
            controls,
        }
    }
}

/// One row per version, in input order, against a single snapshot of the
/// role pointers. Later duplicates of an identifier are dropped.
#[must_use]
pub fn build_rows(versions: &[VersionRecord], pointers: &RolePointers) -> Vec<VersionRow> {
    let mut seen = HashSet::with_capacity(versions.len());
    let mut rows = Vec::with_capacity(versions.len());

    for record in versions {
        if !seen.insert(&record.identifier) {
            warn!("Dropping duplicate version {}", record.identifier);
            continue;
        }
        rows.push(VersionRow::new(record.clone(), pointers));
    }

    rows
}

#[cfg(test)]
mod tests {
    use sdkui_backend::Identifier;

    use super::*;

    fn id(value: &str) -> Identifier {
        value.parse().expect("valid identifier in test")
    }

    fn record(identifier: &str, installed: bool, available: bool) -> VersionRecord {
        VersionRecord::plain(id(identifier), installed, available)
    }

    #[test]
    fn scenario_global_installed_and_uninstalled_available() {
        let versions = vec![record("21-tem", true, true), record("17-tem", false, true)];
        let pointers = RolePointers::new(Some(id("21-tem")), None);

        let rows = build_rows(&versions, &pointers);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, SelectionState::InstalledAndGlobal);
        assert_eq!(rows[0].controls.global, Control::Disabled);
        assert_eq!(rows[0].controls.local, Control::Enabled);

        assert_eq!(rows[1].state, SelectionState::Uninstalled);
        assert!(!rows[1].controls.global.is_visible());
        assert!(!rows[1].controls.local.is_visible());
        assert_eq!(rows[1].controls.install, Control::Enabled);
    }

    #[test]
    fn order_is_preserved() {
        let versions = vec![
            record("8.0.402-tem", false, true),
            record("21.0.2-tem", true, true),
            record("17.0.9-tem", true, true),
        ];

        let rows = build_rows(&versions, &RolePointers::default());

        let ids: Vec<_> = rows.iter().map(|row| row.record.identifier.as_str()).collect();
        assert_eq!(ids, ["8.0.402-tem", "21.0.2-tem", "17.0.9-tem"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let versions = vec![
            record("21-tem", true, true),
            record("21-tem", false, true),
            record("17-tem", false, true),
        ];
        let pointers = RolePointers::new(Some(id("21-tem")), Some(id("21-tem")));

        let rows = build_rows(&versions, &pointers);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].record.installed);
        assert_eq!(rows.iter().filter(|row| row.state.is_global()).count(), 1);
        assert_eq!(rows.iter().filter(|row| row.state.is_local()).count(), 1);
    }

    #[test]
    fn at_most_one_row_per_role() {
        let versions: Vec<_> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|name| record(name, true, true))
            .collect();

        for global in [None, Some("a"), Some("c")] {
            for local in [None, Some("a"), Some("d")] {
                let pointers = RolePointers::new(global.map(id), local.map(id));
                let rows = build_rows(&versions, &pointers);

                assert!(rows.iter().filter(|row| row.state.is_global()).count() <= 1);
                assert!(rows.iter().filter(|row| row.state.is_local()).count() <= 1);
            }
        }
    }

    #[test]
    fn pointer_to_uninstalled_version_gives_no_role() {
        let versions = vec![record("17-tem", false, true)];
        let pointers = RolePointers::new(Some(id("17-tem")), Some(id("17-tem")));

        let rows = build_rows(&versions, &pointers);

        assert_eq!(rows[0].state, SelectionState::Uninstalled);
    }

    #[test]
    fn unavailable_uninstalled_version_cannot_be_installed() {
        let controls = RowControls::for_state(SelectionState::Uninstalled, false);

        assert_eq!(controls.install, Control::Disabled);
        assert_eq!(controls.global, Control::Hidden);
    }

    #[test]
    fn role_holders_cannot_be_uninstalled() {
        for state in [
            SelectionState::InstalledAndGlobal,
            SelectionState::InstalledAndLocal,
            SelectionState::InstalledLocalAndGlobal,
        ] {
            assert_eq!(RowControls::for_state(state, true).install, Control::Disabled);
        }
        assert_eq!(
            RowControls::for_state(SelectionState::InstalledOnly, false).install,
            Control::Enabled
        );
    }

    #[test]
    fn local_and_global_row_disables_both_role_controls() {
        let controls = RowControls::for_state(SelectionState::InstalledLocalAndGlobal, true);

        assert_eq!(controls.global, Control::Disabled);
        assert_eq!(controls.local, Control::Disabled);
    }
}
