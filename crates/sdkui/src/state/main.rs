use sdkui_backend::{Identifier, SdkManager};
use sdkui_core::{Intent, SdkSelection, VersionRow};

use super::{Modal, Toast};

pub struct MainState {
    pub selection: SdkSelection,
    pub manager: Box<dyn SdkManager>,
    pub sdkman_version: Option<String>,
    pub modal: Option<Modal>,
    pub toasts: Vec<Toast>,
    next_toast_id: usize,
    pub search_query: String,
    pub installed_only: bool,
    pub hovered: Option<Identifier>,
    /// The transition whose backend call has not come back yet.
    pub in_flight: Option<Intent>,
    pub load_request_seq: u64,
    pub loading: bool,
}

impl MainState {
    pub fn new(
        candidate: impl Into<String>,
        manager: Box<dyn SdkManager>,
        sdkman_version: Option<String>,
    ) -> Self {
        Self {
            selection: SdkSelection::new(candidate),
            manager,
            sdkman_version,
            modal: None,
            toasts: Vec::new(),
            next_toast_id: 0,
            search_query: String::new(),
            installed_only: false,
            hovered: None,
            in_flight: None,
            load_request_seq: 0,
            loading: false,
        }
    }

    pub fn add_toast(&mut self, message: String) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::error(id, message));
    }

    pub fn dismiss_toast(&mut self, id: usize) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn prune_toasts(&mut self, timeout_secs: u64) {
        self.toasts.retain(|toast| !toast.is_expired(timeout_secs));
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_in_flight(&self, identifier: &Identifier) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|intent| &intent.identifier == identifier)
    }

    /// Rows left after the search query and the installed-only filter.
    pub fn visible_rows(&self) -> Vec<&VersionRow> {
        let query = self.search_query.trim().to_lowercase();
        self.selection
            .rows()
            .iter()
            .filter(|row| !self.installed_only || row.state.is_installed())
            .filter(|row| query.is_empty() || row_matches(row, &query))
            .collect()
    }
}

fn row_matches(row: &VersionRow, query: &str) -> bool {
    let record = &row.record;
    [
        record.identifier.as_str(),
        record.vendor.as_str(),
        record.version.as_str(),
        record.dist.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sdkui_backend::{BackendDetection, BackendProvider, Identifier, VersionRecord};
    use sdkui_core::{Action, Intent, RolePointers, SdkSelection, Snapshot};
    use sdkui_sdkman::SdkmanProvider;

    use super::MainState;

    fn id(value: &str) -> Identifier {
        value.parse().expect("valid identifier in test")
    }

    fn java(identifier: &str, vendor: &str, installed: bool) -> VersionRecord {
        let (version, dist) = identifier
            .rsplit_once('-')
            .expect("java identifiers carry a dist");
        VersionRecord {
            identifier: id(identifier),
            vendor: vendor.to_string(),
            version: version.to_string(),
            dist: dist.to_string(),
            installed,
            available: true,
        }
    }

    fn test_state() -> MainState {
        let detection = BackendDetection {
            found: true,
            sdkman_dir: Some(PathBuf::from("/tmp/sdkui-test-sdkman")),
            init_script: None,
            version: Some("5.18.2".to_string()),
        };
        let manager = SdkmanProvider::new().create_manager(&detection);

        let mut state = MainState::new("java", manager, Some("5.18.2".to_string()));
        state.selection = SdkSelection::from_snapshot(
            "java",
            Snapshot {
                versions: vec![
                    java("21.0.2-tem", "Temurin", true),
                    java("17.0.10-tem", "Temurin", false),
                    java("21.0.2-amzn", "Corretto", true),
                ],
                pointers: RolePointers::new(Some(id("21.0.2-tem")), None),
            },
        );
        state
    }

    fn visible_ids(state: &MainState) -> Vec<&str> {
        state
            .visible_rows()
            .into_iter()
            .map(|row| row.record.identifier.as_str())
            .collect()
    }

    #[test]
    fn no_filters_show_every_row_in_order() {
        let state = test_state();

        assert_eq!(
            visible_ids(&state),
            ["21.0.2-tem", "17.0.10-tem", "21.0.2-amzn"]
        );
    }

    #[test]
    fn search_matches_vendor_case_insensitively() {
        let mut state = test_state();
        state.search_query = "  corretto ".to_string();

        assert_eq!(visible_ids(&state), ["21.0.2-amzn"]);
    }

    #[test]
    fn search_matches_version_prefix() {
        let mut state = test_state();
        state.search_query = "17".to_string();

        assert_eq!(visible_ids(&state), ["17.0.10-tem"]);
    }

    #[test]
    fn installed_only_hides_uninstalled_rows() {
        let mut state = test_state();
        state.installed_only = true;

        assert_eq!(visible_ids(&state), ["21.0.2-tem", "21.0.2-amzn"]);
    }

    #[test]
    fn toasts_get_increasing_ids_and_can_be_dismissed() {
        let mut state = test_state();
        state.add_toast("first".to_string());
        state.add_toast("second".to_string());

        assert_eq!(state.toasts[0].id, 0);
        assert_eq!(state.toasts[1].id, 1);

        state.dismiss_toast(0);

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "second");
    }

    #[test]
    fn in_flight_is_tracked_per_identifier() {
        let mut state = test_state();
        state.in_flight = Some(Intent::new(Action::Install, id("17.0.10-tem")));

        assert!(state.is_busy());
        assert!(state.is_in_flight(&id("17.0.10-tem")));
        assert!(!state.is_in_flight(&id("21.0.2-tem")));
    }
}
