use std::path::PathBuf;

use sdkui_backend::{BackendDetection, BackendProvider, SdkManager};

use crate::backend::{SdkmanBackend, Timeouts};
use crate::detection::detect_sdkman;

#[derive(Default, Clone)]
pub struct SdkmanProvider {
    sdkman_dir: Option<PathBuf>,
    candidates_api: Option<String>,
    http_client: Option<reqwest::Client>,
    timeouts: Timeouts,
}

impl SdkmanProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look only in `dir` instead of `SDKMAN_DIR` and the usual locations.
    #[must_use]
    pub fn with_sdkman_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.sdkman_dir = dir;
        self
    }

    #[must_use]
    pub fn with_candidates_api(mut self, api: Option<String>) -> Self {
        self.candidates_api = api;
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

impl BackendProvider for SdkmanProvider {
    fn name(&self) -> &'static str {
        "sdkman"
    }

    fn display_name(&self) -> &'static str {
        "SDKMAN!"
    }

    fn detect(&self) -> BackendDetection {
        detect_sdkman(self.sdkman_dir.as_deref())
    }

    fn create_manager(&self, detection: &BackendDetection) -> Box<dyn SdkManager> {
        let dir = detection
            .sdkman_dir
            .clone()
            .or_else(|| self.sdkman_dir.clone())
            .or_else(|| dirs::home_dir().map(|home| home.join(".sdkman")))
            .unwrap_or_else(|| PathBuf::from(".sdkman"));

        let mut backend =
            SdkmanBackend::new(dir, detection.version.clone()).with_timeouts(self.timeouts);
        if let Some(api) = &self.candidates_api {
            backend = backend.with_candidates_api(api.clone());
        }
        if let Some(client) = &self.http_client {
            backend = backend.with_http_client(client.clone());
        }
        Box::new(backend)
    }
}
