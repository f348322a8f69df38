use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::BackendError;
use crate::types::{Identifier, VersionRecord};

#[derive(Debug, Clone)]
pub struct BackendDetection {
    pub found: bool,
    pub sdkman_dir: Option<PathBuf>,
    pub init_script: Option<PathBuf>,
    pub version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendInfo {
    pub name: &'static str,
    pub sdkman_dir: PathBuf,
    pub version: Option<String>,
}

/// Locates a version-manager installation and builds managers for it.
pub trait BackendProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn display_name(&self) -> &'static str;

    /// Inspect the filesystem for an installation. Blocking; callers run it off
    /// the UI thread.
    fn detect(&self) -> BackendDetection;

    fn create_manager(&self, detection: &BackendDetection) -> Box<dyn SdkManager>;
}

/// The SDK-management API the selection core drives.
///
/// Every mutating method performs exactly one external side effect.
#[async_trait]
pub trait SdkManager: Send + Sync + SdkManagerClone {
    fn name(&self) -> &'static str;

    fn backend_info(&self) -> &BackendInfo;

    /// All versions of `candidate`, ordered for display.
    async fn list_versions(&self, candidate: &str) -> Result<Vec<VersionRecord>, BackendError>;

    async fn current_global(&self, candidate: &str) -> Result<Option<Identifier>, BackendError>;

    async fn current_local(&self, candidate: &str) -> Result<Option<Identifier>, BackendError>;

    async fn set_global(&self, candidate: &str, identifier: &Identifier)
    -> Result<(), BackendError>;

    /// Arrange for the launching shell to switch to `identifier` once the
    /// application exits.
    async fn set_local(&self, candidate: &str, identifier: &Identifier)
    -> Result<(), BackendError>;

    async fn install(&self, candidate: &str, identifier: &Identifier) -> Result<(), BackendError>;

    async fn uninstall(&self, candidate: &str, identifier: &Identifier)
    -> Result<(), BackendError>;
}

pub trait SdkManagerClone: Send + Sync {
    fn clone_box(&self) -> Box<dyn SdkManager>;
}

impl<T> SdkManagerClone for T
where
    T: 'static + SdkManager + Clone,
{
    fn clone_box(&self) -> Box<dyn SdkManager> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn SdkManager> {
    fn clone(&self) -> Box<dyn SdkManager> {
        self.clone_box()
    }
}

impl<T: SdkManager + Clone + 'static> From<T> for Box<dyn SdkManager> {
    fn from(manager: T) -> Self {
        Box::new(manager)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    #[derive(Clone)]
    struct MockManager {
        info: BackendInfo,
        versions: Vec<VersionRecord>,
        global: Arc<Mutex<Option<Identifier>>>,
    }

    impl MockManager {
        fn new(versions: Vec<VersionRecord>) -> Self {
            Self {
                info: BackendInfo {
                    name: "mock",
                    sdkman_dir: PathBuf::from("/tmp/mock-sdkman"),
                    version: Some("5.18.2".to_string()),
                },
                versions,
                global: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl SdkManager for MockManager {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn backend_info(&self) -> &BackendInfo {
            &self.info
        }

        async fn list_versions(&self, _candidate: &str) -> Result<Vec<VersionRecord>, BackendError> {
            Ok(self.versions.clone())
        }

        async fn current_global(&self, _candidate: &str) -> Result<Option<Identifier>, BackendError> {
            Ok(self.global.lock().unwrap().clone())
        }

        async fn current_local(&self, _candidate: &str) -> Result<Option<Identifier>, BackendError> {
            Ok(None)
        }

        async fn set_global(
            &self,
            _candidate: &str,
            identifier: &Identifier,
        ) -> Result<(), BackendError> {
            *self.global.lock().unwrap() = Some(identifier.clone());
            Ok(())
        }

        async fn set_local(
            &self,
            _candidate: &str,
            _identifier: &Identifier,
        ) -> Result<(), BackendError> {
            Err(BackendError::Unsupported {
                operation: "set_local",
            })
        }

        async fn install(&self, _candidate: &str, _identifier: &Identifier) -> Result<(), BackendError> {
            Ok(())
        }

        async fn uninstall(
            &self,
            _candidate: &str,
            _identifier: &Identifier,
        ) -> Result<(), BackendError> {
            Ok(())
        }
    }

    fn record(identifier: &str) -> VersionRecord {
        VersionRecord::plain(identifier.parse().expect("valid identifier"), true, true)
    }

    #[tokio::test]
    async fn boxed_clone_preserves_manager_behavior_and_info() {
        let boxed: Box<dyn SdkManager> = MockManager::new(vec![record("3.9.6")]).into();
        let cloned = boxed.clone();

        assert_eq!(cloned.name(), "mock");
        assert_eq!(
            cloned.backend_info().sdkman_dir,
            PathBuf::from("/tmp/mock-sdkman")
        );
        let versions = cloned
            .list_versions("maven")
            .await
            .expect("list_versions should work on cloned manager");
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].identifier.as_str(), "3.9.6");
    }

    #[tokio::test]
    async fn boxed_clones_share_external_state() {
        let boxed: Box<dyn SdkManager> = MockManager::new(Vec::new()).into();
        let cloned = boxed.clone();
        let identifier: Identifier = "21.0.2-tem".parse().unwrap();

        boxed.set_global("java", &identifier).await.unwrap();

        assert_eq!(
            cloned.current_global("java").await.unwrap(),
            Some(identifier)
        );
    }
}
