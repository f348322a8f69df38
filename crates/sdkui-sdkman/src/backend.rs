use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, trace, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use sdkui_backend::{
    BackendError, BackendInfo, CURRENT_LINK, Identifier, NetworkStage, SdkManager, VersionRecord,
};
use sdkui_platform::HideWindow;

use crate::detection::init_script_path;
use crate::exit_script;
use crate::listing::{parse_listing, platform_id, reconcile};

pub const DEFAULT_CANDIDATES_API: &str = "https://api.sdkman.io/2";

#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub install: Duration,
    pub operation: Duration,
    pub fetch: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            install: Duration::from_secs(600),
            operation: Duration::from_secs(60),
            fetch: Duration::from_secs(30),
        }
    }
}

/// Drives an SDKMAN installation through its directory layout, the
/// candidates API and, for installs, the `sdk` shell function.
#[derive(Clone)]
pub struct SdkmanBackend {
    info: BackendInfo,
    candidates_api: String,
    platform: &'static str,
    client: reqwest::Client,
    timeouts: Timeouts,
}

impl SdkmanBackend {
    #[must_use]
    pub fn new(sdkman_dir: PathBuf, version: Option<String>) -> Self {
        Self {
            info: BackendInfo {
                name: "sdkman",
                sdkman_dir,
                version,
            },
            candidates_api: DEFAULT_CANDIDATES_API.to_string(),
            platform: platform_id(),
            client: reqwest::Client::new(),
            timeouts: Timeouts::default(),
        }
    }

    #[must_use]
    pub fn with_candidates_api(mut self, api: impl Into<String>) -> Self {
        self.candidates_api = api.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    fn sdkman_dir(&self) -> &Path {
        &self.info.sdkman_dir
    }

    fn candidate_dir(&self, candidate: &str) -> Result<PathBuf, BackendError> {
        let valid = !candidate.is_empty()
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(BackendError::parse(
                "candidate name",
                format!("{candidate:?} is not a valid candidate"),
            ));
        }
        Ok(self.sdkman_dir().join("candidates").join(candidate))
    }

    fn version_dir(&self, candidate: &str, identifier: &Identifier) -> Result<PathBuf, BackendError> {
        Ok(self.candidate_dir(candidate)?.join(identifier.as_str()))
    }

    fn listing_url(&self, candidate: &str, current: Option<&Identifier>, installed: &[Identifier]) -> String {
        let installed = installed
            .iter()
            .map(Identifier::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/candidates/{candidate}/{}/versions/list?current={}&installed={installed}",
            self.candidates_api,
            self.platform,
            current.map_or("", Identifier::as_str),
        )
    }

    async fn installed_on_disk(&self, candidate: &str) -> Result<Vec<Identifier>, BackendError> {
        let dir = self.candidate_dir(candidate)?;
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut installed = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name == CURRENT_LINK || !tokio::fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir()) {
                continue;
            }
            match Identifier::new(name) {
                Ok(identifier) => installed.push(identifier),
                Err(e) => debug!("Ignoring {}: {e}", entry.path().display()),
            }
        }

        installed.sort();
        Ok(installed)
    }

    async fn fetch_listing(&self, url: &str) -> Result<String, BackendError> {
        debug!("Fetching {url}");
        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| BackendError::network("list versions", NetworkStage::Request, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(BackendError::network(
                    "list versions",
                    NetworkStage::Status,
                    format!("HTTP {status}"),
                ));
            }

            response
                .text()
                .await
                .map_err(|e| BackendError::network("list versions", NetworkStage::Body, e))
        };

        tokio::time::timeout(self.timeouts.fetch, request)
            .await
            .map_err(|_| BackendError::Timeout)?
    }

    async fn link_target(&self, candidate: &str) -> Result<Option<Identifier>, BackendError> {
        let link = self.candidate_dir(candidate)?.join(CURRENT_LINK);
        let target = match tokio::fs::read_link(&link).await {
            Ok(target) => target,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {
                debug!("{} is not a symlink", link.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let Some(name) = target.file_name().and_then(|name| name.to_str()) else {
            warn!("Unreadable link target {}", target.display());
            return Ok(None);
        };
        Ok(Some(Identifier::new(name)?))
    }

    async fn point_current_at(&self, candidate: &str, identifier: Option<&Identifier>) -> Result<(), BackendError> {
        let candidate_dir = self.candidate_dir(candidate)?;
        let link = candidate_dir.join(CURRENT_LINK);

        let Some(identifier) = identifier else {
            info!("Removing {}", link.display());
            return match tokio::fs::remove_file(&link).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        };

        replace_link(&candidate_dir.join(identifier.as_str()), &link).await
    }

    /// Put the `current` link back if `sdk` moved it.
    async fn restore_current(&self, candidate: &str, previous: Option<&Identifier>) -> Result<(), BackendError> {
        if self.link_target(candidate).await?.as_ref() != previous {
            info!("Restoring {candidate} current link to {previous:?}");
            self.point_current_at(candidate, previous).await?;
        }
        Ok(())
    }

    fn sdk_command(&self, shell_command: &str) -> Result<Command, BackendError> {
        let init = init_script_path(self.sdkman_dir());
        if !init.is_file() {
            return Err(BackendError::NotFound);
        }
        let bash = which::which("bash").map_err(|_| BackendError::Unsupported { operation: "sdk command" })?;

        debug!("Building sdk command: {shell_command}");
        let mut cmd = Command::new(bash);
        cmd.arg("-c")
            .arg(format!("source \"$SDKMAN_DIR/bin/sdkman-init.sh\" && {shell_command}"))
            .env("SDKMAN_DIR", self.sdkman_dir())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd.hide_window();
        Ok(cmd)
    }

    async fn execute(&self, shell_command: &str, answers: &str, timeout: Duration) -> Result<String, BackendError> {
        info!("Executing sdk command: {shell_command}");

        let mut child = self.sdk_command(shell_command)?.spawn()?;
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(answers.as_bytes()).await
            && e.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                error!("sdk command timed out after {timeout:?}: {shell_command}");
                BackendError::Timeout
            })??;

        debug!("sdk command exit status: {:?}", output.status);
        trace!("sdk stdout: {}", String::from_utf8_lossy(&output.stdout));
        if !output.stderr.is_empty() {
            trace!("sdk stderr: {}", String::from_utf8_lossy(&output.stderr));
        }

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            error!("sdk command failed: {shell_command}, stderr='{stderr}'");
            Err(BackendError::CommandFailed { stderr })
        }
    }
}

#[cfg(unix)]
async fn replace_link(target: &Path, link: &Path) -> Result<(), BackendError> {
    let staging = link.with_file_name(format!("{CURRENT_LINK}.sdkui-partial"));
    match tokio::fs::remove_file(&staging).await {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
        _ => {}
    }

    tokio::fs::symlink(target, &staging).await?;
    tokio::fs::rename(&staging, link).await?;
    info!("Pointed {} at {}", link.display(), target.display());
    Ok(())
}

#[cfg(not(unix))]
async fn replace_link(_target: &Path, _link: &Path) -> Result<(), BackendError> {
    Err(BackendError::Unsupported {
        operation: "set global",
    })
}

/// Version named by a `*_HOME` variable that points inside `candidate_dir`,
/// ignoring the `current` link.
fn local_from_home(candidate_dir: &Path, home: &Path) -> Option<Identifier> {
    let rest = home.strip_prefix(candidate_dir).ok()?;
    let first = rest.components().next()?.as_os_str().to_str()?;
    Identifier::new(first).ok()
}

fn install_command(candidate: &str, identifier: &Identifier) -> String {
    format!(
        "sdk install {} {}",
        exit_script::shell_quote(candidate),
        exit_script::shell_quote(identifier.as_str())
    )
}

fn home_variable(candidate: &str) -> String {
    format!("{}_HOME", candidate.to_ascii_uppercase().replace('-', "_"))
}

#[async_trait]
impl SdkManager for SdkmanBackend {
    fn name(&self) -> &'static str {
        "sdkman"
    }

    fn backend_info(&self) -> &BackendInfo {
        &self.info
    }

    async fn list_versions(&self, candidate: &str) -> Result<Vec<VersionRecord>, BackendError> {
        let on_disk = self.installed_on_disk(candidate).await?;
        let current = self.link_target(candidate).await?;
        let url = self.listing_url(candidate, current.as_ref(), &on_disk);

        let body = self.fetch_listing(&url).await?;
        let records = parse_listing(&body);
        if records.is_empty() && !body.trim().is_empty() {
            warn!("No versions found in {candidate} listing");
        }

        Ok(reconcile(records, &on_disk))
    }

    async fn current_global(&self, candidate: &str) -> Result<Option<Identifier>, BackendError> {
        let Some(identifier) = self.link_target(candidate).await? else {
            return Ok(None);
        };

        let exists = tokio::fs::metadata(self.version_dir(candidate, &identifier)?)
            .await
            .is_ok_and(|m| m.is_dir());
        if exists {
            Ok(Some(identifier))
        } else {
            warn!("{candidate} current link points at missing {identifier}");
            Ok(None)
        }
    }

    async fn current_local(&self, candidate: &str) -> Result<Option<Identifier>, BackendError> {
        let candidate_dir = self.candidate_dir(candidate)?;
        let script = exit_script::script_path(self.sdkman_dir(), candidate);
        if let Some(pending) = exit_script::read_pending(&script).await? {
            debug!("Pending exit script switches {candidate} to {pending}");
            return Ok(Some(pending));
        }

        let variable = home_variable(candidate);
        let Some(home) = std::env::var_os(&variable).map(PathBuf::from) else {
            return Ok(None);
        };
        let local = local_from_home(&candidate_dir, &home);
        trace!("{variable}={} resolves to {local:?}", home.display());
        Ok(local)
    }

    async fn set_global(&self, candidate: &str, identifier: &Identifier) -> Result<(), BackendError> {
        let version_dir = self.version_dir(candidate, identifier)?;
        if !tokio::fs::metadata(&version_dir).await.is_ok_and(|m| m.is_dir()) {
            return Err(BackendError::VersionNotFound {
                identifier: identifier.to_string(),
            });
        }

        tokio::time::timeout(self.timeouts.operation, self.point_current_at(candidate, Some(identifier)))
            .await
            .map_err(|_| BackendError::Timeout)?
    }

    async fn set_local(&self, candidate: &str, identifier: &Identifier) -> Result<(), BackendError> {
        let version_dir = self.version_dir(candidate, identifier)?;
        if !tokio::fs::metadata(&version_dir).await.is_ok_and(|m| m.is_dir()) {
            return Err(BackendError::VersionNotFound {
                identifier: identifier.to_string(),
            });
        }

        let script = exit_script::script_path(self.sdkman_dir(), candidate);
        tokio::time::timeout(
            self.timeouts.operation,
            exit_script::write(&script, candidate, identifier),
        )
        .await
        .map_err(|_| BackendError::Timeout)?
    }

    async fn install(&self, candidate: &str, identifier: &Identifier) -> Result<(), BackendError> {
        let version_dir = self.version_dir(candidate, identifier)?;
        let previous = self.link_target(candidate).await?;

        let result = self
            .execute(
                &install_command(candidate, identifier),
                "n\n",
                self.timeouts.install,
            )
            .await;

        if let Err(e) = self.restore_current(candidate, previous.as_ref()).await {
            if result.is_ok() {
                return Err(e);
            }
            error!("Could not restore {candidate} current link after failed install: {e}");
        }
        result?;

        if tokio::fs::metadata(&version_dir).await.is_ok_and(|m| m.is_dir()) {
            Ok(())
        } else {
            Err(BackendError::CommandFailed {
                stderr: format!("{candidate} {identifier} was not installed"),
            })
        }
    }

    async fn uninstall(&self, candidate: &str, identifier: &Identifier) -> Result<(), BackendError> {
        let version_dir = self.version_dir(candidate, identifier)?;
        let metadata = match tokio::fs::symlink_metadata(&version_dir).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackendError::VersionNotFound {
                    identifier: identifier.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if self.link_target(candidate).await?.as_ref() == Some(identifier) {
            return Err(BackendError::CommandFailed {
                stderr: format!("{identifier} is the current {candidate} version"),
            });
        }

        info!("Removing {}", version_dir.display());
        let removal = async {
            if metadata.file_type().is_symlink() {
                tokio::fs::remove_file(&version_dir).await
            } else {
                tokio::fs::remove_dir_all(&version_dir).await
            }
        };
        tokio::time::timeout(self.timeouts.operation, removal)
            .await
            .map_err(|_| BackendError::Timeout)??;
        Ok(())
    }
}
