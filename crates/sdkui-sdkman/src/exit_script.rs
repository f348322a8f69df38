//! The script the launching shell sources once the UI exits, which is how a
//! "local" version reaches that shell.

use std::path::{Path, PathBuf};

use log::info;
use sdkui_backend::{BackendError, Identifier};

const MARKER: &str = "# sdkui-local: ";

pub(crate) fn script_path(sdkman_dir: &Path, candidate: &str) -> PathBuf {
    sdkman_dir
        .join("tmp")
        .join(format!("sdkui-exit-{candidate}.sh"))
}

pub(crate) fn render(path: &Path, candidate: &str, identifier: &Identifier) -> String {
    format!(
        "# Generated by sdkui. Source this file to switch the current shell.\n\
         {MARKER}{identifier}\n\
         sdk use {} {}\n\
         rm -f -- {}\n",
        shell_quote(candidate),
        shell_quote(identifier.as_str()),
        shell_quote(&path.to_string_lossy())
    )
}

/// Identifier a pending script will switch to, if any.
pub(crate) fn parse_pending(contents: &str) -> Option<Identifier> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix(MARKER))
        .and_then(|value| value.parse().ok())
}

pub(crate) async fn read_pending(path: &Path) -> Result<Option<Identifier>, BackendError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(parse_pending(&contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn write(
    path: &Path,
    candidate: &str,
    identifier: &Identifier,
) -> Result<(), BackendError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging = path.with_extension("sh.partial");
    tokio::fs::write(&staging, render(path, candidate, identifier)).await?;
    tokio::fs::rename(&staging, path).await?;

    info!("Wrote exit script {} for {candidate} {identifier}", path.display());
    Ok(())
}

pub(crate) fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
