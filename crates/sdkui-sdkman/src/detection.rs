use std::path::{Path, PathBuf};

use log::{debug, info};
use sdkui_backend::BackendDetection;

const INIT_SCRIPT: &[&str] = &["bin", "sdkman-init.sh"];
const VERSION_FILE: &[&str] = &["var", "version"];

pub(crate) fn detect_sdkman(override_dir: Option<&Path>) -> BackendDetection {
    let env_dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("SDKMAN_DIR").map(PathBuf::from));
    let sdkman_dir = select_sdkman_dir(env_dir, sdkman_dir_candidates());

    let Some(dir) = sdkman_dir else {
        info!("No SDKMAN directory found");
        return BackendDetection {
            found: false,
            sdkman_dir: None,
            init_script: None,
            version: None,
        };
    };

    let init_script = init_script_path(&dir);
    let found = init_script.is_file();
    let version = read_sdkman_version(&dir);
    info!(
        "SDKMAN directory {} (init script: {found}, version: {version:?})",
        dir.display()
    );

    BackendDetection {
        found,
        init_script: found.then_some(init_script),
        sdkman_dir: Some(dir),
        version,
    }
}

pub(crate) fn init_script_path(dir: &Path) -> PathBuf {
    INIT_SCRIPT.iter().fold(dir.to_path_buf(), |path, part| path.join(part))
}

fn select_sdkman_dir(env_dir: Option<PathBuf>, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_dir.filter(|path| path.exists()) {
        debug!("Using SDKMAN_DIR={}", path.display());
        return Some(path);
    }

    candidates
        .iter()
        .find(|candidate| init_script_path(candidate).is_file())
        .cloned()
        .or_else(|| candidates.into_iter().find(|candidate| candidate.exists()))
}

fn sdkman_dir_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".sdkman"));
    }

    #[cfg(unix)]
    {
        paths.push(PathBuf::from("/usr/local/sdkman"));
        paths.push(PathBuf::from("/opt/sdkman"));
    }

    paths
}

fn read_sdkman_version(dir: &Path) -> Option<String> {
    let path = VERSION_FILE
        .iter()
        .fold(dir.to_path_buf(), |path, part| path.join(part));
    let contents = std::fs::read_to_string(path).ok()?;
    let version = contents.lines().next()?.trim();

    (!version.is_empty()).then(|| version.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{detect_sdkman, read_sdkman_version, select_sdkman_dir};

    fn install_sdkman(dir: &Path, version: Option<&str>) {
        fs::create_dir_all(dir.join("bin")).expect("create bin dir");
        fs::write(dir.join("bin").join("sdkman-init.sh"), "# init\n").expect("write init script");
        if let Some(version) = version {
            fs::create_dir_all(dir.join("var")).expect("create var dir");
            fs::write(dir.join("var").join("version"), format!("{version}\n"))
                .expect("write version file");
        }
    }

    #[test]
    fn select_sdkman_dir_prefers_existing_env_dir() {
        let env_dir = tempfile::tempdir().unwrap();
        let candidate = tempfile::tempdir().unwrap();
        install_sdkman(candidate.path(), None);

        let selected = select_sdkman_dir(
            Some(env_dir.path().to_path_buf()),
            vec![candidate.path().to_path_buf()],
        );

        assert_eq!(selected.as_deref(), Some(env_dir.path()));
    }

    #[test]
    fn select_sdkman_dir_ignores_missing_env_dir() {
        let candidate = tempfile::tempdir().unwrap();
        install_sdkman(candidate.path(), None);
        let missing = candidate.path().join("does-not-exist");

        let selected = select_sdkman_dir(Some(missing), vec![candidate.path().to_path_buf()]);

        assert_eq!(selected.as_deref(), Some(candidate.path()));
    }

    #[test]
    fn select_sdkman_dir_prefers_candidate_with_init_script() {
        let plain = tempfile::tempdir().unwrap();
        let installed = tempfile::tempdir().unwrap();
        install_sdkman(installed.path(), None);

        let selected = select_sdkman_dir(
            None,
            vec![plain.path().to_path_buf(), installed.path().to_path_buf()],
        );

        assert_eq!(selected.as_deref(), Some(installed.path()));
    }

    #[test]
    fn select_sdkman_dir_returns_none_when_nothing_exists() {
        let root = tempfile::tempdir().unwrap();

        assert!(select_sdkman_dir(None, vec![root.path().join("missing")]).is_none());
    }

    #[test]
    fn version_is_first_trimmed_line() {
        let dir = tempfile::tempdir().unwrap();
        install_sdkman(dir.path(), Some("  5.18.2 "));

        assert_eq!(read_sdkman_version(dir.path()).as_deref(), Some("5.18.2"));
    }

    #[test]
    fn empty_version_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        install_sdkman(dir.path(), Some(""));

        assert!(read_sdkman_version(dir.path()).is_none());
    }

    #[test]
    fn detect_with_override_reports_init_script() {
        let dir = tempfile::tempdir().unwrap();
        install_sdkman(dir.path(), Some("5.18.2"));

        let detection = detect_sdkman(Some(dir.path()));

        assert!(detection.found);
        assert_eq!(detection.sdkman_dir.as_deref(), Some(dir.path()));
        assert_eq!(
            detection.init_script,
            Some(dir.path().join("bin").join("sdkman-init.sh"))
        );
        assert_eq!(detection.version.as_deref(), Some("5.18.2"));
    }

    #[test]
    fn detect_without_init_script_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let detection = detect_sdkman(Some(dir.path()));

        assert!(!detection.found);
        assert!(detection.init_script.is_none());
        assert_eq!(detection.sdkman_dir.as_deref(), Some(dir.path()));
    }
}
