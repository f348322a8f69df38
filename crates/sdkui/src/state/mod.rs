mod main;
mod ui;

use std::path::PathBuf;

pub use main::*;
pub use ui::*;

pub enum AppState {
    Loading,
    SdkmanMissing(MissingState),
    Main(Box<MainState>),
}

#[derive(Debug, Clone, Default)]
pub struct MissingState {
    pub sdkman_dir: Option<PathBuf>,
    pub reason: Option<String>,
}
