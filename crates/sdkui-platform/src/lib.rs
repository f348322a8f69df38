mod commands;
mod paths;

pub use commands::HideWindow;
pub use paths::{AppPaths, AppPathsError};

pub const APP_NAME: &str = "sdkui";
