pub mod loading;
pub mod main_view;
pub mod sdkman_missing;
