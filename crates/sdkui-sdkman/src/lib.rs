mod backend;
mod detection;
mod exit_script;
mod listing;
mod provider;

pub use backend::{DEFAULT_CANDIDATES_API, SdkmanBackend, Timeouts};
pub use listing::{parse_listing, platform_id};
pub use provider::SdkmanProvider;
