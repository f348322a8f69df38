mod error;
mod traits;
mod types;

pub use error::{BackendError, NetworkStage};
pub use traits::{BackendDetection, BackendInfo, BackendProvider, SdkManager, SdkManagerClone};
pub use types::{CURRENT_LINK, Identifier, IdentifierError, VersionRecord};
