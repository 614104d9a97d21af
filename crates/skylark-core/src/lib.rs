pub mod error;
pub mod platform;
pub mod request;
pub mod store;

pub use error::{Error, Result};
pub use platform::MobilePlatform;
pub use request::RunRequest;
pub use store::{ProfileParams, ProfileSet, ProfileStore};
