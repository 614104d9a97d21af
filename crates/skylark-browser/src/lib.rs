mod error;
mod locator;
mod platform;
mod session;
mod user_data;

pub use error::{Error, Result};
pub use locator::BrowserLocator;
pub use platform::HostPlatform;
pub use session::{SessionReport, SessionRunner, TARGET_URL};
pub use user_data::UserDataDir;
