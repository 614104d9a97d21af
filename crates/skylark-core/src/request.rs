use crate::platform::MobilePlatform;
use crate::store::ProfileParams;
use std::time::Duration;

/// Everything one browser session needs, captured at trigger time.
///
/// The parameter map is a snapshot of the UI's edited values, not a live
/// view of the profile store; a request is built fresh for every run and
/// dropped when the run completes.
#[derive(Clone, Debug)]
pub struct RunRequest {
    pub platform: MobilePlatform,
    pub params: ProfileParams,
    pub show_browser: bool,
    pub wait: Duration,
}

impl RunRequest {
    pub fn new(
        platform: MobilePlatform,
        params: ProfileParams,
        show_browser: bool,
        wait_secs: u64,
    ) -> Self {
        Self {
            platform,
            params,
            show_browser,
            wait: Duration::from_secs(wait_secs),
        }
    }
}
