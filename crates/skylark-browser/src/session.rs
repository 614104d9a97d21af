use crate::locator::BrowserLocator;
use crate::platform::HostPlatform;
use crate::user_data::UserDataDir;
use crate::{Error, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use skylark_core::RunRequest;
use std::time::Duration;

/// Every session performs the same single navigation
pub const TARGET_URL: &str = "https://www.example.com";

/// What a completed session observed
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub title: Option<String>,
}

/// Runs exactly one automated browser session per invocation.
///
/// The sequence is fixed: locate the executable, launch Chromium, open a
/// page, navigate to [`TARGET_URL`], log the title, linger for the
/// requested wait, close the browser. Run parameters are logged but do not
/// alter navigation. Nothing is retried; the browser is closed on success
/// and failure alike once launch succeeded.
pub struct SessionRunner {
    locator: BrowserLocator,
}

impl SessionRunner {
    pub fn new(locator: BrowserLocator) -> Self {
        Self { locator }
    }

    pub async fn run(&self, request: &RunRequest) -> Result<SessionReport> {
        let platform = HostPlatform::current()?;
        let executable = self.locator.locate(platform)?;
        tracing::info!(
            path = %executable.display(),
            platform = %request.platform,
            headless = !request.show_browser,
            "starting browser session"
        );

        for (key, value) in &request.params {
            tracing::info!(%key, %value, "run parameter");
        }

        let user_data = UserDataDir::temporary()?;

        let mut config = BrowserConfig::builder()
            .chrome_executable(&executable)
            .user_data_dir(user_data.path());
        if request.show_browser {
            config = config.with_head();
        }
        let config = config.build().map_err(Error::Execution)?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::Execution(format!("failed to launch browser: {e}")))?;
        tracing::info!("browser launched");

        // The handler loop must run for page commands to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {e}");
                }
            }
        });

        // Close the browser whether or not the navigation succeeded
        let driven = Self::drive(&browser, request).await;
        let closed = browser
            .close()
            .await
            .map_err(|e| Error::Execution(format!("failed to close browser: {e}")));
        handler_task.abort();
        drop(user_data);

        let report = driven?;
        closed?;
        tracing::info!("browser session finished");
        Ok(report)
    }

    async fn drive(browser: &Browser, request: &RunRequest) -> Result<SessionReport> {
        let page = browser.new_page("about:blank").await?;
        page.goto(TARGET_URL).await?;
        page.wait_for_navigation().await?;

        let title = page.get_title().await?;
        match &title {
            Some(title) => tracing::info!(%title, "page loaded"),
            None => tracing::info!("page loaded without a title"),
        }

        tracing::info!(seconds = request.wait.as_secs(), "keeping browser open");
        linger(request.wait).await;

        Ok(SessionReport { title })
    }
}

/// Hold the browser open for the requested wait; a zero wait returns
/// immediately instead of sleeping
async fn linger(wait: Duration) {
    if !wait.is_zero() {
        tokio::time::sleep(wait).await;
    }
}
