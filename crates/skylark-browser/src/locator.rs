use crate::platform::HostPlatform;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory below the application that holds the bundled Chromium
const BUNDLE_ROOT: &[&str] = &["browsers", "chromium-1134"];

/// Locates the Chromium executable for a run
pub struct BrowserLocator {
    custom_path: Option<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl BrowserLocator {
    /// Create a locator, preferring an explicit executable path if given
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self {
            custom_path,
            base_dir: None,
        }
    }

    /// Override the directory the bundle is resolved against (tests)
    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    /// Resolve the executable, checking the custom path first and falling
    /// back to the bundled location for the given host platform
    pub fn locate(&self, platform: HostPlatform) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return Self::validate(path);
        }

        let mut path = self.base_dir()?;
        path.extend(BUNDLE_ROOT);
        path.extend(platform.bundled_executable());

        Self::validate(&path).map_err(|_| {
            Error::Environment(format!(
                "Browser not found at: {}. Use --browser-path to specify a location.",
                path.display()
            ))
        })
    }

    /// Bundled browsers live next to the running executable
    fn base_dir(&self) -> Result<PathBuf> {
        if let Some(ref base) = self.base_dir {
            return Ok(base.clone());
        }

        let exe = std::env::current_exe()
            .map_err(|e| Error::Environment(format!("cannot resolve executable path: {e}")))?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Environment("executable has no parent directory".to_string()))
    }

    /// A usable executable exists and carries exec permission on unix
    fn validate(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::Environment(format!(
                "Browser not found at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path)
                .map_err(|e| Error::Environment(format!("cannot inspect browser binary: {e}")))?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::Environment(format!(
                    "Browser binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
