use crate::{Error, Result};
use std::path::Path;

/// Throwaway Chromium user-data directory for one session.
///
/// Every run gets a fresh directory so sessions never share cookies or
/// cached state; the directory is removed when the value is dropped.
pub struct UserDataDir {
    dir: tempfile::TempDir,
}

impl UserDataDir {
    pub fn temporary() -> Result<Self> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::Execution(format!("failed to create user data dir: {e}")))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
