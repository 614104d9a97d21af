use crate::{Error, Result};

/// Host operating systems a bundled Chromium ships for.
///
/// The bundled executable lives at a fixed relative path per platform; the
/// lookup is an enumerated table rather than ad-hoc OS-name matching so an
/// unknown OS is rejected up front, before anything is launched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

impl HostPlatform {
    /// Resolve an OS identifier as reported by `std::env::consts::OS`
    pub fn from_os_name(name: &str) -> Result<Self> {
        match name {
            "windows" => Ok(HostPlatform::Windows),
            "macos" => Ok(HostPlatform::MacOs),
            "linux" => Ok(HostPlatform::Linux),
            other => Err(Error::Environment(format!(
                "unsupported operating system: {other}"
            ))),
        }
    }

    /// The platform this process is running on
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Relative path of the bundled Chromium executable, below the bundle root
    pub fn bundled_executable(&self) -> &'static [&'static str] {
        match self {
            HostPlatform::Windows => &["chrome-win", "chrome.exe"],
            HostPlatform::MacOs => &[
                "chrome-mac",
                "Chromium.app",
                "Contents",
                "MacOS",
                "Chromium",
            ],
            HostPlatform::Linux => &["chrome-linux", "chrome"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_os_names_resolve() {
        assert_eq!(
            HostPlatform::from_os_name("windows").unwrap(),
            HostPlatform::Windows
        );
        assert_eq!(
            HostPlatform::from_os_name("macos").unwrap(),
            HostPlatform::MacOs
        );
        assert_eq!(
            HostPlatform::from_os_name("linux").unwrap(),
            HostPlatform::Linux
        );
    }

    #[test]
    fn test_unsupported_os_is_an_environment_error() {
        let err = HostPlatform::from_os_name("freebsd").unwrap_err();
        assert!(matches!(err, Error::Environment(_)));
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn test_every_platform_has_a_bundled_path() {
        for platform in [
            HostPlatform::Windows,
            HostPlatform::MacOs,
            HostPlatform::Linux,
        ] {
            assert!(!platform.bundled_executable().is_empty());
        }
    }
}
