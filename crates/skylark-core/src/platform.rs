use std::fmt;

/// Mobile platform a parameter profile belongs to
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MobilePlatform {
    Ios,
    Aos,
}

impl MobilePlatform {
    /// All platforms, in the order the UI presents them
    pub const ALL: [MobilePlatform; 2] = [MobilePlatform::Ios, MobilePlatform::Aos];

    /// Section name used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            MobilePlatform::Ios => "ios",
            MobilePlatform::Aos => "aos",
        }
    }

    /// Parse a config section name back into a platform
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ios" => Some(MobilePlatform::Ios),
            "aos" => Some(MobilePlatform::Aos),
            _ => None,
        }
    }
}

impl fmt::Display for MobilePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
