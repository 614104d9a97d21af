//! Profile configuration store.
//!
//! Profiles live in an INI file with one section per mobile platform and
//! arbitrary `key=value` parameters inside each section. The file is read
//! once at startup; the only write the application ever performs is the
//! initial creation of the two empty default sections. Values edited in the
//! UI are snapshotted into a [`crate::RunRequest`] and never written back.

use crate::platform::MobilePlatform;
use crate::{Error, Result};
use ini::{Ini, Properties};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Parameter map of one profile, keyed by parameter name
pub type ProfileParams = BTreeMap<String, String>;

/// The full set of profiles loaded from the config file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: BTreeMap<MobilePlatform, ProfileParams>,
}

impl ProfileSet {
    /// One empty profile per known platform
    pub fn with_defaults() -> Self {
        let profiles = MobilePlatform::ALL
            .into_iter()
            .map(|platform| (platform, ProfileParams::new()))
            .collect();
        Self { profiles }
    }

    /// Parameters configured for the given platform
    pub fn params(&self, platform: MobilePlatform) -> &ProfileParams {
        // with_defaults/from_ini always populate every known platform
        &self.profiles[&platform]
    }

    fn params_mut(&mut self, platform: MobilePlatform) -> &mut ProfileParams {
        self.profiles.entry(platform).or_default()
    }

    fn from_ini(ini: &Ini) -> Self {
        let mut set = Self::with_defaults();

        for (section, properties) in ini.iter() {
            let Some(name) = section else {
                // Keys above the first section header have no profile
                continue;
            };

            match MobilePlatform::from_name(name) {
                Some(platform) => {
                    let params = set.params_mut(platform);
                    for (key, value) in properties.iter() {
                        params.insert(key.to_string(), value.to_string());
                    }
                }
                None => {
                    tracing::debug!(section = name, "ignoring unknown config section");
                }
            }
        }

        set
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for (platform, params) in &self.profiles {
            let section = ini
                .entry(Some(platform.as_str().to_string()))
                .or_insert_with(Properties::new);
            for (key, value) in params {
                section.insert(key.clone(), value.clone());
            }
        }
        ini
    }
}

/// Reads and writes the profile config file
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile set, creating and persisting the default file if
    /// none exists yet. A file that exists but cannot be read or parsed is
    /// surfaced as an error; the caller decides the fallback.
    pub fn load_or_init(&self) -> Result<ProfileSet> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "config file missing, writing defaults");
            let defaults = ProfileSet::with_defaults();
            self.write(&defaults)?;
            return Ok(defaults);
        }

        let ini = Ini::load_from_file(&self.path).map_err(|e| match e {
            ini::Error::Io(io) => Error::Io(io),
            ini::Error::Parse(parse) => Error::Parse(parse.to_string()),
        })?;

        Ok(ProfileSet::from_ini(&ini))
    }

    /// Persist a profile set to disk
    pub fn write(&self, profiles: &ProfileSet) -> Result<()> {
        profiles.to_ini().write_to_file(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> ProfileStore {
        ProfileStore::new(dir.path().join("config.ini"))
    }

    #[test]
    fn test_missing_file_yields_defaults_and_persists_them() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let profiles = store.load_or_init().unwrap();

        assert_eq!(profiles, ProfileSet::with_defaults());
        assert!(profiles.params(MobilePlatform::Ios).is_empty());
        assert!(profiles.params(MobilePlatform::Aos).is_empty());

        // The default file must land on disk immediately
        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("[ios]"));
        assert!(written.contains("[aos]"));

        // A second load reads the persisted defaults back
        assert_eq!(store.load_or_init().unwrap(), profiles);
    }

    #[test]
    fn test_existing_file_is_parsed_per_section() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "[ios]\ndevice=iPhone 15\nlocale=en-US\n\n[aos]\ndevice=Pixel 8\n",
        )
        .unwrap();

        let profiles = store.load_or_init().unwrap();

        let ios = profiles.params(MobilePlatform::Ios);
        assert_eq!(ios.get("device").map(String::as_str), Some("iPhone 15"));
        assert_eq!(ios.get("locale").map(String::as_str), Some("en-US"));

        let aos = profiles.params(MobilePlatform::Aos);
        assert_eq!(aos.len(), 1);
        assert_eq!(aos.get("device").map(String::as_str), Some("Pixel 8"));
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[ios]\nkey=value\n\n[desktop]\nother=thing\n").unwrap();

        let profiles = store.load_or_init().unwrap();

        assert_eq!(profiles.params(MobilePlatform::Ios).len(), 1);
        assert!(profiles.params(MobilePlatform::Aos).is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[ios\nnot closed").unwrap();

        let result = store.load_or_init();

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_duplicate_keys_keep_a_single_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[aos]\ndevice=old\ndevice=new\n").unwrap();

        let profiles = store.load_or_init().unwrap();

        // Keys are unique per profile; the last assignment wins
        let aos = profiles.params(MobilePlatform::Aos);
        assert_eq!(aos.len(), 1);
        assert_eq!(aos.get("device").map(String::as_str), Some("new"));
    }
}
