use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::AppError;
use crate::models::settings::{AppSettings, Theme};

/// Owns the persisted user preferences.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    current: RwLock<AppSettings>,
}

impl SettingsStore {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let settings = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppSettings::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(path = %path.display(), theme = ?settings.theme, "settings loaded");
        Ok(Self { path, current: RwLock::new(settings) })
    }

    pub fn current(&self) -> AppSettings {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Update the theme and write the settings file.
    pub fn set_theme(&self, theme: Theme) -> Result<AppSettings, AppError> {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut updated = guard.clone();
        updated.theme = theme;
        std::fs::write(&self.path, serde_json::to_string_pretty(&updated)?)?;
        *guard = updated.clone();
        tracing::info!(theme = ?theme, "theme updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.current().theme, Theme::Light);
    }

    #[test]
    fn test_set_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::load(&path).unwrap();
        let updated = store.set_theme(Theme::Dark).unwrap();
        assert_eq!(updated.theme, Theme::Dark);
        assert_eq!(store.current().theme, Theme::Dark);

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.current().theme, Theme::Dark);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(SettingsStore::load(&path), Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_write_failure_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("missing-dir").join("settings.json")).unwrap();
        assert!(store.set_theme(Theme::Dark).is_err());
        assert_eq!(store.current().theme, Theme::Light);
    }
}
