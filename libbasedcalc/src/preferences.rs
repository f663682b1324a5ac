//! Theme preference context
//!
//! The selected theme is read once at startup and written back whenever it
//! changes. Storage is injected through [`PreferenceStore`] so the context
//! carries no ambient globals and tests can run without touching disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{ConfigError, PreferenceError};
use crate::theme::Theme;

/// Load/save capability for the persisted theme
pub trait PreferenceStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Theme>, PreferenceError>;

    fn save(&self, theme: Theme) -> Result<(), PreferenceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    theme: String,
}

/// TOML file store, `preferences.toml` under the basedcalc config directory
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location
    pub fn default_location() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;
        Ok(Self::new(config_dir.join("basedcalc").join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: PreferenceFile = toml::from_str(&content)?;
        match file.theme.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                warn!("Ignoring saved theme: {}", e);
                Ok(None)
            }
        }
    }

    fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&PreferenceFile {
            theme: theme.id().to_string(),
        })?;
        std::fs::write(&self.path, content)?;
        debug!("Saved theme '{}' to {}", theme, self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and `--no-persist`
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    theme: Mutex<Option<Theme>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Mutex::new(Some(theme)),
        }
    }

    pub fn saved(&self) -> Option<Theme> {
        *self.theme.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        Ok(self.saved())
    }

    fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        *self.theme.lock().unwrap_or_else(|e| e.into_inner()) = Some(theme);
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
///
/// Passed explicitly to whatever renders; there is no global theme.
pub struct ThemeContext {
    theme: Theme,
    store: Box<dyn PreferenceStore + Send>,
}

impl ThemeContext {
    /// Read the saved theme once, falling back to the default theme when
    /// nothing is saved or the store cannot be read.
    pub fn load(store: Box<dyn PreferenceStore + Send>) -> Self {
        let theme = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to load theme preference, using default: {}", e);
                Theme::default()
            }
        };
        debug!("Theme context loaded with '{}'", theme);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist it.
    ///
    /// The in-memory theme changes even when saving fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = theme;
        self.store.save(theme)
    }

    /// Switch without persisting, e.g. a one-off `--theme` flag
    pub fn override_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self) -> Result<Option<Theme>, PreferenceError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn save(&self, _theme: Theme) -> Result<(), PreferenceError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
    }

    struct SharedStore(Arc<MemoryPreferenceStore>);

    impl PreferenceStore for SharedStore {
        fn load(&self) -> Result<Option<Theme>, PreferenceError> {
            self.0.load()
        }

        fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
            self.0.save(theme)
        }
    }

    #[test]
    fn test_empty_store_falls_back_to_default() {
        let context = ThemeContext::load(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(context.theme(), Theme::CuteAnimals);
    }

    #[test]
    fn test_saved_theme_is_loaded() {
        let context = ThemeContext::load(Box::new(MemoryPreferenceStore::with_theme(Theme::Retro)));
        assert_eq!(context.theme(), Theme::Retro);
    }

    #[test]
    fn test_unreadable_store_falls_back_to_default() {
        let context = ThemeContext::load(Box::new(FailingStore));
        assert_eq!(context.theme(), Theme::CuteAnimals);
    }

    #[test]
    fn test_set_theme_persists() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut context = ThemeContext::load(Box::new(SharedStore(store.clone())));

        context.set_theme(Theme::Terminal).unwrap();

        assert_eq!(context.theme(), Theme::Terminal);
        assert_eq!(store.saved(), Some(Theme::Terminal));
    }

    #[test]
    fn test_set_theme_failure_still_switches() {
        let mut context = ThemeContext::load(Box::new(FailingStore));
        assert!(context.set_theme(Theme::Ios).is_err());
        assert_eq!(context.theme(), Theme::Ios);
    }

    #[test]
    fn test_override_does_not_persist() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut context = ThemeContext::load(Box::new(SharedStore(store.clone())));

        context.override_theme(Theme::MacOs);

        assert_eq!(context.theme(), Theme::MacOs);
        assert_eq!(store.saved(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path().join("preferences.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("preferences.toml");
        let store = FilePreferenceStore::new(&path);

        store.save(Theme::Glassmorphism).unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), Some(Theme::Glassmorphism));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("theme = \"glassmorphism\""));
    }

    #[test]
    fn test_file_store_unknown_theme_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"vaporwave\"\n").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = [").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.load(), Err(PreferenceError::Parse(_))));
    }
}
