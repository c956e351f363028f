use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};
use crate::ui::style::{default_color_tokens, ColorTokens};

const THEME_CONFIG_FILE: &str = "theme.json";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the mode a click switches to.
    pub fn toggle_icon_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "weather-clear-night-symbolic",
            ThemeMode::Dark => "weather-clear-symbolic",
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to write theme config: {path}")]
    WriteConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme config")]
    ParseConfig(#[from] serde_json::Error),
}

/// Per-mode color overrides — all fields optional for partial override
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorOverrides {
    pub window_background: Option<String>,
    pub panel_background: Option<String>,
    pub border_color: Option<String>,
    pub text_color: Option<String>,
    pub muted_text_color: Option<String>,
    pub accent_color: Option<String>,
    pub track_color: Option<String>,
}

/// Color overrides with optional shared defaults + per-mode overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub common: ColorOverrides,
    #[serde(default)]
    pub dark: ColorOverrides,
    #[serde(default)]
    pub light: ColorOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub colors: Option<ThemeColors>,
}

/// Resolve color tokens for a given mode, applying user overrides on top of defaults.
pub fn resolve_color_tokens(mode: ThemeMode, overrides: Option<&ThemeColors>) -> ColorTokens {
    let mut tokens = default_color_tokens(mode);

    if let Some(colors) = overrides {
        apply_overrides(&mut tokens, &colors.common);
        let mode_overrides = match mode {
            ThemeMode::Dark => &colors.dark,
            ThemeMode::Light => &colors.light,
        };
        apply_overrides(&mut tokens, mode_overrides);
    }

    tokens
}

fn apply_overrides(tokens: &mut ColorTokens, overrides: &ColorOverrides) {
    let pairs = [
        (&mut tokens.window_background, &overrides.window_background),
        (&mut tokens.panel_background, &overrides.panel_background),
        (&mut tokens.border_color, &overrides.border_color),
        (&mut tokens.text_color, &overrides.text_color),
        (&mut tokens.muted_text_color, &overrides.muted_text_color),
        (&mut tokens.accent_color, &overrides.accent_color),
        (&mut tokens.track_color, &overrides.track_color),
    ];
    for (target, value) in pairs {
        if let Some(value) = value {
            target.clone_from(value);
        }
    }
}

pub fn theme_config_path() -> ThemeResult<PathBuf> {
    let (xdg_config_home, home) = config_env_dirs();
    theme_config_path_with(xdg_config_home.as_deref(), home.as_deref())
}

fn theme_config_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ThemeResult<PathBuf> {
    app_config_path(APP_DIR, THEME_CONFIG_FILE, xdg_config_home, home).map_err(|error| {
        match error {
            ConfigPathError::MissingHomeDirectory => ThemeError::MissingHomeDirectory,
        }
    })
}

pub fn load_theme_config() -> ThemeResult<ThemeConfig> {
    load_theme_config_at(&theme_config_path()?)
}

pub fn load_theme_config_at(path: &Path) -> ThemeResult<ThemeConfig> {
    if !path.exists() {
        return Ok(ThemeConfig::default());
    }

    let serialized = fs::read_to_string(path).map_err(|source| ThemeError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&serialized)?)
}

pub fn save_theme_preference_at(path: &Path, mode: ThemeMode) -> ThemeResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ThemeError::WriteConfig {
            path: path.to_path_buf(),
            source,
        })?;
    }

    // Only `mode` is rewritten; every other key of an existing object survives.
    let mut document = fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<serde_json::Value>(&contents).ok())
        .and_then(|value| match value {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();
    document.insert("mode".to_string(), serde_json::to_value(mode)?);

    let serialized = serde_json::to_string_pretty(&document)?;
    fs::write(path, serialized).map_err(|source| ThemeError::WriteConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Where the light/dark preference is persisted between sessions.
pub trait ThemeStore {
    fn load(&self) -> ThemeResult<ThemeMode>;
    fn save(&self, mode: ThemeMode) -> ThemeResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_default_path() -> ThemeResult<Self> {
        theme_config_path().map(Self::with_path)
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> ThemeResult<ThemeMode> {
        load_theme_config_at(&self.path).map(|config| config.mode)
    }

    fn save(&self, mode: ThemeMode) -> ThemeResult<()> {
        save_theme_preference_at(&self.path, mode)
    }
}

/// Store used when no config directory can be resolved; the preference lasts for the session.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: std::cell::Cell<Option<ThemeMode>>,
}

impl MemoryThemeStore {
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self {
            mode: std::cell::Cell::new(Some(mode)),
        }
    }

    pub fn stored(&self) -> Option<ThemeMode> {
        self.mode.get()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> ThemeResult<ThemeMode> {
        Ok(self.mode.get().unwrap_or_default())
    }

    fn save(&self, mode: ThemeMode) -> ThemeResult<()> {
        self.mode.set(Some(mode));
        Ok(())
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for std::rc::Rc<S> {
    fn load(&self) -> ThemeResult<ThemeMode> {
        (**self).load()
    }

    fn save(&self, mode: ThemeMode) -> ThemeResult<()> {
        (**self).save(mode)
    }
}

pub struct ThemeManager {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
}

impl ThemeManager {
    /// Read the stored preference; unreadable stores fall back to light.
    pub fn load(store: Box<dyn ThemeStore>) -> Self {
        let mode = store.load().unwrap_or_else(|err| {
            tracing::warn!(?err, "failed to load theme preference; using light");
            ThemeMode::default()
        });
        tracing::info!(mode = mode.as_str(), "loaded theme preference");
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(err) = self.store.save(self.mode) {
            tracing::warn!(?err, mode = self.mode.as_str(), "failed to persist theme preference");
        }
        tracing::info!(mode = self.mode.as_str(), "theme toggled");
        self.mode
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager").field("mode", &self.mode).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("mriscope-theme-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn theme_persistence_defaults_to_light_when_missing() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            let config = load_theme_config_at(&path).unwrap();
            assert_eq!(config.mode, ThemeMode::Light);
            assert!(config.colors.is_none());
        });
    }

    #[test]
    fn theme_persistence_load_and_save_round_trip() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            save_theme_preference_at(&path, ThemeMode::Dark).unwrap();
            assert_eq!(load_theme_config_at(&path).unwrap().mode, ThemeMode::Dark);

            save_theme_preference_at(&path, ThemeMode::Light).unwrap();
            assert_eq!(load_theme_config_at(&path).unwrap().mode, ThemeMode::Light);
        });
    }

    #[test]
    fn theme_persistence_save_keeps_color_overrides() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(
                &path,
                r##"{ "mode": "dark", "colors": { "dark": { "accent_color": "#FF00AA" } } }"##,
            )
            .unwrap();

            save_theme_preference_at(&path, ThemeMode::Light).unwrap();
            let config = load_theme_config_at(&path).unwrap();
            assert_eq!(config.mode, ThemeMode::Light);
            let colors = config.colors.expect("colors should survive a mode save");
            assert_eq!(colors.dark.accent_color.as_deref(), Some("#FF00AA"));
        });
    }

    #[test]
    fn theme_persistence_save_keeps_unrelated_keys() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(
                &path,
                r#"{ "mode": "dark", "font_scale": 1.25, "colors": { "dark": 42 } }"#,
            )
            .unwrap();

            save_theme_preference_at(&path, ThemeMode::Light).unwrap();
            let saved: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(saved["mode"], "light");
            assert_eq!(saved["font_scale"], 1.25);
            assert_eq!(saved["colors"]["dark"], 42);
        });
    }

    #[test]
    fn theme_persistence_save_replaces_a_non_object_file() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "[1, 2, 3]").unwrap();

            save_theme_preference_at(&path, ThemeMode::Dark).unwrap();
            assert_eq!(load_theme_config_at(&path).unwrap().mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn theme_persistence_rejects_invalid_payload() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "{ invalid ").unwrap();
            assert!(matches!(
                load_theme_config_at(&path),
                Err(ThemeError::ParseConfig(_))
            ));
        });
    }

    #[test]
    fn toggling_twice_returns_to_the_persisted_value() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            save_theme_preference_at(&path, ThemeMode::Dark).unwrap();

            let mut manager = ThemeManager::load(Box::new(FileThemeStore::with_path(path.clone())));
            assert_eq!(manager.mode(), ThemeMode::Dark);

            assert_eq!(manager.toggle(), ThemeMode::Light);
            assert_eq!(load_theme_config_at(&path).unwrap().mode, ThemeMode::Light);

            assert_eq!(manager.toggle(), ThemeMode::Dark);
            assert_eq!(load_theme_config_at(&path).unwrap().mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn manager_falls_back_to_light_when_store_is_corrupt() {
        with_temp_root(|root| {
            let path = theme_config_path_with(Some(root), None).unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "[]").unwrap();

            let manager = ThemeManager::load(Box::new(FileThemeStore::with_path(path)));
            assert_eq!(manager.mode(), ThemeMode::Light);
        });
    }

    #[test]
    fn manager_persists_through_shared_memory_store() {
        let store = Rc::new(MemoryThemeStore::default());
        let mut manager = ThemeManager::load(Box::new(store.clone()));
        assert_eq!(manager.mode(), ThemeMode::Light);
        assert_eq!(store.stored(), None);

        manager.toggle();
        assert_eq!(store.stored(), Some(ThemeMode::Dark));
    }

    #[test]
    fn resolve_color_tokens_applies_common_then_mode_overrides() {
        let overrides = ThemeColors {
            common: ColorOverrides {
                text_color: Some("#ABABAB".into()),
                accent_color: Some("#010101".into()),
                ..Default::default()
            },
            dark: ColorOverrides {
                accent_color: Some("#020202".into()),
                ..Default::default()
            },
            light: ColorOverrides::default(),
        };

        let dark = resolve_color_tokens(ThemeMode::Dark, Some(&overrides));
        assert_eq!(dark.text_color, "#ABABAB");
        assert_eq!(dark.accent_color, "#020202");
        assert_eq!(dark.window_background, "#0B1120");

        let light = resolve_color_tokens(ThemeMode::Light, Some(&overrides));
        assert_eq!(light.accent_color, "#010101");
        assert_eq!(light.window_background, "#F4F6FB");
    }
}
