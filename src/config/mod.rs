use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "mriscope";
const APP_CONFIG_FILE: &str = "config.json";
pub(crate) const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default = "default_server_url")]
    pub(crate) server_url: String,
    #[serde(default)]
    pub(crate) request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) desktop_notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: None,
            desktop_notifications: false,
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

pub(crate) fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

/// Options taken from the command line; they win over `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StartupConfig {
    pub(crate) server_url: Option<String>,
}

impl StartupConfig {
    pub(crate) fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    pub(crate) fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "--server" {
                match args.next() {
                    Some(url) => config.server_url = Some(url),
                    None => tracing::warn!("--server requires a URL argument; ignoring"),
                }
            } else if let Some(url) = arg.strip_prefix("--server=") {
                config.server_url = Some(url.to_string());
            } else {
                tracing::debug!(arg = arg.as_str(), "ignoring unknown startup argument");
            }
        }
        config
    }
}

/// Resolved settings the runtime works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuntimeSettings {
    pub(crate) server_url: String,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) desktop_notifications: bool,
}

pub(crate) fn resolve_runtime_settings(
    app_config: &AppConfig,
    startup_config: &StartupConfig,
) -> RuntimeSettings {
    let server_url = startup_config
        .server_url
        .clone()
        .unwrap_or_else(|| app_config.server_url.clone());
    RuntimeSettings {
        server_url: server_url.trim_end_matches('/').to_string(),
        request_timeout_secs: app_config.request_timeout_secs,
        desktop_notifications: app_config.desktop_notifications,
    }
}
