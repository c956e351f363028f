use std::time::Duration;

use crate::config::{load_app_config, resolve_runtime_settings, RuntimeSettings, StartupConfig};
use crate::theme::{
    load_theme_config, resolve_color_tokens, FileThemeStore, MemoryThemeStore, ThemeColors,
    ThemeMode, ThemeStore,
};
use crate::ui::{ColorTokens, StyleTokens, LAYOUT_TOKENS};

pub(super) struct AppBootstrap {
    pub(super) settings: RuntimeSettings,
    pub(super) theme_colors: Option<ThemeColors>,
    pub(super) theme_store: Box<dyn ThemeStore>,
}

pub(super) fn bootstrap_app_runtime() -> AppBootstrap {
    let startup_config = StartupConfig::from_args();
    let app_config = load_app_config();
    let settings = resolve_runtime_settings(&app_config, &startup_config);
    tracing::info!(
        server = settings.server_url.as_str(),
        timeout_secs = ?settings.request_timeout_secs,
        desktop_notifications = settings.desktop_notifications,
        "resolved runtime settings"
    );

    let theme_colors = load_theme_config()
        .map(|config| config.colors)
        .unwrap_or_else(|err| {
            tracing::warn!(?err, "failed to load theme config; using default colors");
            None
        });

    let theme_store: Box<dyn ThemeStore> = match FileThemeStore::with_default_path() {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(?err, "no config directory; theme preference lasts for this session");
            Box::new(MemoryThemeStore::default())
        }
    };

    AppBootstrap {
        settings,
        theme_colors,
        theme_store,
    }
}

/// `None` and zero both mean the request may wait indefinitely.
pub(super) fn request_timeout(settings: &RuntimeSettings) -> Option<Duration> {
    settings
        .request_timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

pub(super) struct ResolvedThemeRuntime {
    pub(super) style_tokens: StyleTokens,
    pub(super) color_tokens: ColorTokens,
}

pub(super) fn resolve_theme_runtime(
    mode: ThemeMode,
    theme_colors: Option<&ThemeColors>,
) -> ResolvedThemeRuntime {
    ResolvedThemeRuntime {
        style_tokens: LAYOUT_TOKENS,
        color_tokens: resolve_color_tokens(mode, theme_colors),
    }
}
