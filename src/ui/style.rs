use crate::theme::ThemeMode;

/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub spacing_12: i32,
    pub spacing_16: i32,
    pub spacing_24: i32,
    pub card_radius: u16,
    pub panel_radius: u16,
    pub control_radius: u16,
    pub control_size: u16,
    pub border_width: u16,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub preview_max_height: i32,
    pub chart_size: i32,
    pub bar_height: i32,
    pub motion_standard_ms: u32,
    pub motion_hover_ms: u32,
    pub bar_grow_ms: u32,
    pub toast_slide_ms: u32,
    pub toast_hold_ms: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    spacing_12: 12,
    spacing_16: 16,
    spacing_24: 24,
    card_radius: 14,
    panel_radius: 18,
    control_radius: 12,
    control_size: 40,
    border_width: 1,
    window_default_width: 1080,
    window_default_height: 820,
    preview_max_height: 320,
    chart_size: 260,
    bar_height: 10,
    motion_standard_ms: 220,
    motion_hover_ms: 160,
    bar_grow_ms: 600,
    toast_slide_ms: 300,
    toast_hold_ms: 5_000,
};

/// Per-mode colors; user-overridable through `theme.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTokens {
    pub window_background: String,
    pub panel_background: String,
    pub border_color: String,
    pub text_color: String,
    pub muted_text_color: String,
    pub accent_color: String,
    pub track_color: String,
    pub overlay_background: String,
}

pub fn default_color_tokens(mode: ThemeMode) -> ColorTokens {
    match mode {
        ThemeMode::Light => ColorTokens {
            window_background: "#F4F6FB".to_string(),
            panel_background: "#FFFFFF".to_string(),
            border_color: "rgba(15, 23, 42, 0.10)".to_string(),
            text_color: "#0F172A".to_string(),
            muted_text_color: "#64748B".to_string(),
            accent_color: "#6366F1".to_string(),
            track_color: "#E2E8F0".to_string(),
            overlay_background: "rgba(255, 255, 255, 0.82)".to_string(),
        },
        ThemeMode::Dark => ColorTokens {
            window_background: "#0B1120".to_string(),
            panel_background: "#111827".to_string(),
            border_color: "rgba(255, 255, 255, 0.10)".to_string(),
            text_color: "#F1F5F9".to_string(),
            muted_text_color: "#94A3B8".to_string(),
            accent_color: "#818CF8".to_string(),
            track_color: "#1E293B".to_string(),
            overlay_background: "rgba(2, 6, 23, 0.78)".to_string(),
        },
    }
}
