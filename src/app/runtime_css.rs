use crate::ui::{ColorTokens, StyleTokens};
use gtk4::CssProvider;

/// The application stylesheet; reloaded in place when the theme flips.
pub(super) struct RuntimeCss {
    provider: CssProvider,
}

impl RuntimeCss {
    pub(super) fn install() -> Self {
        let provider = CssProvider::new();
        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        } else {
            tracing::warn!("no display available; runtime css not installed");
        }
        Self { provider }
    }

    pub(super) fn apply(&self, tokens: StyleTokens, colors: &ColorTokens, motion_enabled: bool) {
        self.provider
            .load_from_data(&runtime_css(tokens, colors, motion_enabled));
    }
}

pub(super) fn runtime_css(tokens: StyleTokens, colors: &ColorTokens, motion_enabled: bool) -> String {
    let motion_standard_ms = if motion_enabled {
        tokens.motion_standard_ms
    } else {
        0
    };
    let motion_hover_ms = if motion_enabled {
        tokens.motion_hover_ms
    } else {
        0
    };
    format!(
        "
window.mriscope-root {{
  background: {window_background};
  color: {text_color};
}}
.mriscope-root label {{
  color: {text_color};
}}
.mriscope-root label.muted {{
  color: {muted_text_color};
}}
tooltip {{
  border-radius: {control_radius}px;
  border: {border_width}px solid {border_color};
  background: {panel_background};
  color: {text_color};
}}
.page-header {{
  padding: {spacing_16}px {spacing_24}px;
  border-bottom: {border_width}px solid {border_color};
  background: {panel_background};
}}
.app-title {{
  font-size: 22px;
  font-weight: 700;
}}
.panel {{
  border-radius: {panel_radius}px;
  border: {border_width}px solid {border_color};
  background: {panel_background};
  padding: {spacing_24}px;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
}}
.section-title {{
  font-size: 16px;
  font-weight: 600;
}}
.icon-button {{
  border-radius: {control_radius}px;
  min-width: {control_size}px;
  min-height: {control_size}px;
  padding: 0;
  background: transparent;
  transition: box-shadow {motion_hover_ms}ms cubic-bezier(0.4, 0, 0.2, 1);
}}
.icon-button:hover {{
  box-shadow: 0 0 0 1.5px {accent_color};
}}
button.primary-button {{
  background: {accent_color};
  color: #FFFFFF;
  border-radius: {control_radius}px;
  padding: {spacing_8}px {spacing_16}px;
  font-weight: 600;
}}
button.primary-button label {{
  color: #FFFFFF;
}}

/* ── Drop zone ── */
.drop-zone {{
  border-radius: {card_radius}px;
  border: 2px dashed {border_color};
  padding: {spacing_24}px;
  transition: border-color {motion_standard_ms}ms ease,
              background {motion_standard_ms}ms ease;
}}
.drop-zone.drag-over {{
  border-color: {accent_color};
  background: alpha({accent_color}, 0.08);
}}
.preview-frame {{
  border-radius: {card_radius}px;
  border: {border_width}px solid {border_color};
  padding: {spacing_8}px;
}}
.loading-overlay {{
  background: {overlay_background};
  border-radius: {panel_radius}px;
}}

/* ── Results ── */
.results-title {{
  font-size: 24px;
  font-weight: 700;
}}
.confidence-value {{
  font-size: 28px;
  font-weight: 700;
  color: {accent_color};
}}
.breakdown-row {{
  padding: {spacing_4}px 0;
}}
.detail-card {{
  border-radius: {card_radius}px;
  border: {border_width}px solid {border_color};
  padding: {spacing_16}px;
}}
.severity-badge {{
  border-radius: 999px;
  padding: 2px {spacing_8}px;
  font-weight: 600;
}}
.severity-high {{
  background: rgba(239, 68, 68, 0.16);
  color: #EF4444;
}}
.severity-medium {{
  background: rgba(245, 158, 11, 0.16);
  color: #F59E0B;
}}
.severity-normal {{
  background: rgba(16, 185, 129, 0.16);
  color: #10B981;
}}
.severity-unknown {{
  background: {track_color};
  color: {muted_text_color};
}}

/* ── Statistics ── */
.stat-card {{
  border-radius: {card_radius}px;
  border: {border_width}px solid {border_color};
  background: {panel_background};
  padding: {spacing_16}px;
}}
.stat-value {{
  font-size: 26px;
  font-weight: 700;
}}

/* ── Toasts ── */
.toast {{
  border-radius: {control_radius}px;
  border: {border_width}px solid {border_color};
  background: {panel_background};
  color: {text_color};
  padding: {spacing_12}px {spacing_16}px;
  margin: {spacing_4}px 0;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.14),
              0 1px 3px rgba(0, 0, 0, 0.08);
}}
.toast-success {{
  border-left: 4px solid #10B981;
}}
.toast-error {{
  border-left: 4px solid #EF4444;
}}
.toast-warning {{
  border-left: 4px solid #F59E0B;
}}
.toast-info {{
  border-left: 4px solid {accent_color};
}}
",
        window_background = colors.window_background,
        panel_background = colors.panel_background,
        border_color = colors.border_color,
        text_color = colors.text_color,
        muted_text_color = colors.muted_text_color,
        accent_color = colors.accent_color,
        track_color = colors.track_color,
        overlay_background = colors.overlay_background,
        card_radius = tokens.card_radius,
        panel_radius = tokens.panel_radius,
        control_radius = tokens.control_radius,
        control_size = tokens.control_size,
        border_width = tokens.border_width,
        spacing_4 = tokens.spacing_4,
        spacing_8 = tokens.spacing_8,
        spacing_12 = tokens.spacing_12,
        spacing_16 = tokens.spacing_16,
        spacing_24 = tokens.spacing_24,
        motion_standard_ms = motion_standard_ms,
        motion_hover_ms = motion_hover_ms,
    )
}
