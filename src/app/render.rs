use std::cell::Cell;
use std::time::Duration;

use crate::chart::ChartId;
use crate::controller::{AnalysisTicket, PageModel, PreviewImage};
use crate::results::ResultsView;
use crate::stats::StatisticsSnapshot;
use crate::theme::ThemeMode;
use crate::ui::StyleTokens;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation};

use super::charts::{tween, BarView};
use super::page::PageUi;
use super::toast::ToastRuntime;

/// What is currently on screen, so renders only touch widgets that changed.
#[derive(Default)]
pub(super) struct RenderedState {
    theme: Cell<Option<ThemeMode>>,
    preview: Cell<Option<AnalysisTicket>>,
    results: Cell<Option<ChartId>>,
    statistics: Cell<Option<StatisticsSnapshot>>,
}

pub(super) struct RenderContext<'a> {
    pub(super) ui: &'a PageUi,
    pub(super) toasts: &'a ToastRuntime,
    pub(super) rendered: &'a RenderedState,
    pub(super) style_tokens: StyleTokens,
    pub(super) motion_enabled: bool,
}

impl RenderContext<'_> {
    fn motion(&self, millis: u32) -> Duration {
        if self.motion_enabled {
            Duration::from_millis(u64::from(millis))
        } else {
            Duration::ZERO
        }
    }
}

/// Sync widgets to the model. Returns the theme when it changed since the last render.
pub(super) fn render_page(context: &RenderContext<'_>, model: &mut PageModel) -> Option<ThemeMode> {
    let ui = context.ui;
    let theme_changed = render_theme_button(context, model.theme);

    if model.drop_highlight {
        ui.drop_zone.add_css_class("drag-over");
    } else {
        ui.drop_zone.remove_css_class("drag-over");
    }

    render_preview(context, model.preview.as_ref());
    ui.loading_overlay.set_visible(model.loading);
    ui.browse_button.set_sensitive(!model.loading);

    let chart_id = model.chart.attached().map(|chart| chart.id());
    if context.rendered.results.get() != chart_id {
        if let Some(view) = model.results.as_ref() {
            render_results(context, view);
        }
        ui.chart.sync(model.chart.attached());
        context.rendered.results.set(chart_id);
    }
    ui.results_revealer.set_reveal_child(model.results_revealed);
    if model.take_scroll_request() {
        scroll_to_results(context);
    }

    if context.rendered.statistics.get() != Some(model.statistics) {
        render_statistics(ui, &model.statistics);
        context.rendered.statistics.set(Some(model.statistics));
    }

    for toast in model.toasts.drain() {
        context.toasts.show(&toast);
    }

    theme_changed
}

fn render_theme_button(context: &RenderContext<'_>, mode: ThemeMode) -> Option<ThemeMode> {
    if context.rendered.theme.get() == Some(mode) {
        return None;
    }
    let button = &context.ui.theme_button;
    button.set_icon_name(mode.toggle_icon_name());
    button.set_tooltip_text(Some(match mode {
        ThemeMode::Light => "Switch to dark mode",
        ThemeMode::Dark => "Switch to light mode",
    }));
    context.rendered.theme.set(Some(mode));
    Some(mode)
}

fn render_preview(context: &RenderContext<'_>, preview: Option<&PreviewImage>) {
    let ticket = preview.map(|preview| preview.ticket);
    if context.rendered.preview.get() == ticket {
        return;
    }
    context.rendered.preview.set(ticket);

    let ui = context.ui;
    let Some(preview) = preview else {
        ui.preview_picture.set_paintable(None::<&gtk4::gdk::Paintable>);
        ui.preview_frame.set_visible(false);
        return;
    };

    let bytes = gtk4::glib::Bytes::from(preview.bytes.as_slice());
    match gtk4::gdk::Texture::from_bytes(&bytes) {
        Ok(texture) => ui.preview_picture.set_paintable(Some(&texture)),
        Err(err) => {
            // Formats gdk cannot decode still upload; only the thumbnail is lost.
            tracing::debug!(%err, mime = preview.mime.as_str(), "preview not decodable");
            ui.preview_picture.set_paintable(None::<&gtk4::gdk::Paintable>);
        }
    }
    ui.preview_caption.set_text(&preview.filename);
    ui.preview_frame.set_visible(true);
}

fn render_results(context: &RenderContext<'_>, view: &ResultsView) {
    let ui = context.ui;
    let tokens = context.style_tokens;

    ui.result_icon.set_icon_name(Some(view.header.icon_name));
    ui.result_title.set_text(&view.header.title);
    ui.result_subtitle.set_text(&view.header.subtitle);
    ui.confidence_label.set_text(&view.confidence_text);
    ui.confidence_bar.set_color(view.header.color);
    ui.confidence_bar.animate_to(
        view.confidence_fraction,
        context.motion(tokens.motion_standard_ms),
        context.motion(tokens.bar_grow_ms),
    );

    while let Some(child) = ui.breakdown_list.first_child() {
        ui.breakdown_list.remove(&child);
    }
    for row in &view.breakdown {
        let label = Label::new(Some(&row.label));
        label.set_xalign(0.0);
        label.set_hexpand(true);
        let value = Label::new(Some(&row.text));
        value.add_css_class("muted");
        let heading = GtkBox::new(Orientation::Horizontal, tokens.spacing_8);
        heading.append(&label);
        heading.append(&value);

        let bar = BarView::new(tokens.bar_height, row.color);
        let container = GtkBox::new(Orientation::Vertical, tokens.spacing_4);
        container.add_css_class("breakdown-row");
        container.append(&heading);
        container.append(&bar.area);
        ui.breakdown_list.append(&container);

        let delay = if context.motion_enabled {
            row.animation_delay
        } else {
            Duration::ZERO
        };
        bar.animate_to(row.fraction, delay, context.motion(tokens.bar_grow_ms));
    }

    let detail = &view.detail;
    for class in [
        "severity-high",
        "severity-medium",
        "severity-normal",
        "severity-unknown",
    ] {
        ui.severity_badge.remove_css_class(class);
    }
    ui.severity_badge.add_css_class(detail.severity.css_class());
    ui.severity_badge.set_text(detail.severity.label());
    ui.detail_confidence.set_text(&detail.confidence_text);
    ui.detail_description.set_text(&detail.description);
    ui.detail_timestamp.set_text(&detail.timestamp);
    ui.detail_filename
        .set_text(detail.filename.as_deref().unwrap_or("-"));
    ui.detail_dimensions
        .set_text(detail.dimensions.as_deref().unwrap_or("-"));
}

fn render_statistics(ui: &PageUi, statistics: &StatisticsSnapshot) {
    let cards = statistics.cards();
    for (index, card) in cards.iter().enumerate() {
        if let Some(title) = ui.stat_titles.get(index) {
            title.set_text(card.title);
        }
        if let Some(value) = ui.stat_values.get(index) {
            value.set_text(&card.value);
        }
        if let Some(icon) = ui.stat_icons.get(index) {
            icon.set_icon_name(Some(card.icon_name));
        }
    }
}

/// Smoothly bring the results panel into view once the revealer has opened.
fn scroll_to_results(context: &RenderContext<'_>) {
    let scroller = context.ui.scroller.clone();
    let results = context.ui.results_box.clone();
    let content = context.ui.content.clone();
    let duration = context.motion(context.style_tokens.motion_standard_ms);
    gtk4::glib::timeout_add_local_once(duration, move || {
        let origin = gtk4::graphene::Point::new(0.0, 0.0);
        let Some(point) = results.compute_point(&content, &origin) else {
            tracing::debug!("results panel not laid out; skipping scroll");
            return;
        };
        let adjustment = scroller.vadjustment();
        let from = adjustment.value();
        let ceiling = (adjustment.upper() - adjustment.page_size()).max(0.0);
        let to = f64::from(point.y()).clamp(0.0, ceiling);
        tween(
            duration,
            move |eased| adjustment.set_value(from + (to - from) * eased),
            || true,
        );
    });
}
