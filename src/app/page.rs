use crate::api::RgbColor;
use crate::ui::{icon_button, panel, section_title, StyleTokens};
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, Button, ContentFit, Image, Label, Orientation, Overlay, Picture,
    PolicyType, Revealer, RevealerTransitionType, ScrolledWindow, Spinner,
};

use super::charts::{BarView, ChartView};

const NEUTRAL_ACCENT: RgbColor = RgbColor::new(0x63, 0x66, 0xF1);

#[derive(Clone)]
pub(super) struct PageUi {
    pub(super) root: Overlay,
    pub(super) scroller: ScrolledWindow,
    pub(super) content: GtkBox,
    pub(super) theme_button: Button,
    pub(super) drop_zone: GtkBox,
    pub(super) browse_button: Button,
    pub(super) preview_frame: GtkBox,
    pub(super) preview_picture: Picture,
    pub(super) preview_caption: Label,
    pub(super) loading_overlay: GtkBox,
    pub(super) results_revealer: Revealer,
    pub(super) results_box: GtkBox,
    pub(super) result_icon: Image,
    pub(super) result_title: Label,
    pub(super) result_subtitle: Label,
    pub(super) confidence_label: Label,
    pub(super) confidence_bar: BarView,
    pub(super) breakdown_list: GtkBox,
    pub(super) chart: ChartView,
    pub(super) severity_badge: Label,
    pub(super) detail_confidence: Label,
    pub(super) detail_description: Label,
    pub(super) detail_timestamp: Label,
    pub(super) detail_filename: Label,
    pub(super) detail_dimensions: Label,
    pub(super) analyze_again_button: Button,
    pub(super) stat_titles: Vec<Label>,
    pub(super) stat_values: Vec<Label>,
    pub(super) stat_icons: Vec<Image>,
    pub(super) refresh_stats_button: Button,
    pub(super) toast_stack: GtkBox,
}

fn muted_label(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("muted");
    label.set_xalign(0.0);
    label.set_wrap(true);
    label
}

fn detail_row(key: &str, value: &Label) -> GtkBox {
    let key_label = muted_label(key);
    key_label.set_width_chars(12);
    value.set_xalign(0.0);
    value.set_hexpand(true);
    value.set_wrap(true);
    let row = GtkBox::new(Orientation::Horizontal, 8);
    row.append(&key_label);
    row.append(value);
    row
}

pub(super) fn build_page_ui(style_tokens: StyleTokens) -> PageUi {
    // ── Header: title + theme toggle ──
    let title_label = Label::new(Some("Brain Tumor MRI Classifier"));
    title_label.add_css_class("app-title");
    title_label.set_xalign(0.0);
    let subtitle_label = muted_label("Upload a brain MRI scan to classify it with the remote model.");
    let title_box = GtkBox::new(Orientation::Vertical, style_tokens.spacing_4);
    title_box.set_hexpand(true);
    title_box.append(&title_label);
    title_box.append(&subtitle_label);

    let theme_button = icon_button(
        "weather-clear-night-symbolic",
        "Toggle dark mode",
        i32::from(style_tokens.control_size),
        &[],
    );
    theme_button.set_valign(Align::Center);

    let header = GtkBox::new(Orientation::Horizontal, style_tokens.spacing_12);
    header.add_css_class("page-header");
    header.append(&title_box);
    header.append(&theme_button);

    // ── Upload panel: drop zone, preview, loading overlay ──
    let drop_icon = Image::from_icon_name("document-open-symbolic");
    drop_icon.set_pixel_size(48);
    let drop_title = Label::new(Some("Drag & drop an MRI image here"));
    drop_title.add_css_class("section-title");
    let drop_hint = muted_label("PNG, JPG, JPEG, GIF, BMP or TIFF up to 16MB");
    drop_hint.set_xalign(0.5);
    let browse_button = Button::with_label("Browse files");
    browse_button.add_css_class("primary-button");
    browse_button.set_halign(Align::Center);

    let drop_zone = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    drop_zone.add_css_class("drop-zone");
    drop_zone.append(&drop_icon);
    drop_zone.append(&drop_title);
    drop_zone.append(&drop_hint);
    drop_zone.append(&browse_button);

    let preview_picture = Picture::new();
    preview_picture.set_content_fit(ContentFit::Contain);
    preview_picture.set_can_shrink(true);
    preview_picture.set_size_request(-1, style_tokens.preview_max_height);
    let preview_caption = muted_label("");
    preview_caption.set_xalign(0.5);
    let preview_frame = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    preview_frame.add_css_class("preview-frame");
    preview_frame.append(&preview_picture);
    preview_frame.append(&preview_caption);
    preview_frame.set_visible(false);

    let upload_box = GtkBox::new(Orientation::Vertical, style_tokens.spacing_16);
    upload_box.append(&drop_zone);
    upload_box.append(&preview_frame);

    let spinner = Spinner::new();
    spinner.set_spinning(true);
    spinner.set_size_request(48, 48);
    let loading_label = Label::new(Some("Analyzing MRI scan..."));
    loading_label.add_css_class("section-title");
    let loading_overlay = GtkBox::new(Orientation::Vertical, style_tokens.spacing_12);
    loading_overlay.add_css_class("loading-overlay");
    loading_overlay.set_halign(Align::Fill);
    loading_overlay.set_valign(Align::Fill);
    let loading_inner = GtkBox::new(Orientation::Vertical, style_tokens.spacing_12);
    loading_inner.set_halign(Align::Center);
    loading_inner.set_valign(Align::Center);
    loading_inner.set_vexpand(true);
    loading_inner.append(&spinner);
    loading_inner.append(&loading_label);
    loading_overlay.append(&loading_inner);
    loading_overlay.set_visible(false);

    let upload_overlay = Overlay::new();
    upload_overlay.set_child(Some(&upload_box));
    upload_overlay.add_overlay(&loading_overlay);
    let upload_panel = panel(style_tokens, "Upload MRI Scan", &upload_overlay);

    // ── Results panel ──
    let result_icon = Image::from_icon_name("image-x-generic-symbolic");
    result_icon.set_pixel_size(40);
    let result_title = Label::new(None);
    result_title.add_css_class("results-title");
    result_title.set_xalign(0.0);
    let result_subtitle = muted_label("");
    let result_heading = GtkBox::new(Orientation::Vertical, style_tokens.spacing_4);
    result_heading.set_hexpand(true);
    result_heading.append(&result_title);
    result_heading.append(&result_subtitle);
    let confidence_label = Label::new(None);
    confidence_label.add_css_class("confidence-value");
    confidence_label.set_valign(Align::Center);
    let result_header = GtkBox::new(Orientation::Horizontal, style_tokens.spacing_16);
    result_header.append(&result_icon);
    result_header.append(&result_heading);
    result_header.append(&confidence_label);

    let confidence_bar = BarView::new(style_tokens.bar_height, NEUTRAL_ACCENT);

    let breakdown_list = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    breakdown_list.set_hexpand(true);
    let chart = ChartView::new(style_tokens.chart_size, style_tokens.spacing_8);
    let chart_box = GtkBox::new(Orientation::Horizontal, style_tokens.spacing_16);
    chart_box.set_halign(Align::Center);
    chart_box.append(&chart.host);
    chart_box.append(&chart.legend);
    let breakdown_row = GtkBox::new(Orientation::Horizontal, style_tokens.spacing_24);
    let breakdown_column = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    breakdown_column.set_hexpand(true);
    breakdown_column.append(&section_title("Probability Breakdown"));
    breakdown_column.append(&breakdown_list);
    breakdown_row.append(&breakdown_column);
    breakdown_row.append(&chart_box);

    let severity_badge = Label::new(None);
    severity_badge.add_css_class("severity-badge");
    let detail_confidence = Label::new(None);
    let detail_description = Label::new(None);
    let detail_timestamp = Label::new(None);
    let detail_filename = Label::new(None);
    let detail_dimensions = Label::new(None);
    let severity_row = GtkBox::new(Orientation::Horizontal, 8);
    let severity_key = muted_label("Severity");
    severity_key.set_width_chars(12);
    severity_row.append(&severity_key);
    severity_row.append(&severity_badge);
    let detail_card = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    detail_card.add_css_class("detail-card");
    detail_card.append(&section_title("Details"));
    detail_card.append(&severity_row);
    detail_card.append(&detail_row("Confidence", &detail_confidence));
    detail_card.append(&detail_row("Description", &detail_description));
    detail_card.append(&detail_row("Analyzed", &detail_timestamp));
    detail_card.append(&detail_row("File", &detail_filename));
    detail_card.append(&detail_row("Dimensions", &detail_dimensions));

    let analyze_again_button = Button::with_label("Analyze another scan");
    analyze_again_button.add_css_class("primary-button");
    analyze_again_button.set_halign(Align::Center);

    let results_content = GtkBox::new(Orientation::Vertical, style_tokens.spacing_16);
    results_content.append(&result_header);
    results_content.append(&confidence_bar.area);
    results_content.append(&breakdown_row);
    results_content.append(&detail_card);
    results_content.append(&analyze_again_button);
    let results_panel = panel(style_tokens, "Analysis Results", &results_content);

    let results_box = GtkBox::new(Orientation::Vertical, 0);
    results_box.append(&results_panel);
    let results_revealer = Revealer::new();
    results_revealer.set_transition_type(RevealerTransitionType::SlideUp);
    results_revealer.set_transition_duration(style_tokens.motion_standard_ms);
    results_revealer.set_child(Some(&results_box));

    // ── Statistics cards ──
    let stats_grid = GtkBox::new(Orientation::Horizontal, style_tokens.spacing_16);
    stats_grid.set_homogeneous(true);
    let mut stat_titles = Vec::with_capacity(4);
    let mut stat_values = Vec::with_capacity(4);
    let mut stat_icons = Vec::with_capacity(4);
    for _ in 0..4 {
        let icon = Image::from_icon_name("view-list-symbolic");
        icon.set_pixel_size(24);
        icon.set_halign(Align::Start);
        let value = Label::new(Some("0"));
        value.add_css_class("stat-value");
        value.set_xalign(0.0);
        let title = muted_label("");
        let card = GtkBox::new(Orientation::Vertical, style_tokens.spacing_4);
        card.add_css_class("stat-card");
        card.append(&icon);
        card.append(&value);
        card.append(&title);
        stats_grid.append(&card);
        stat_titles.push(title);
        stat_values.push(value);
        stat_icons.push(icon);
    }
    let refresh_stats_button = icon_button(
        "view-refresh-symbolic",
        "Refresh statistics",
        i32::from(style_tokens.control_size),
        &[],
    );
    refresh_stats_button.set_halign(Align::End);
    let stats_content = GtkBox::new(Orientation::Vertical, style_tokens.spacing_8);
    stats_content.append(&refresh_stats_button);
    stats_content.append(&stats_grid);
    let stats_panel = panel(style_tokens, "Statistics", &stats_content);

    // ── Assemble ──
    let content = GtkBox::new(Orientation::Vertical, style_tokens.spacing_24);
    content.set_margin_top(style_tokens.spacing_24);
    content.set_margin_bottom(style_tokens.spacing_24);
    content.set_margin_start(style_tokens.spacing_24);
    content.set_margin_end(style_tokens.spacing_24);
    content.append(&upload_panel);
    content.append(&results_revealer);
    content.append(&stats_panel);

    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_vexpand(true);
    scroller.set_child(Some(&content));

    let page = GtkBox::new(Orientation::Vertical, 0);
    page.append(&header);
    page.append(&scroller);

    let toast_stack = GtkBox::new(Orientation::Vertical, style_tokens.spacing_4);
    toast_stack.set_halign(Align::End);
    toast_stack.set_valign(Align::Start);
    toast_stack.set_margin_top(style_tokens.spacing_16);
    toast_stack.set_margin_end(style_tokens.spacing_16);
    toast_stack.set_can_target(false);

    let root = Overlay::new();
    root.set_child(Some(&page));
    root.add_overlay(&toast_stack);

    PageUi {
        root,
        scroller,
        content,
        theme_button,
        drop_zone,
        browse_button,
        preview_frame,
        preview_picture,
        preview_caption,
        loading_overlay,
        results_revealer,
        results_box,
        result_icon,
        result_title,
        result_subtitle,
        confidence_label,
        confidence_bar,
        breakdown_list,
        chart,
        severity_badge,
        detail_confidence,
        detail_description,
        detail_timestamp,
        detail_filename,
        detail_dimensions,
        analyze_again_button,
        stat_titles,
        stat_values,
        stat_icons,
        refresh_stats_button,
        toast_stack,
    }
}
