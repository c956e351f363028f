use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::api::RgbColor;
use crate::chart::{ChartId, DonutChart, DonutGeometry};
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, DrawingArea, Label, Orientation};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const TRACK_RGBA: (f64, f64, f64, f64) = (0.50, 0.55, 0.65, 0.22);
const LEGEND_SWATCH_SIZE: i32 = 12;

pub(super) fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Drive `on_frame` with eased progress from 0 to 1 over `duration`.
/// Stops early once `alive` returns false.
pub(super) fn tween<F, A>(duration: Duration, mut on_frame: F, alive: A)
where
    F: FnMut(f64) + 'static,
    A: Fn() -> bool + 'static,
{
    if duration.is_zero() {
        on_frame(1.0);
        return;
    }
    let started = Instant::now();
    gtk4::glib::timeout_add_local(FRAME_INTERVAL, move || {
        if !alive() {
            return gtk4::glib::ControlFlow::Break;
        }
        let t = started.elapsed().as_secs_f64() / duration.as_secs_f64();
        on_frame(ease_out_cubic(t));
        if t >= 1.0 {
            gtk4::glib::ControlFlow::Break
        } else {
            gtk4::glib::ControlFlow::Continue
        }
    });
}

/// Horizontal rounded bar drawn with cairo in an arbitrary color.
#[derive(Clone)]
pub(super) struct BarView {
    pub(super) area: DrawingArea,
    progress: Rc<Cell<f64>>,
    color: Rc<Cell<RgbColor>>,
    generation: Rc<Cell<u64>>,
}

impl BarView {
    pub(super) fn new(height: i32, color: RgbColor) -> Self {
        let area = DrawingArea::new();
        area.set_content_height(height);
        area.set_hexpand(true);
        area.set_valign(Align::Center);
        let progress = Rc::new(Cell::new(0.0_f64));
        let color = Rc::new(Cell::new(color));
        {
            let progress = progress.clone();
            let color = color.clone();
            area.set_draw_func(move |_, context, width, height| {
                let width = f64::from(width);
                let height = f64::from(height);
                let radius = height / 2.0;

                context.save().ok();
                rounded_bar(context, width, height, radius);
                let (r, g, b, a) = TRACK_RGBA;
                context.set_source_rgba(r, g, b, a);
                let _ = context.fill();

                let filled = width * progress.get().clamp(0.0, 1.0);
                if filled > 0.0 {
                    rounded_bar(context, filled.max(height), height, radius);
                    let (r, g, b) = color.get().to_cairo_rgb();
                    context.set_source_rgb(r, g, b);
                    let _ = context.fill();
                }
                context.restore().ok();
            });
        }
        Self {
            area,
            progress,
            color,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub(super) fn set_color(&self, color: RgbColor) {
        self.color.set(color);
        self.area.queue_draw();
    }

    /// Start from empty and grow to `target` after `delay`.
    pub(super) fn animate_to(&self, target: f64, delay: Duration, duration: Duration) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.progress.set(0.0);
        self.area.queue_draw();

        let bar = self.clone();
        gtk4::glib::timeout_add_local_once(delay, move || {
            if bar.generation.get() != generation {
                return;
            }
            let frame_bar = bar.clone();
            let alive_bar = bar;
            tween(
                duration,
                move |eased| {
                    frame_bar.progress.set(target * eased);
                    frame_bar.area.queue_draw();
                },
                move || alive_bar.generation.get() == generation,
            );
        });
    }
}

fn rounded_bar(context: &gtk4::cairo::Context, width: f64, height: f64, radius: f64) {
    use std::f64::consts::{FRAC_PI_2, PI};
    context.new_path();
    context.arc(width - radius, radius, radius, -FRAC_PI_2, FRAC_PI_2);
    context.arc(radius, height - radius, radius, FRAC_PI_2, PI + FRAC_PI_2);
    context.close_path();
}

/// Hosts the single donut chart widget; a new chart id tears down the old widget.
#[derive(Clone)]
pub(super) struct ChartView {
    pub(super) host: GtkBox,
    pub(super) legend: GtkBox,
    current: Rc<RefCell<Option<(ChartId, DrawingArea)>>>,
    size: i32,
}

impl ChartView {
    pub(super) fn new(size: i32, spacing: i32) -> Self {
        let host = GtkBox::new(Orientation::Vertical, 0);
        host.set_halign(Align::Center);
        let legend = GtkBox::new(Orientation::Vertical, spacing);
        legend.set_valign(Align::Center);
        Self {
            host,
            legend,
            current: Rc::new(RefCell::new(None)),
            size,
        }
    }

    pub(super) fn sync(&self, chart: Option<&DonutChart>) {
        let attached = self.current.borrow().as_ref().map(|(id, _)| *id);
        if attached == chart.map(DonutChart::id) {
            return;
        }

        if let Some((id, area)) = self.current.borrow_mut().take() {
            self.host.remove(&area);
            tracing::debug!(chart = id.0, "removed chart widget");
        }
        while let Some(child) = self.legend.first_child() {
            self.legend.remove(&child);
        }

        let Some(chart) = chart else {
            return;
        };
        let chart = Rc::new(chart.clone());
        let area = donut_area(chart.clone(), self.size);
        self.host.append(&area);
        for slice in chart.slices() {
            self.legend.append(&legend_row(slice.color, &slice.legend_text()));
        }
        *self.current.borrow_mut() = Some((chart.id(), area));
    }
}

fn donut_area(chart: Rc<DonutChart>, size: i32) -> DrawingArea {
    let area = DrawingArea::new();
    area.set_content_width(size);
    area.set_content_height(size);
    {
        let chart = chart.clone();
        area.set_draw_func(move |_, context, width, height| {
            let geometry = DonutGeometry::for_area(f64::from(width), f64::from(height));
            context.save().ok();
            for slice in chart.slices() {
                if slice.end_angle <= slice.start_angle {
                    continue;
                }
                context.new_path();
                context.arc(
                    geometry.center_x,
                    geometry.center_y,
                    geometry.outer_radius,
                    slice.start_angle,
                    slice.end_angle,
                );
                context.arc_negative(
                    geometry.center_x,
                    geometry.center_y,
                    geometry.inner_radius,
                    slice.end_angle,
                    slice.start_angle,
                );
                context.close_path();
                let (r, g, b) = slice.color.to_cairo_rgb();
                context.set_source_rgb(r, g, b);
                let _ = context.fill_preserve();
                context.set_source_rgba(1.0, 1.0, 1.0, 0.85);
                context.set_line_width(2.0);
                let _ = context.stroke();
            }
            context.restore().ok();
        });
    }

    area.set_has_tooltip(true);
    area.connect_query_tooltip(move |area, x, y, _keyboard, tooltip| {
        let hit = chart.slice_at(
            f64::from(x),
            f64::from(y),
            f64::from(area.width()),
            f64::from(area.height()),
        );
        match hit {
            Some(slice) => {
                tooltip.set_text(Some(&slice.tooltip_text()));
                true
            }
            None => false,
        }
    });
    area
}

fn legend_row(color: RgbColor, text: &str) -> GtkBox {
    let swatch = DrawingArea::new();
    swatch.set_content_width(LEGEND_SWATCH_SIZE);
    swatch.set_content_height(LEGEND_SWATCH_SIZE);
    swatch.set_valign(Align::Center);
    swatch.set_draw_func(move |_, context, width, height| {
        let radius = f64::from(width.min(height)) / 2.0;
        context.arc(
            f64::from(width) / 2.0,
            f64::from(height) / 2.0,
            radius,
            0.0,
            std::f64::consts::TAU,
        );
        let (r, g, b) = color.to_cairo_rgb();
        context.set_source_rgb(r, g, b);
        let _ = context.fill();
    });

    let label = Label::new(Some(text));
    label.set_xalign(0.0);

    let row = GtkBox::new(Orientation::Horizontal, 8);
    row.append(&swatch);
    row.append(&label);
    row
}
