//! Donut chart model and the slot that owns the single live chart instance.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::api::RgbColor;

pub const INNER_RADIUS_RATIO: f64 = 0.6;
const OUTER_MARGIN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub key: String,
    pub label: String,
    pub percentage: f64,
    pub color: RgbColor,
    /// Cairo angles: radians clockwise from the positive x axis.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ChartSlice {
    pub fn legend_text(&self) -> String {
        format!("{} ({:.1}%)", self.label, self.percentage)
    }

    pub fn tooltip_text(&self) -> String {
        format!("{}: {:.1}%", self.label, self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceInput<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub percentage: f64,
    pub color: RgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl DonutGeometry {
    pub fn for_area(width: f64, height: f64) -> Self {
        let outer_radius = (width.min(height) / 2.0 - OUTER_MARGIN).max(1.0);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            outer_radius,
            inner_radius: outer_radius * INNER_RADIUS_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    id: ChartId,
    slices: Vec<ChartSlice>,
}

impl DonutChart {
    fn build(id: ChartId, inputs: &[SliceInput<'_>]) -> Self {
        let total: f64 = inputs.iter().map(|input| input.percentage.max(0.0)).sum();
        let mut cursor = -FRAC_PI_2;
        let slices = inputs
            .iter()
            .map(|input| {
                let sweep = if total > 0.0 {
                    input.percentage.max(0.0) / total * TAU
                } else {
                    0.0
                };
                let slice = ChartSlice {
                    key: input.key.to_string(),
                    label: input.label.to_string(),
                    percentage: input.percentage,
                    color: input.color,
                    start_angle: cursor,
                    end_angle: cursor + sweep,
                };
                cursor += sweep;
                slice
            })
            .collect();
        Self { id, slices }
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn slices(&self) -> &[ChartSlice] {
        &self.slices
    }

    /// Slice under a pointer position inside a `width` x `height` drawing area.
    pub fn slice_at(&self, x: f64, y: f64, width: f64, height: f64) -> Option<&ChartSlice> {
        let geometry = DonutGeometry::for_area(width, height);
        let dx = x - geometry.center_x;
        let dy = y - geometry.center_y;
        let distance = dx.hypot(dy);
        if distance < geometry.inner_radius || distance > geometry.outer_radius {
            return None;
        }

        let from_top = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
        self.slices.iter().find(|slice| {
            let start = slice.start_angle + FRAC_PI_2;
            let end = slice.end_angle + FRAC_PI_2;
            end > start && from_top >= start && from_top < end
        })
    }
}

/// Owns the one chart attached to the results panel.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<DonutChart>,
    next_id: u64,
    disposed: u64,
}

impl ChartSlot {
    /// Dispose the attached chart, if any, and attach a fresh one.
    pub fn replace(&mut self, inputs: &[SliceInput<'_>]) -> ChartId {
        if let Some(previous) = self.current.take() {
            self.disposed = self.disposed.saturating_add(1);
            tracing::debug!(chart = previous.id.0, "disposed chart instance");
        }
        self.next_id = self.next_id.saturating_add(1);
        let id = ChartId(self.next_id);
        self.current = Some(DonutChart::build(id, inputs));
        tracing::debug!(chart = id.0, slices = inputs.len(), "attached chart instance");
        id
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.disposed = self.disposed.saturating_add(1);
            tracing::debug!(chart = previous.id.0, "disposed chart instance");
        }
    }

    pub fn attached(&self) -> Option<&DonutChart> {
        self.current.as_ref()
    }

    pub fn attached_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }
}
