use std::time::Duration;

use crate::notification::{Toast, ToastTimeline};
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Image, Label, Orientation, Revealer, RevealerTransitionType};

/// Stack of sliding toast cards in the top-right corner of the page.
#[derive(Clone)]
pub(super) struct ToastRuntime {
    stack: GtkBox,
    timeline: ToastTimeline,
}

impl ToastRuntime {
    pub(super) fn new(stack: &GtkBox, timeline: ToastTimeline) -> Self {
        Self {
            stack: stack.clone(),
            timeline,
        }
    }

    pub(super) fn show(&self, toast: &Toast) {
        let icon = Image::from_icon_name(toast.kind.icon_name());
        let label = Label::new(Some(&toast.message));
        label.set_wrap(true);
        label.set_max_width_chars(42);
        label.set_xalign(0.0);

        let card = GtkBox::new(Orientation::Horizontal, 10);
        card.add_css_class("toast");
        card.add_css_class(toast.kind.css_class());
        card.append(&icon);
        card.append(&label);

        let revealer = Revealer::new();
        revealer.set_transition_type(RevealerTransitionType::SlideLeft);
        revealer.set_transition_duration(duration_ms(self.timeline.slide));
        revealer.set_halign(Align::End);
        revealer.set_child(Some(&card));
        self.stack.append(&revealer);

        {
            let revealer = revealer.clone();
            gtk4::glib::idle_add_local_once(move || revealer.set_reveal_child(true));
        }
        {
            let revealer = revealer.clone();
            gtk4::glib::timeout_add_local_once(self.timeline.dismiss_at(), move || {
                revealer.set_reveal_child(false);
            });
        }
        let stack = self.stack.clone();
        let id = toast.id;
        gtk4::glib::timeout_add_local_once(self.timeline.remove_at(), move || {
            stack.remove(&revealer);
            tracing::trace!(id, "removed toast");
        });
    }
}

fn duration_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
