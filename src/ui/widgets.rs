use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Label, Orientation};

use super::StyleTokens;

pub fn icon_button(
    icon_name: &str,
    tooltip: &str,
    control_size: i32,
    extra_classes: &[&str],
) -> Button {
    let button = Button::from_icon_name(icon_name);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    button.add_css_class("icon-button");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button.set_size_request(control_size, control_size);
    button
}

pub fn section_title(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("section-title");
    label.set_halign(Align::Start);
    label.set_xalign(0.0);
    label
}

/// Titled card that hosts one page section.
pub fn panel(style_tokens: StyleTokens, title: &str, child: &impl IsA<gtk4::Widget>) -> GtkBox {
    let panel = GtkBox::new(Orientation::Vertical, style_tokens.spacing_16);
    panel.add_css_class("panel");
    panel.append(&section_title(title));
    panel.append(child);
    panel
}
