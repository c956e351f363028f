pub mod style;
pub mod widgets;

pub use style::{default_color_tokens, ColorTokens, StyleTokens, LAYOUT_TOKENS};
pub use widgets::{icon_button, panel, section_title};
