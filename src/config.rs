//! Fixed inputs for the Rikolog logo set.

use crate::models::{Color, RenderRequest};

pub const FONT_FILE: &str = "AKACHAN/AKACHANk.TTF";
pub const LOGO_TEXT: &str = "リコログ";

// Tailwind-like palette
pub const PINK_600: Color = Color::rgb(219, 39, 119); // #db2777
pub const SLATE_900: Color = Color::rgb(15, 23, 42); // #0f172a
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0);

/// The logo variants to generate, in order.
pub fn logo_requests() -> Vec<RenderRequest> {
    vec![
        RenderRequest::new(LOGO_TEXT, FONT_FILE, PINK_600, TRANSPARENT, "rikolog_logo_pink.png"),
        RenderRequest::new(LOGO_TEXT, FONT_FILE, SLATE_900, TRANSPARENT, "rikolog_logo_slate.png"),
        RenderRequest::new(LOGO_TEXT, FONT_FILE, WHITE, PINK_600, "rikolog_logo_icon.png").icon(),
    ]
}
