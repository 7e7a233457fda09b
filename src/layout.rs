//! Canvas sizing and text placement.
//!
//! All arithmetic is in whole pixels. Bounds are the tight ink box of the
//! shaped text, measured relative to the layout origin the text was shaped at.

/// Font size in pixels per em.
pub const FONT_SIZE: f32 = 150.0;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
/// Margin added on every side of the measured text.
pub const PADDING: u32 = 40;
/// Upward shift applied to icon text, tuned by eye for the glyph set.
pub const ICON_VERTICAL_NUDGE: i32 = 10;

/// Ink bounding box; `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Canvas dimensions for the given text bounds. Icons are square on the
/// longer text side.
pub fn canvas_size(bounds: &TextBounds, is_icon: bool) -> CanvasSize {
    let (text_width, text_height) = (bounds.width(), bounds.height());
    if is_icon {
        let side = text_width.max(text_height) + PADDING * 2;
        CanvasSize { width: side, height: side }
    } else {
        CanvasSize {
            width: text_width + PADDING * 2,
            height: text_height + PADDING * 2,
        }
    }
}

/// Layout origin that centres the ink box on the canvas.
pub fn draw_origin(bounds: &TextBounds, canvas: CanvasSize, is_icon: bool) -> (i32, i32) {
    let x = (canvas.width - bounds.width()) as i32 / 2 - bounds.left;
    let mut y = (canvas.height - bounds.height()) as i32 / 2 - bounds.top;
    if is_icon {
        y -= ICON_VERTICAL_NUDGE;
    }
    (x, y)
}
