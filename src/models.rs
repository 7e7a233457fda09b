use crate::layout::TextBounds;
use image::Rgba;
use std::path::PathBuf;

/// An 8-bit RGBA color. Three-channel inputs are fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// Everything a single logo render needs. Built per call, dropped afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    pub text: String,
    pub font_path: PathBuf,
    pub text_color: Color,
    pub background: Color,
    pub output_path: PathBuf,
    /// Square canvas with the text nudged upwards.
    pub is_icon: bool,
}

impl RenderRequest {
    pub fn new(
        text: impl Into<String>,
        font_path: impl Into<PathBuf>,
        text_color: impl Into<Color>,
        background: impl Into<Color>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            text: text.into(),
            font_path: font_path.into(),
            text_color: text_color.into(),
            background: background.into(),
            output_path: output_path.into(),
            is_icon: false,
        }
    }

    pub fn icon(mut self) -> Self {
        self.is_icon = true;
        self
    }
}

/// Summary of an image written to disk.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Ink bounds of the text, relative to the layout origin.
    pub bounds: TextBounds,
    /// Hex SHA-256 of the written file.
    pub sha256: String,
}
