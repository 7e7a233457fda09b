//! Renders fixed-text logo images from a TrueType font.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Color, RenderRequest, Rendered};
pub use render::{create_logo, render_logo};
