//! The logo renderer: shape, measure, size, paint, save.

use crate::error::{Error, Result};
use crate::layout::{self, FONT_SIZE, LINE_HEIGHT_FACTOR, TextBounds};
use crate::models::{Color, RenderRequest, Rendered};
use crate::utils::{LoadedFont, calculate_hash, load_font};
use cosmic_text::{Attrs, Buffer, Color as GlyphColor, Family, Metrics, Shaping, SwashCache};
use image::{Pixel, Rgba, RgbaImage};
use log::{debug, error, info};

/// Renders one logo and writes it to `request.output_path`.
///
/// The image format follows the output file extension.
pub fn render_logo(request: &RenderRequest) -> Result<Rendered> {
    let mut font = load_font(&request.font_path)?;
    let mut cache = SwashCache::new();
    let buffer = shape_text(&mut font, &request.text);

    let bounds = measure_ink(&mut font, &mut cache, &buffer);
    let canvas_size = layout::canvas_size(&bounds, request.is_icon);
    let origin = layout::draw_origin(&bounds, canvas_size, request.is_icon);
    debug!(
        "{}: ink {:?}, canvas {}x{}, origin {:?}",
        request.output_path.display(),
        bounds,
        canvas_size.width,
        canvas_size.height,
        origin
    );

    let mut canvas = RgbaImage::from_pixel(
        canvas_size.width,
        canvas_size.height,
        request.background.to_pixel(),
    );
    paint_text(&mut font, &mut cache, &buffer, &mut canvas, origin, request.text_color);

    canvas.save(&request.output_path)?;
    let sha256 = calculate_hash(&request.output_path)?;
    debug!("{}: sha256 {}", request.output_path.display(), sha256);
    info!("Generated: {}", request.output_path.display());

    Ok(Rendered {
        output_path: request.output_path.clone(),
        width: canvas_size.width,
        height: canvas_size.height,
        bounds,
        sha256,
    })
}

/// Like [`render_logo`], but an unloadable font is logged and skipped.
///
/// Returns `Ok(None)` when the font could not be loaded; nothing is written
/// in that case. Any other failure is passed back to the caller.
pub fn create_logo(request: &RenderRequest) -> Result<Option<Rendered>> {
    match render_logo(request) {
        Ok(rendered) => Ok(Some(rendered)),
        Err(Error::FontLoad { path, reason }) => {
            error!("Error: Font file not found at {} ({})", path.display(), reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn shape_text(font: &mut LoadedFont, text: &str) -> Buffer {
    let metrics = Metrics::new(FONT_SIZE, FONT_SIZE * LINE_HEIGHT_FACTOR);
    let mut buffer = Buffer::new(&mut font.font_system, metrics);
    let attrs = Attrs::new().family(Family::Name(&font.family));
    buffer.set_text(&mut font.font_system, text, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(&mut font.font_system, false);
    buffer
}

/// Tight box around every pixel with non-zero glyph coverage.
fn measure_ink(font: &mut LoadedFont, cache: &mut SwashCache, buffer: &Buffer) -> TextBounds {
    let mut ink: Option<TextBounds> = None;
    buffer.draw(
        &mut font.font_system,
        cache,
        GlyphColor::rgb(0, 0, 0),
        |x, y, w, h, color| {
            if color.a() == 0 || w == 0 || h == 0 {
                return;
            }
            let rect = TextBounds {
                left: x,
                top: y,
                right: x + w as i32,
                bottom: y + h as i32,
            };
            ink = Some(match ink {
                Some(acc) => acc.union(rect),
                None => rect,
            });
        },
    );
    ink.unwrap_or_default()
}

/// Composites glyph coverage onto the canvas, shifted by `origin`.
fn paint_text(
    font: &mut LoadedFont,
    cache: &mut SwashCache,
    buffer: &Buffer,
    canvas: &mut RgbaImage,
    origin: (i32, i32),
    color: Color,
) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let base = GlyphColor::rgba(color.r, color.g, color.b, color.a);

    buffer.draw(&mut font.font_system, cache, base, |x, y, w, h, glyph| {
        // Coverage arrives in the alpha channel; scale it by the text alpha.
        let alpha = (glyph.a() as u16 * color.a as u16 / 255) as u8;
        if alpha == 0 {
            return;
        }
        let src = Rgba([glyph.r(), glyph.g(), glyph.b(), alpha]);
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                let px = origin.0 + x + dx;
                let py = origin.1 + y + dy;
                if px < 0 || py < 0 || px >= width || py >= height {
                    continue;
                }
                canvas.get_pixel_mut(px as u32, py as u32).blend(&src);
            }
        }
    });
}
