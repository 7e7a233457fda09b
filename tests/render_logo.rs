use std::fs;
use std::path::PathBuf;

use image::Rgba;
use rikolog_logo::layout::{ICON_VERTICAL_NUDGE, PADDING};
use rikolog_logo::{Color, RenderRequest, create_logo, render_logo};
use walkdir::WalkDir;

const FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts", "/Library/Fonts", "C:/Windows/Fonts"];
const PREFERRED: &[&str] = &["DejaVuSans.ttf", "LiberationSans-Regular.ttf", "Arial.ttf", "arial.ttf"];

/// Finds an installed Latin TrueType font, preferring well-known families.
fn system_font() -> Option<PathBuf> {
    let fonts: Vec<PathBuf> = FONT_DIRS
        .iter()
        .flat_map(|dir| WalkDir::new(dir).into_iter().filter_map(|e| e.ok()))
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"))
        })
        .collect();

    PREFERRED
        .iter()
        .find_map(|name| fonts.iter().find(|p| p.file_name().is_some_and(|f| f == *name)).cloned())
        .or_else(|| fonts.into_iter().next())
}

macro_rules! require_font {
    () => {
        match system_font() {
            Some(path) => path,
            None => {
                println!("No TrueType font installed; skipping.");
                return;
            }
        }
    };
}

/// Columns/rows of the canvas that contain any non-background pixel.
fn ink_extent(img: &image::RgbaImage, background: Rgba<u8>) -> Option<(u32, u32, u32, u32)> {
    let mut extent: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        extent = Some(match extent {
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
            None => (x, y, x + 1, y + 1),
        });
    }
    extent
}

#[test]
fn banner_has_padding_and_transparent_corners() {
    let font = require_font!();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ab.png");
    let request = RenderRequest::new("AB", &font, (219, 39, 119), (255, 255, 255, 0), &output);

    let rendered = render_logo(&request).expect("render");
    assert!(output.exists());
    assert!(!rendered.bounds.is_empty());
    assert!(rendered.width >= rendered.bounds.width() + 2 * PADDING);
    assert!(rendered.height >= rendered.bounds.height() + 2 * PADDING);

    let decoded = image::open(&output).expect("decode");
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    let img = decoded.to_rgba8();
    assert_eq!(img.dimensions(), (rendered.width, rendered.height));
    let (w, h) = img.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y}) should be transparent");
    }
}

#[test]
fn banner_text_is_centred() {
    let font = require_font!();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("centred.png");
    let background = Rgba([255, 255, 255, 0]);
    let request = RenderRequest::new("AB", &font, (15, 23, 42), (255, 255, 255, 0), &output);

    let rendered = render_logo(&request).expect("render");
    let img = image::open(&output).unwrap().to_rgba8();
    let (left, top, right, bottom) = ink_extent(&img, background).expect("text should be visible");

    let right_margin = rendered.width - right;
    let bottom_margin = rendered.height - bottom;
    assert!(left.abs_diff(right_margin) <= 1, "left {left} vs right {right_margin}");
    assert!(top.abs_diff(bottom_margin) <= 1, "top {top} vs bottom {bottom_margin}");
}

#[test]
fn icon_is_square_with_solid_background() {
    let font = require_font!();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("icon.png");
    let pink = Color::rgb(219, 39, 119);
    let request = RenderRequest::new("AB", &font, (255, 255, 255), pink, &output).icon();

    let rendered = render_logo(&request).expect("render");
    assert_eq!(rendered.width, rendered.height);
    assert_eq!(
        rendered.width,
        rendered.bounds.width().max(rendered.bounds.height()) + 2 * PADDING
    );

    let img = image::open(&output).unwrap().to_rgba8();
    let (w, h) = img.dimensions();
    assert_eq!(w, h);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(*img.get_pixel(x, y), pink.to_pixel());
    }

    // Nudged text leaves more room below than above.
    let (_, top, _, bottom) = ink_extent(&img, pink.to_pixel()).expect("text should be visible");
    let bottom_margin = h - bottom;
    assert!(bottom_margin > top + ICON_VERTICAL_NUDGE as u32, "top {top} vs bottom {bottom_margin}");
}

#[test]
fn rendering_twice_is_byte_identical() {
    let font = require_font!();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    let a = render_logo(&RenderRequest::new("AB", &font, (219, 39, 119), (255, 255, 255, 0), &first)).unwrap();
    let b = render_logo(&RenderRequest::new("AB", &font, (219, 39, 119), (255, 255, 255, 0), &second)).unwrap();

    assert_eq!(a.sha256, b.sha256);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_font_writes_nothing_and_later_renders_still_run() {
    let dir = tempfile::tempdir().unwrap();
    let skipped = dir.path().join("skipped.png");
    let missing = RenderRequest::new("AB", dir.path().join("AKACHAN/AKACHANk.TTF"), (0, 0, 0), (0, 0, 0, 0), &skipped);

    assert!(create_logo(&missing).unwrap().is_none());
    assert!(!skipped.exists());

    let font = require_font!();
    let written = dir.path().join("written.png");
    let ok = create_logo(&RenderRequest::new("AB", &font, (0, 0, 0), (0, 0, 0, 0), &written)).unwrap();
    assert!(ok.is_some());
    assert!(written.exists());
}

#[test]
fn unsupported_extension_is_returned_as_error() {
    let font = require_font!();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("logo.unknownformat");
    let request = RenderRequest::new("AB", &font, (0, 0, 0), (255, 255, 255), &output);

    let err = create_logo(&request).expect_err("unknown extension must propagate");
    assert!(!err.is_font_load());
}
