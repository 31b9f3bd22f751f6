// src/selection_logic.rs
// Pure geometry and compositing, no window dependency here.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::constant::{OUTLINE_COLOR, UNSET_POINT, ZOOM_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// 矩形选区结构体, (x0, y0) 总是左上角
pub struct Rect { pub x0: i32, pub y0: i32, pub x1: i32, pub y1: i32 }

impl Rect {
    pub fn top_left(&self) -> (i32, i32) {
        (self.x0, self.y0)
    }

    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub dragging: bool,
    /// Fixed anchor of the drag.
    pub point_a: (i32, i32),
    /// Last pointer position seen while dragging, or where the drag ended.
    pub point_b: (i32, i32),
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState { dragging: false, point_a: UNSET_POINT, point_b: UNSET_POINT }
    }
}

/// Result of one composition pass.
pub struct Composition {
    /// Outlined source with the region pasted to its right.
    pub display: RgbImage,
    /// The region as pasted, magnified when it was large enough.
    pub zoomed: RgbImage,
}

/// Reorders two arbitrary corners into top-left / bottom-right form.
pub fn normalize_rect(p1: (i32, i32), p2: (i32, i32)) -> Rect {
    Rect {
        x0: p1.0.min(p2.0),
        y0: p1.1.min(p2.1),
        x1: p1.0.max(p2.0),
        y1: p1.1.max(p2.1),
    }
}

/// Copies the pixels inside `rect` (right and bottom edges excluded).
///
/// The rectangle is clamped to the image, so a selection that leaves the
/// image shrinks, and one entirely outside it yields a 0x0 image.
pub fn extract_roi(source: &RgbImage, rect: Rect) -> RgbImage {
    let clamp = |v: i32, max: u32| v.clamp(0, max.min(i32::MAX as u32) as i32) as u32;
    let x0 = clamp(rect.x0, source.width());
    let x1 = clamp(rect.x1, source.width());
    let y0 = clamp(rect.y0, source.height());
    let y1 = clamp(rect.y1, source.height());
    let (w, h) = (x1 - x0, y1 - y0);
    if w == 0 || h == 0 {
        return RgbImage::new(w, h);
    }
    imageops::crop_imm(source, x0, y0, w, h).to_image()
}

/// Scales the region by `ZOOM_FACTOR` when both sides exceed one pixel.
pub fn magnify(roi: RgbImage) -> RgbImage {
    let (w, h) = roi.dimensions();
    if w > 1 && h > 1 {
        imageops::resize(&roi, w * ZOOM_FACTOR, h * ZOOM_FACTOR, FilterType::Triangle)
    } else {
        roi
    }
}

/// Draws a one pixel rectangle through both corners, inclusive.
/// Parts falling outside the image are skipped.
pub fn draw_outline(image: &mut RgbImage, p1: (i32, i32), p2: (i32, i32), color: Rgb<u8>) {
    let (w, h) = (image.width() as i64, image.height() as i64);
    if w == 0 || h == 0 {
        return;
    }
    let r = normalize_rect(p1, p2);
    let (x0, y0, x1, y1) = (r.x0 as i64, r.y0 as i64, r.x1 as i64, r.y1 as i64);

    for y in [y0, y1] {
        if (0..h).contains(&y) {
            for x in x0.max(0)..=x1.min(w - 1) {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
    for x in [x0, x1] {
        if (0..w).contains(&x) {
            for y in y0.max(0)..=y1.min(h - 1) {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Places `right` next to `left` on a black canvas, both aligned to the top.
pub fn compose_side_by_side(left: &RgbImage, right: &RgbImage) -> RgbImage {
    let (lw, lh) = left.dimensions();
    let (rw, rh) = right.dimensions();
    let mut canvas = RgbImage::new(lw + rw, lh.max(rh));
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, lw as i64, 0);
    canvas
}

/// Builds the frame for the current drag from scratch.
///
/// Always starts from `source`, never from a previous frame.
pub fn compose_display(source: &RgbImage, selection: &SelectionState) -> Composition {
    let mut outlined = source.clone();
    draw_outline(&mut outlined, selection.point_a, selection.point_b, OUTLINE_COLOR);

    let rect = normalize_rect(selection.point_a, selection.point_b);
    let zoomed = magnify(extract_roi(source, rect));
    let display = compose_side_by_side(&outlined, &zoomed);
    Composition { display, zoomed }
}
