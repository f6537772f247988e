// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/draw.rs
//
// Shape primitives on the greyscale label canvas.

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use super::layout::Bounds;

/// Fill the inclusive rectangle `b`. Empty rectangles are ignored.
pub fn fill_rect(canvas: &mut GrayImage, b: Bounds, color: Luma<u8>) {
    let (w, h) = (b.width() + 1, b.height() + 1);
    if w <= 0 || h <= 0 {
        return;
    }
    draw_filled_rect_mut(canvas, Rect::at(b.x0, b.y0).of_size(w as u32, h as u32), color);
}

/// Fill `b` with corners rounded to `radius` (clamped to half the shorter side).
pub fn fill_rounded(canvas: &mut GrayImage, b: Bounds, radius: i32, color: Luma<u8>) {
    let r = radius.min(b.width() / 2).min(b.height() / 2).max(0);
    if r == 0 {
        fill_rect(canvas, b, color);
        return;
    }

    fill_rect(canvas, Bounds::new(b.x0 + r, b.y0, b.x1 - r, b.y1), color);
    fill_rect(canvas, Bounds::new(b.x0, b.y0 + r, b.x1, b.y1 - r), color);
    for center in [
        (b.x0 + r, b.y0 + r),
        (b.x1 - r, b.y0 + r),
        (b.x0 + r, b.y1 - r),
        (b.x1 - r, b.y1 - r),
    ] {
        draw_filled_circle_mut(canvas, center, r, color);
    }
}

/// Rounded rectangle with a `stroke`-wide outline, filled with `fill`.
pub fn outline_rounded(
    canvas: &mut GrayImage,
    b: Bounds,
    radius: i32,
    stroke: i32,
    outline: Luma<u8>,
    fill: Luma<u8>,
) {
    fill_rounded(canvas, b, radius, outline);
    fill_rounded(canvas, b.inset(stroke), (radius - stroke).max(0), fill);
}

/// Horizontal line from `x0` to `x1` centered on `y`, `stroke` pixels thick.
pub fn hline(canvas: &mut GrayImage, x0: i32, x1: i32, y: i32, stroke: i32, color: Luma<u8>) {
    let top = y - (stroke - 1) / 2;
    fill_rect(canvas, Bounds::new(x0, top, x1, top + stroke - 1), color);
}

/// Small filled ellipse whose bounding box starts at `x` and is vertically centered on `y`.
pub fn dot(canvas: &mut GrayImage, x: i32, y: i32, width: i32, height: i32, color: Luma<u8>) {
    draw_filled_ellipse_mut(canvas, (x + width / 2, y), width / 2, height / 2, color);
}
