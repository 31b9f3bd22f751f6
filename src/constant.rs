// src/constant.rs

use image::Rgb;

/// Title of the single viewer window.
pub const WINDOW_TITLE: &str = "Simple image zoom";

/// Image loaded when no path is given on the command line.
pub const DEFAULT_IMAGE: &str = "test_image.jpg";

/// Magnification applied to the selected region, both axes.
pub const ZOOM_FACTOR: u32 = 3;

/// Selection outline colour (pure green).
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Anchor and end point before any drag.
pub const UNSET_POINT: (i32, i32) = (-1, -1);
