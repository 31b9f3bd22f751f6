// src/capture.rs

use anyhow::{Context, Result};
use image::{DynamicImage, ImageBuffer, RgbImage};
use std::path::Path;
use xcap::Monitor;

/// Loads an image file as 8-bit RGB.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| format!("cannot open image {}", path.display()))?;
    Ok(img.to_rgb8())
}

/// 截取指定显示器的画面作为源图像
pub fn capture_monitor(index: usize) -> Result<RgbImage> {
    let mons = Monitor::all()?;
    let mon = mons.get(index).ok_or_else(|| anyhow::anyhow!("no monitor at index {index}"))?;
    let img = mon.capture_image()?;
    let (w, h) = (img.width(), img.height());
    // xcap hands back its own image version, go through raw bytes
    let raw = img.into_raw();
    let buf = ImageBuffer::from_raw(w, h, raw).ok_or_else(|| anyhow::anyhow!("capture buffer does not match {w}x{h}"))?;
    Ok(DynamicImage::ImageRgba8(buf).to_rgb8())
}
