// src/clipboard.rs

use anyhow::Result;
use arboard::{Clipboard, ImageData};
use image::{DynamicImage, RgbImage};

/// 复制放大后的选区到剪贴板
pub fn copy_image_to_clipboard(image: &RgbImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        anyhow::bail!("selected region is empty");
    }
    let rgba = DynamicImage::ImageRgb8(image.clone()).to_rgba8();
    let mut clipboard = Clipboard::new()?;
    let image_data = ImageData {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        bytes: rgba.into_raw().into(),
    };
    clipboard.set_image(image_data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_is_refused() {
        let err = copy_image_to_clipboard(&RgbImage::new(0, 0)).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
