use anyhow::Result;
use clap::Parser;
use image::RgbImage;
use minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions};

mod capture;
mod clipboard;
mod config;
mod constant;
mod input;
mod selection;
mod selection_logic;

use config::Args;
use constant::{WINDOW_TITLE, ZOOM_FACTOR};
use input::{poll_window, PointerTracker};
use selection::RegionSelector;

/// Packs an RGB image into minifb's 0x00RRGGBB pixels.
fn to_frame_buffer(image: &RgbImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
        .collect()
}

/// Window large enough for the widest and tallest frame a drag can produce:
/// the source plus a fully magnified copy to its right.
fn window_size_for(width: u32, height: u32) -> (usize, usize) {
    let w = width as usize * (1 + ZOOM_FACTOR as usize);
    let h = height as usize * ZOOM_FACTOR as usize;
    (w, h)
}

fn open_window(width: usize, height: usize) -> Result<Window> {
    let options = WindowOptions { resize: true, scale_mode: ScaleMode::UpperLeft, ..WindowOptions::default() };
    let mut window = Window::new(WINDOW_TITLE, width, height, options)
        .map_err(|e| anyhow::anyhow!("cannot open window: {e}"))?;
    window.set_target_fps(60);
    Ok(window)
}

fn run(selector: &mut RegionSelector) -> Result<()> {
    let (w, h) = selector.current_display_image().dimensions();
    let (ww, wh) = window_size_for(w, h);
    let mut window = open_window(ww, wh)?;
    let mut tracker = PointerTracker::new();
    let mut buffer = to_frame_buffer(selector.current_display_image());

    log::info!("Press Escape to exit the program");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let events = poll_window(&mut tracker, &window);
        if !events.is_empty() {
            for (kind, x, y) in events {
                selector.handle_pointer_event(kind, x, y);
            }
            log::trace!("selection {:?}", selector.selection());
            buffer = to_frame_buffer(selector.current_display_image());
        }

        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            match selector.zoomed_region() {
                Some(region) => match clipboard::copy_image_to_clipboard(region) {
                    Ok(()) => log::info!("copied {}x{} region to clipboard", region.width(), region.height()),
                    Err(e) => log::warn!("clipboard copy failed: {e}"),
                },
                None => log::warn!("nothing selected yet, drag over the image first"),
            }
        }

        let (fw, fh) = selector.current_display_image().dimensions();
        window
            .update_with_buffer(&buffer, fw as usize, fh as usize)
            .map_err(|e| anyhow::anyhow!("cannot present frame: {e}"))?;
    }

    log::info!("window closed");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source = if args.screen {
        capture::capture_monitor(args.monitor)?
    } else {
        capture::load_image(&args.image)?
    };
    log::info!("source image {}x{}", source.width(), source.height());

    let mut selector = RegionSelector::new(source);
    run(&mut selector)
}
