// src/config.rs
//
// Command line options.

use clap::Parser;
use std::path::PathBuf;

use crate::constant::DEFAULT_IMAGE;

/// Drag a rectangle over an image to see it magnified beside the original.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Image to open.
    #[arg(default_value = DEFAULT_IMAGE)]
    pub image: PathBuf,

    /// Capture a monitor instead of opening a file.
    #[arg(long)]
    pub screen: bool,

    /// Monitor index used with --screen.
    #[arg(long, default_value_t = 0, requires = "screen")]
    pub monitor: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_test_image() {
        let args = Args::try_parse_from(["zoomregion"]).unwrap();
        assert_eq!(args.image, PathBuf::from("test_image.jpg"));
        assert!(!args.screen);
        assert_eq!(args.monitor, 0);
    }

    #[test]
    fn takes_image_path() {
        let args = Args::try_parse_from(["zoomregion", "photo.png"]).unwrap();
        assert_eq!(args.image, PathBuf::from("photo.png"));
    }

    #[test]
    fn screen_with_monitor() {
        let args = Args::try_parse_from(["zoomregion", "--screen", "--monitor", "1"]).unwrap();
        assert!(args.screen);
        assert_eq!(args.monitor, 1);
    }

    #[test]
    fn monitor_needs_screen() {
        assert!(Args::try_parse_from(["zoomregion", "--monitor", "1"]).is_err());
    }
}
