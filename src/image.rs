use std::path::PathBuf;

use image::DynamicImage;

/// A decoded source file on its way to the output tree.
#[derive(Debug, Clone)]
pub struct ImageTask {
    pub source: PathBuf,
    pub pixels: DynamicImage,
    pub destination: PathBuf,
}

impl ImageTask {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}
