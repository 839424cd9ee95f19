mod resize;

pub use resize::fit_within;

use image::DynamicImage;

use crate::{
    arg_parsers::{Filter, TargetSize},
    error::ResizeError,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    /// Resize to the exact size, ignoring the aspect ratio.
    Resize(TargetSize),
    /// Proportionally shrink to fit within the size, never enlarging.
    Fit(TargetSize),
}

impl Operation {
    pub fn execute(&self, image: &mut DynamicImage, filter: Filter) -> Result<(), ResizeError> {
        match self {
            Operation::Resize(size) => resize::resize(image, size, filter),
            Operation::Fit(bounds) => resize::fit(image, bounds, filter),
        }
    }
}
