use std::path::Path;

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, ImageResult};
use log::debug;

use crate::{error::ResizeError, rs_err};

/// Guesses the format based on file contents, falling back to the file extension.
/// Returns the pixels normalized to 8-bit RGB along with the detected format.
pub fn decode(file: &Path) -> ImageResult<(DynamicImage, ImageFormat)> {
    let decoder = ImageReader::open(file)?.with_guessed_format()?;
    let format = decoder.format().ok_or_else(|| {
        ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Unknown,
            UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
        ))
    })?;
    let pixels = decoder.decode()?;
    // discards the alpha channel, if any
    let pixels = DynamicImage::ImageRgb8(pixels.into_rgb8());
    Ok((pixels, format))
}

/// Outcome of trying to open a file from the walked tree as an image.
#[derive(Debug)]
pub enum FileClass {
    Image {
        pixels: DynamicImage,
        format: ImageFormat,
    },
    NotImage,
}

/// Decodes `file` if it is an image.
///
/// Unreadable files, unrecognized formats and malformed image data all classify the file as
/// [`FileClass::NotImage`]. Anything else, such as exceeding decoder memory limits, is an error.
pub fn classify(file: &Path) -> Result<FileClass, ResizeError> {
    classify_outcome(file, decode(file))
}

fn classify_outcome(
    file: &Path,
    outcome: ImageResult<(DynamicImage, ImageFormat)>,
) -> Result<FileClass, ResizeError> {
    match outcome {
        Ok((pixels, format)) => Ok(FileClass::Image { pixels, format }),
        Err(
            err @ (ImageError::IoError(_) | ImageError::Decoding(_) | ImageError::Unsupported(_)),
        ) => {
            debug!("skipping {}: {err}", file.display());
            Ok(FileClass::NotImage)
        }
        Err(err) => Err(rs_err!(
            Decode,
            "unable to decode image `{}': {err}",
            file.display()
        )),
    }
}
