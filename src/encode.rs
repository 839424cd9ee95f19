use std::{borrow::Cow, fs, io::BufWriter, path::Path};

use image::{DynamicImage, ImageFormat};
use log::debug;
use tempfile::NamedTempFile;

use crate::{error::ResizeError, rs_err};

/// Encodes `image` as `format` and writes it to `destination`, replacing any existing file.
///
/// The data goes to a temporary file in the destination directory first and is renamed
/// into place only once it has been fully written, so an interrupted run never leaves
/// a truncated image under the final name.
pub fn encode(
    image: &DynamicImage,
    destination: &Path,
    format: ImageFormat,
) -> Result<(), ResizeError> {
    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = create_temporary(directory)?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    encodable_pixels(image, format)
        .write_to(&mut writer, format)
        .map_err(|error| {
            rs_err!(
                Encode,
                "unable to write `{}': {error}",
                destination.display()
            )
        })?;

    // Dropping the BufWriter would flush it too, but without reporting errors.
    let file = writer.into_inner().map_err(|error| {
        rs_err!(
            Io,
            "unable to write image '{}': {}",
            destination.display(),
            error.error()
        )
    })?;
    file.persist(destination).map_err(|error| {
        rs_err!(
            Io,
            "unable to write image '{}': {}",
            destination.display(),
            error.error
        )
    })?;
    Ok(())
}

/// Creates `dir` and any missing parents.
pub fn create_dir(dir: &Path) -> Result<(), ResizeError> {
    fs::create_dir_all(dir).map_err(|error| {
        rs_err!(
            Io,
            "unable to create output directory `{}': {error}",
            dir.display()
        )
    })?;
    debug!("created {}", dir.display());
    Ok(())
}

/// Pixels are kept as 8-bit RGB, but some encoders only take other color types.
fn encodable_pixels(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match format {
        ImageFormat::Hdr | ImageFormat::OpenExr => {
            Cow::Owned(DynamicImage::ImageRgb32F(image.to_rgb32f()))
        }
        ImageFormat::Farbfeld => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        _ => Cow::Borrowed(image),
    }
}

fn create_temporary(directory: &Path) -> Result<NamedTempFile, ResizeError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".batch-resize-").suffix(".part");
    // temporary files are private by default, but the result should look like any other file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    builder.tempfile_in(directory).map_err(|error| {
        rs_err!(
            Io,
            "unable to create a file in '{}': {error}",
            directory.display()
        )
    })
}
