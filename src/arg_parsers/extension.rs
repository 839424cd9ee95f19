use std::ffi::OsStr;
use std::fmt::Display;
use std::str::FromStr;

use image::ImageFormat;

use crate::arg_parsers::TargetSize;
use crate::error::ResizeError;
use crate::rs_err;

/// Largest width and height an ICO entry can hold.
const ICO_MAX_SIDE: u32 = 256;

/// A file name extension (without the leading dot) together with the format it encodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    name: String,
    format: ImageFormat,
}

impl Extension {
    /// Parses a `--force_ext` value. The extension is lower-cased.
    pub fn forced(s: &str) -> Result<Self, ResizeError> {
        Self::from_str(&s.to_ascii_lowercase())
    }

    /// The extension named after the format the decoder detected from the file contents.
    pub fn detected(format: ImageFormat) -> Self {
        Self {
            name: format_name(format).to_owned(),
            format,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Rejects sizes this format cannot store, so that the run fails before writing anything.
    pub fn check_fits(&self, size: &TargetSize) -> Result<(), ResizeError> {
        if self.format == ImageFormat::Ico
            && (size.width > ICO_MAX_SIDE || size.height > ICO_MAX_SIDE)
        {
            return Err(rs_err!(
                Validation,
                "`{}' images can be at most {ICO_MAX_SIDE}x{ICO_MAX_SIDE} pixels, {size} is too large",
                self.name
            ));
        }
        Ok(())
    }

    /// Shell-glob semantics of `*.<ext>`: case-sensitive suffix match, hidden files excluded.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let Some(file_name) = file_name.to_str() else {
            return false;
        };
        if file_name.starts_with('.') {
            return false;
        }
        file_name
            .strip_suffix(self.name.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some()
    }
}

impl Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Extension {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().strip_prefix('.').unwrap_or(s.trim());
        if name.is_empty() {
            return Err(rs_err!(Validation, "file extension must not be empty"));
        }
        if name.contains(['/', '\\', '*', '?', '[', ']', '.']) {
            return Err(rs_err!(Validation, "invalid file extension `{s}'"));
        }
        let format = ImageFormat::from_extension(name)
            .ok_or_else(|| rs_err!(Validation, "no encode delegate for this image format `{name}'"))?;
        if !format.writing_enabled() {
            return Err(rs_err!(
                Validation,
                "image format `{name}' cannot be written by this build"
            ));
        }
        Ok(Self {
            name: name.to_owned(),
            format,
        })
    }
}

/// Lower-case name of a detected format, used as the output extension.
fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Pnm => "pnm",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Tga => "tga",
        ImageFormat::Dds => "dds",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Hdr => "hdr",
        ImageFormat::OpenExr => "exr",
        ImageFormat::Farbfeld => "ff",
        ImageFormat::Avif => "avif",
        ImageFormat::Qoi => "qoi",
        other => other.extensions_str().first().copied().unwrap_or("img"),
    }
}
