use std::fmt::Display;

use pic_scale_safe::ResamplingFunction;

#[derive(Copy, Clone, Eq, PartialEq, Debug, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
/// Resampling filter passed as `--filter`
pub enum Filter {
    #[strum(to_string = "nearest", serialize = "point")]
    Nearest,
    #[strum(to_string = "bilinear", serialize = "linear", serialize = "triangle")]
    Bilinear,
    #[strum(to_string = "bicubic", serialize = "cubic")]
    Bicubic,
    #[strum(to_string = "lanczos", serialize = "antialias")]
    Lanczos,
    Catrom,
    Mitchell,
    Box,
    Hermite,
    Gaussian,
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stringified: &'static str = self.into();
        f.write_str(stringified)
    }
}

impl Filter {
    /// primary names, for error messages
    pub const NAMES: &'static str =
        "nearest, bilinear, bicubic, lanczos, catrom, mitchell, box, hermite, gaussian";

    pub fn into_resize(self) -> ResamplingFunction {
        match self {
            Filter::Nearest => ResamplingFunction::Nearest,
            Filter::Bilinear => ResamplingFunction::Bilinear,
            Filter::Bicubic => ResamplingFunction::Cubic,
            Filter::Lanczos => ResamplingFunction::Lanczos3,
            Filter::Catrom => ResamplingFunction::CatmullRom,
            Filter::Mitchell => ResamplingFunction::MitchellNetravalli,
            Filter::Box => ResamplingFunction::Box,
            Filter::Hermite => ResamplingFunction::Hermite,
            Filter::Gaussian => ResamplingFunction::Gaussian,
        }
    }
}
