//! Command-line arguments of both tools.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::{
    arg_parsers::{Extension, Filter, TargetSize},
    error::ResizeError,
    fixed::FixedOptions,
    proportional::ProportionalOptions,
    rs_err,
};

/// Resize images to uniformed target size, ignoring their aspect ratio.
#[derive(Parser, Debug)]
#[command(name = "fixed-resize", version, long_about = None)]
pub struct FixedArgs {
    /// Directory path to images
    #[arg(long, default_value = "./data/raw")]
    pub input: PathBuf,

    /// Directory path to save resized images
    #[arg(long, default_value = "./data/images")]
    pub output: PathBuf,

    /// Raw image files extension to resize
    #[arg(long, default_value = "jpg")]
    pub ext: Extension,

    /// Target size to resize to, as `(W, H)` or `WxH`
    #[arg(long, default_value = "(800, 600)")]
    pub size: TargetSize,

    /// Resampling filter
    #[arg(long, default_value = "bicubic", value_parser = parse_filter)]
    pub filter: Filter,

    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FixedArgs {
    pub fn into_options(self) -> FixedOptions {
        FixedOptions {
            input: self.input,
            output: self.output,
            extension: self.ext,
            size: self.size,
            filter: self.filter,
        }
    }
}

/// Resize images proportionally, keeping the directory tree structure.
#[derive(Parser, Debug)]
#[command(name = "proportional-resize", version, long_about = None)]
pub struct ProportionalArgs {
    /// Directory path to images, walked recursively
    #[arg(long, default_value = "./data/raw")]
    pub input: PathBuf,

    /// Directory path to save resized images
    #[arg(long, default_value = "./data/images")]
    pub output: PathBuf,

    /// Maximum size to fit images into, as `(W, H)` or `WxH`
    #[arg(long, default_value = "(800, 600)")]
    pub size: TargetSize,

    /// Change image extension; empty keeps the detected format
    #[arg(long = "force_ext", default_value = "")]
    pub force_ext: String,

    /// Rename images after their directory when non-empty
    #[arg(long, default_value = "")]
    pub rename: String,

    /// Resampling filter
    #[arg(long, default_value = "lanczos", value_parser = parse_filter)]
    pub filter: Filter,

    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProportionalArgs {
    pub fn into_options(self) -> Result<ProportionalOptions, ResizeError> {
        let force_ext = match self.force_ext.is_empty() {
            true => None,
            false => Some(Extension::forced(&self.force_ext)?),
        };
        Ok(ProportionalOptions {
            input: self.input,
            output: self.output,
            size: self.size,
            force_ext,
            rename: !self.rename.is_empty(),
            filter: self.filter,
        })
    }
}

fn parse_filter(s: &str) -> Result<Filter, ResizeError> {
    Filter::from_str(s).map_err(|_| {
        rs_err!(
            Validation,
            "unrecognized image filter `{s}', expected one of: {}",
            Filter::NAMES
        )
    })
}
