//! Resizes every `*.<ext>` file of a single directory to one exact size,
//! numbering the results `1.<ext>`, `2.<ext>`, ... in a flat output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    arg_parsers::{Extension, Filter, TargetSize},
    decode::decode,
    encode::{create_dir, encode},
    error::ResizeError,
    image::ImageTask,
    naming::NamingCounter,
    operations::Operation,
    progress::Progress,
    rs_err,
};

#[derive(Debug, Clone)]
pub struct FixedOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub extension: Extension,
    pub size: TargetSize,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSummary {
    pub processed: usize,
    pub output: PathBuf,
}

/// A validated run: the input exists and the files to resize are known.
#[derive(Debug)]
pub struct FixedPlan {
    options: FixedOptions,
    files: Vec<PathBuf>,
}

impl FixedPlan {
    /// Checks the input directory and collects the matching files, sorted by name.
    /// Nothing is written yet.
    pub fn new(options: FixedOptions) -> Result<Self, ResizeError> {
        if !options.input.is_dir() {
            return Err(rs_err!(
                Validation,
                "input directory `{}' does not exist",
                options.input.display()
            ));
        }
        options.extension.check_fits(&options.size)?;
        let files = matching_files(&options.input, &options.extension)?;
        if files.is_empty() {
            return Err(rs_err!(
                Validation,
                "no `*.{}' files found in `{}'",
                options.extension,
                options.input.display()
            ));
        }
        Ok(Self { options, files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn options(&self) -> &FixedOptions {
        &self.options
    }

    /// Resizes every file. The first file that fails to decode aborts the run.
    pub fn run(self, progress: &mut impl Progress) -> Result<FixedSummary, ResizeError> {
        let FixedOptions {
            output,
            extension,
            size,
            filter,
            ..
        } = self.options;

        create_dir(&output)?;

        let operation = Operation::Resize(size);
        let mut counter = NamingCounter::new(self.files.len());
        let mut processed = 0;
        for source in self.files {
            let (pixels, _) = decode(&source).map_err(|error| {
                rs_err!(Decode, "unable to read image `{}': {error}", source.display())
            })?;
            let destination = output.join(format!("{}.{extension}", counter.next_number()));
            let mut task = ImageTask {
                source,
                pixels,
                destination,
            };
            operation.execute(&mut task.pixels, filter)?;
            encode(&task.pixels, &task.destination, extension.format())?;
            info!(
                "{} -> {}",
                task.source.display(),
                task.destination.display()
            );
            progress.advance();
            processed += 1;
        }

        Ok(FixedSummary {
            processed,
            output,
        })
    }
}

fn matching_files(dir: &Path, extension: &Extension) -> Result<Vec<PathBuf>, ResizeError> {
    let read_err =
        |error: std::io::Error| rs_err!(Io, "unable to list `{}': {error}", dir.display());
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if extension.matches(&entry.file_name()) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
