//! Recursively shrinks every image of a directory tree to fit a bounding size,
//! writing the results into a mirrored output tree.

use std::{ffi::OsString, path::PathBuf};

use log::info;

use crate::{
    arg_parsers::{Extension, Filter, TargetSize},
    decode::{classify, FileClass},
    encode::{create_dir, encode},
    error::ResizeError,
    image::ImageTask,
    mirror::{DirectoryMirror, SourceDir},
    naming::NamingCounter,
    operations::Operation,
    progress::Progress,
    rs_err,
};

#[derive(Debug, Clone)]
pub struct ProportionalOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Maximum size; images are never enlarged.
    pub size: TargetSize,
    /// Output extension for every image. `None` keeps the format detected from the contents.
    pub force_ext: Option<Extension>,
    /// Rename files to `<directory>_<n>`.
    pub rename: bool,
    pub filter: Filter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProportionalSummary {
    pub written: usize,
    /// Files that turned out not to be images.
    pub skipped: usize,
    pub directories: usize,
}

#[derive(Debug)]
pub struct ProportionalPlan {
    options: ProportionalOptions,
    mirror: DirectoryMirror,
}

impl ProportionalPlan {
    pub fn new(options: ProportionalOptions) -> Result<Self, ResizeError> {
        if !options.input.is_dir() {
            return Err(rs_err!(
                Validation,
                "input directory `{}' does not exist",
                options.input.display()
            ));
        }
        if let Some(forced) = &options.force_ext {
            forced.check_fits(&options.size)?;
        }
        let mirror = DirectoryMirror::new(&options.input, &options.output);
        Ok(Self { options, mirror })
    }

    pub fn options(&self) -> &ProportionalOptions {
        &self.options
    }

    /// Walks the whole input tree. Non-image files are skipped; any other failure aborts the run.
    pub fn run(&self, progress: &mut impl Progress) -> Result<ProportionalSummary, ResizeError> {
        let mut summary = ProportionalSummary::default();
        // the root has to exist before walking, so that the walk can tell whether it is nested in the input
        create_dir(self.mirror.output_root())?;
        for dir in self.mirror.walk() {
            self.process_dir(&dir, &mut summary, progress)?;
        }
        Ok(summary)
    }

    fn process_dir(
        &self,
        dir: &SourceDir,
        summary: &mut ProportionalSummary,
        progress: &mut impl Progress,
    ) -> Result<(), ResizeError> {
        // mirrored even when it holds no images
        let output_dir = self.mirror.output_dir_for(&dir.path)?;
        create_dir(&output_dir)?;
        summary.directories += 1;

        let label = match self.options.rename {
            true => Some(self.mirror.label_for(dir)?),
            false => None,
        };
        // padding counts every file in the directory, images or not
        let mut counter = NamingCounter::new(dir.files.len());
        let operation = Operation::Fit(self.options.size);

        for source in &dir.files {
            let (pixels, format) = match classify(source)? {
                FileClass::Image { pixels, format } => (pixels, format),
                FileClass::NotImage => {
                    summary.skipped += 1;
                    continue;
                }
            };

            let extension = match &self.options.force_ext {
                Some(forced) => forced.clone(),
                None => Extension::detected(format),
            };
            if !extension.format().writing_enabled() {
                return Err(rs_err!(
                    Encode,
                    "no encode delegate for `{}' needed by `{}'",
                    extension,
                    source.display()
                ));
            }

            let mut file_name: OsString = match &label {
                Some(label) => counter.next_labeled(label).into(),
                None => source.file_stem().unwrap_or_default().to_owned(),
            };
            file_name.push(".");
            file_name.push(extension.as_str());

            let mut task = ImageTask {
                source: source.clone(),
                pixels,
                destination: output_dir.join(file_name),
            };
            operation.execute(&mut task.pixels, self.options.filter)?;
            encode(&task.pixels, &task.destination, extension.format())?;
            info!(
                "{} -> {} ({}x{})",
                task.source.display(),
                task.destination.display(),
                task.dimensions().0,
                task.dimensions().1
            );
            progress.advance();
            summary.written += 1;
        }
        Ok(())
    }
}
