//! Mapping of an input directory tree onto an output tree of the same shape.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use walkdir::WalkDir;

use crate::{error::ResizeError, rs_err};

#[derive(Debug, Clone)]
pub struct DirectoryMirror {
    input_root: PathBuf,
    output_root: PathBuf,
}

/// A directory of the input tree with its files, sorted by name.
#[derive(Debug, Clone)]
pub struct SourceDir {
    pub path: PathBuf,
    /// Zero for the input root itself.
    pub depth: usize,
    /// Every non-directory entry, images or not.
    pub files: Vec<PathBuf>,
}

impl SourceDir {
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

impl DirectoryMirror {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// The output directory with the same path relative to the output root
    /// as `input_dir` has relative to the input root.
    pub fn output_dir_for(&self, input_dir: &Path) -> Result<PathBuf, ResizeError> {
        let relative = input_dir.strip_prefix(&self.input_root).map_err(|_| {
            rs_err!(
                Io,
                "`{}' is not inside the input directory `{}'",
                input_dir.display(),
                self.input_root.display()
            )
        })?;
        Ok(self.output_root.join(relative))
    }

    /// Label used when renaming files after their directory.
    ///
    /// Files directly in the input root are named after the output root instead,
    /// so they end up carrying the name of the folder they are written to.
    pub fn label_for(&self, dir: &SourceDir) -> Result<String, ResizeError> {
        let named = if dir.is_root() {
            &self.output_root
        } else {
            &dir.path
        };
        base_name(named)
    }

    /// Walks the input tree in pre-order, siblings sorted by name.
    ///
    /// Directories that cannot be listed are skipped with a warning. Symbolic links
    /// to directories are not followed. When the output root lies inside the input
    /// tree it is not descended into.
    pub fn walk(&self) -> impl Iterator<Item = SourceDir> + '_ {
        let output_root = fs::canonicalize(&self.output_root).ok();
        WalkDir::new(&self.input_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                match (&output_root, fs::canonicalize(entry.path())) {
                    (Some(output_root), Ok(path)) => &path != output_root,
                    _ => true,
                }
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("skipping unreadable directory entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| match list_files(entry.path()) {
                Ok(files) => Some(SourceDir {
                    path: entry.path().to_path_buf(),
                    depth: entry.depth(),
                    files,
                }),
                Err(err) => {
                    warn!("skipping directory {}: {err}", entry.path().display());
                    None
                }
            })
    }
}

fn list_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // `is_dir` follows symlinks, so links to directories are neither walked nor treated as files
        if !path.is_dir() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Final component of `path`, resolving `.` and `..` through the filesystem if needed.
fn base_name(path: &Path) -> Result<String, ResizeError> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let resolved = fs::canonicalize(path)
        .map_err(|error| rs_err!(Io, "unable to resolve `{}': {error}", path.display()))?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| rs_err!(Validation, "`{}' has no name to label files with", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_output_dir_keeps_relative_path() {
        let mirror = DirectoryMirror::new("data/raw", "data/images");
        assert_eq!(
            mirror.output_dir_for(Path::new("data/raw")).unwrap(),
            PathBuf::from("data/images")
        );
        assert_eq!(
            mirror.output_dir_for(Path::new("data/raw/cats/tabby")).unwrap(),
            PathBuf::from("data/images/cats/tabby")
        );
        assert!(mirror.output_dir_for(Path::new("elsewhere")).is_err());
    }

    #[test]
    fn test_walk_order_and_contents() {
        let input = tempfile::tempdir().unwrap();
        let root = input.path();
        touch(&root.join("b.png"));
        touch(&root.join("a.txt"));
        touch(&root.join("zoo/lion.jpg"));
        touch(&root.join("cats/tabby/1.jpg"));
        touch(&root.join("cats/2.jpg"));
        fs::create_dir_all(root.join("empty")).unwrap();

        let mirror = DirectoryMirror::new(root, "out");
        let dirs: Vec<_> = mirror.walk().collect();
        let relative: Vec<_> = dirs
            .iter()
            .map(|dir| dir.path.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from(""),
                PathBuf::from("cats"),
                PathBuf::from("cats/tabby"),
                PathBuf::from("empty"),
                PathBuf::from("zoo"),
            ]
        );
        assert!(dirs[0].is_root());
        assert_eq!(dirs[0].files, vec![root.join("a.txt"), root.join("b.png")]);
        assert_eq!(dirs[1].files, vec![root.join("cats/2.jpg")]);
        assert!(dirs[3].files.is_empty());
    }

    #[test]
    fn test_output_inside_input_is_not_walked() {
        let input = tempfile::tempdir().unwrap();
        let root = input.path();
        touch(&root.join("a.png"));
        touch(&root.join("out/already.png"));
        touch(&root.join("zebra/b.png"));
        let mirror = DirectoryMirror::new(root, root.join("out"));
        let dirs: Vec<_> = mirror.walk().map(|dir| dir.path).collect();
        assert_eq!(dirs, vec![root.to_path_buf(), root.join("zebra")]);
    }

    #[test]
    fn test_labels() {
        let input = tempfile::tempdir().unwrap();
        let root = input.path().join("raw");
        touch(&root.join("cats/1.jpg"));
        let mirror = DirectoryMirror::new(&root, input.path().join("images"));
        let dirs: Vec<_> = mirror.walk().collect();
        assert_eq!(mirror.label_for(&dirs[0]).unwrap(), "images");
        assert_eq!(mirror.label_for(&dirs[1]).unwrap(), "cats");
    }

    #[test]
    fn test_subdirectory_named_like_root_keeps_its_name() {
        let input = tempfile::tempdir().unwrap();
        let root = input.path().join("raw");
        touch(&root.join("raw/1.jpg"));
        let mirror = DirectoryMirror::new(&root, input.path().join("images"));
        let dirs: Vec<_> = mirror.walk().collect();
        assert_eq!(mirror.label_for(&dirs[1]).unwrap(), "raw");
    }

    #[test]
    fn test_label_of_dot_output_root() {
        let input = tempfile::tempdir().unwrap();
        let output = input.path().join("images");
        fs::create_dir_all(&output).unwrap();
        let mirror = DirectoryMirror::new(input.path(), output.join("."));
        let root = mirror.walk().next().unwrap();
        assert_eq!(mirror.label_for(&root).unwrap(), "images");
    }
}
