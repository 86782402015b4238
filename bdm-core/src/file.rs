use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::NamedTempFile;

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content into a temporary file next to the target.
    ///
    /// The target itself is untouched until [`StagedFile::commit`] is called.
    /// Dropping the staged file removes the temporary file.
    pub fn stage(&self) -> Result<StagedFile> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .wrap_err_with(|| format!("failed to stage '{}'", self.path.display()))?;
        temp.write_all(self.content.as_bytes())
            .wrap_err_with(|| format!("failed to stage '{}'", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .wrap_err_with(|| format!("failed to stage '{}'", self.path.display()))?;
        }

        Ok(StagedFile {
            temp,
            target: self.path.clone(),
        })
    }
}

/// File content staged on disk, waiting to replace its target.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// The path this file will be moved to on commit.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Move the staged content over the target path.
    pub fn commit(self) -> Result<PathBuf> {
        self.temp
            .persist(&self.target)
            .wrap_err_with(|| format!("failed to write '{}'", self.target.display()))?;
        Ok(self.target)
    }
}
