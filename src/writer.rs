//! Materializes a [`ProjectFiles`] description on disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::project::ProjectFiles;

/// Ensures the project directory does not exist yet.
///
/// # Returns
/// * `Result<PathBuf>` - `root/project_name`, safe to write to
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory is already there
pub fn ensure_project_dir<P: AsRef<Path>>(root: P, project_name: &str) -> Result<PathBuf> {
    let project_dir = root.as_ref().join(project_name);
    if project_dir.exists() {
        return Err(Error::OutputDirectoryExistsError { output_dir: project_name.to_string() });
    }
    Ok(project_dir)
}

/// Writes every directory, then every file, under `root`.
///
/// `on_created` receives the relative path of each file once it is written.
/// The first failure aborts the run; anything already written stays on disk.
pub fn write_project<P, F>(project: &ProjectFiles, root: P, mut on_created: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let root = root.as_ref();

    for dir in &project.directories {
        create_dir_all(&root.join(dir))?;
    }

    for entry in &project.files {
        let target = root.join(&entry.path);
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        debug!("Writing file: {}", target.display());
        fs::write(&target, &entry.content)
            .map_err(|source| Error::WriteFileError { path: entry.path.clone(), source })?;
        on_created(&entry.path);
    }

    Ok(())
}

fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path)
        .map_err(|source| Error::CreateDirectoryError { path: path.to_path_buf(), source })
}
