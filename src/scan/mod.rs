pub mod filesystem;

use crate::error::{OrganizerError, Result};
use crate::types::project::ProjectInfo;
use chrono::{DateTime, Local};
use filesystem::{direct_file_bytes, file_exists, files_with_extension_at_depth};
use std::fs;
use std::io;
use std::path::Path;

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const README_FILE: &str = "README.md";

/// Lists the immediate subfolders of `root` that look like Python projects.
///
/// A subfolder qualifies when it holds `.py` files (directly, or failing
/// that one level down) or a `requirements.txt`. Subfolders that cannot be
/// read are skipped. Results are ordered by name.
pub fn scan_projects_folder(root: &Path) -> Result<Vec<ProjectInfo>> {
    if !root.exists() {
        return Err(OrganizerError::PathNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(OrganizerError::NotADirectory(root.display().to_string()));
    }

    let root = root
        .canonicalize()
        .map_err(|error| classify_root_error(error, root))?;
    let entries = fs::read_dir(&root).map_err(|error| classify_root_error(error, &root))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match inspect_project(&path) {
            Ok(Some(project)) => projects.push(project),
            Ok(None) => tracing::debug!(path = %path.display(), "not a python project"),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping inaccessible folder")
            }
        }
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::info!(root = %root.display(), count = projects.len(), "scan complete");
    Ok(projects)
}

fn classify_root_error(error: io::Error, root: &Path) -> OrganizerError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => {
            OrganizerError::PermissionDenied(root.display().to_string())
        }
        io::ErrorKind::NotFound => OrganizerError::PathNotFound(root.display().to_string()),
        _ => OrganizerError::Io(error),
    }
}

fn inspect_project(dir: &Path) -> io::Result<Option<ProjectInfo>> {
    // Surfaces permission problems that the walkers below would swallow.
    fs::read_dir(dir)?;
    let metadata = fs::metadata(dir)?;

    let mut python_files = files_with_extension_at_depth(dir, "py", 1).len();
    if python_files == 0 {
        python_files = files_with_extension_at_depth(dir, "py", 2).len().min(1);
    }
    let has_requirements = file_exists(&dir.join(REQUIREMENTS_FILE));
    let has_readme = file_exists(&dir.join(README_FILE));

    if python_files == 0 && !has_requirements {
        return Ok(None);
    }

    let modified: DateTime<Local> = metadata.modified()?.into();
    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Some(ProjectInfo {
        name,
        path: dir.to_path_buf(),
        python_files,
        has_requirements,
        has_readme,
        last_modified: modified.date_naive(),
        size_mb: bytes_to_mb(direct_file_bytes(dir)),
    }))
}

fn bytes_to_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / 1024.0 / 1024.0;
    (mb * 100.0).round() / 100.0
}
