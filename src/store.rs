use crate::error::{OrganizerError, Result};
use crate::types::project::{ProjectInfo, ProjectRecord, Status};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const BULK_UPDATE_NOTE: &str = "Bulk updated";

/// Local wall-clock time at microsecond precision, the resolution the data
/// files have always carried.
pub fn timestamp_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Status records and saved scan paths, backed by two JSON files.
#[derive(Debug)]
pub struct ProjectStore {
    data_file: PathBuf,
    paths_file: PathBuf,
    saved_paths: Vec<String>,
    project_data: BTreeMap<String, ProjectRecord>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub updated: usize,
    pub unknown: Vec<String>,
}

impl ProjectStore {
    /// Loads both files; a missing file is treated as empty.
    pub fn open(data_file: impl Into<PathBuf>, paths_file: impl Into<PathBuf>) -> Result<Self> {
        let data_file = data_file.into();
        let paths_file = paths_file.into();
        let project_data = read_json_or_default(&data_file)?;
        let saved_paths = read_json_or_default(&paths_file)?;
        Ok(Self {
            data_file,
            paths_file,
            saved_paths,
            project_data,
        })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn paths_file(&self) -> &Path {
        &self.paths_file
    }

    pub fn saved_paths(&self) -> &[String] {
        &self.saved_paths
    }

    pub fn project_data(&self) -> &BTreeMap<String, ProjectRecord> {
        &self.project_data
    }

    pub fn save(&self) -> Result<()> {
        write_json(&self.data_file, &self.project_data)?;
        write_json(&self.paths_file, &self.saved_paths)?;
        tracing::info!(
            data_file = %self.data_file.display(),
            paths_file = %self.paths_file.display(),
            "store saved"
        );
        Ok(())
    }

    /// Returns `false` when the path is blank or already saved.
    pub fn add_saved_path(&mut self, path: &str) -> Result<bool> {
        if path.trim().is_empty() || self.saved_paths.iter().any(|saved| saved == path) {
            return Ok(false);
        }
        self.saved_paths.push(path.to_string());
        self.save()?;
        Ok(true)
    }

    pub fn remove_saved_path(&mut self, path: &str) -> Result<bool> {
        let Some(index) = self.saved_paths.iter().position(|saved| saved == path) else {
            return Ok(false);
        };
        self.saved_paths.remove(index);
        self.save()?;
        Ok(true)
    }

    pub fn update_project_status(&mut self, path: &str, status: Status, notes: &str) -> Result<()> {
        self.set_record(path, status, notes);
        self.save()
    }

    pub fn get_project_status(&self, path: &str) -> ProjectRecord {
        self.project_data.get(path).cloned().unwrap_or_default()
    }

    pub fn status_of(&self, path: &str) -> Status {
        self.project_data
            .get(path)
            .map(|record| record.status)
            .unwrap_or_default()
    }

    /// Counts over every stored record, including projects outside the
    /// current scan.
    pub fn projects_by_status(&self) -> BTreeMap<Status, usize> {
        let mut counts = BTreeMap::new();
        for record in self.project_data.values() {
            *counts.entry(record.status).or_insert(0) += 1;
        }
        counts
    }

    /// Sets `status` and `notes` on the scanned projects named in `names`.
    pub fn bulk_update(
        &mut self,
        projects: &[ProjectInfo],
        names: &[String],
        status: Status,
        notes: &str,
    ) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();
        for name in names {
            match projects.iter().find(|project| &project.name == name) {
                Some(project) => {
                    self.set_record(&project.key(), status, notes);
                    outcome.updated += 1;
                }
                None => {
                    tracing::warn!(name = name.as_str(), "no scanned project with this name");
                    outcome.unknown.push(name.clone());
                }
            }
        }
        if outcome.updated > 0 {
            self.save()?;
        }
        Ok(outcome)
    }

    pub fn set_all(&mut self, projects: &[ProjectInfo], status: Status, notes: &str) -> Result<usize> {
        for project in projects {
            self.set_record(&project.key(), status, notes);
        }
        self.save()?;
        Ok(projects.len())
    }

    /// Empties the notes of every scanned project, keeping its status.
    pub fn clear_notes(&mut self, projects: &[ProjectInfo]) -> Result<usize> {
        for project in projects {
            let key = project.key();
            let status = self.status_of(&key);
            self.set_record(&key, status, "");
        }
        self.save()?;
        Ok(projects.len())
    }

    /// Deletes both backing files and forgets all in-memory state.
    pub fn clear_all(&mut self) -> Result<()> {
        for path in [&self.data_file, &self.paths_file] {
            match fs::remove_file(path) {
                Ok(()) => tracing::info!(path = %path.display(), "removed data file"),
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => return Err(OrganizerError::Io(error)),
            }
        }
        self.saved_paths.clear();
        self.project_data.clear();
        Ok(())
    }

    fn set_record(&mut self, path: &str, status: Status, notes: &str) {
        self.project_data.insert(
            path.to_string(),
            ProjectRecord {
                status,
                notes: notes.to_string(),
                last_updated: Some(timestamp_now()),
            },
        );
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| OrganizerError::CorruptData {
        path: path.display().to_string(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
