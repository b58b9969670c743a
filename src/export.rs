use crate::error::Result;
use crate::store::{timestamp_now, ProjectStore};
use crate::types::project::ProjectRecord;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_VERSION: &str = "1.0";
pub const EXPORTED_FROM: &str = "Python Project Organizer";

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDataExport {
    pub export_date: NaiveDateTime,
    pub projects: BTreeMap<String, ProjectRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsExport {
    pub export_date: NaiveDateTime,
    pub saved_paths: Vec<String>,
    pub settings: SettingsInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsInfo {
    pub version: String,
    pub exported_from: String,
}

impl ProjectDataExport {
    /// `None` when there is nothing recorded yet.
    pub fn from_store(store: &ProjectStore) -> Option<Self> {
        if store.project_data().is_empty() {
            return None;
        }
        Some(Self {
            export_date: timestamp_now(),
            projects: store.project_data().clone(),
        })
    }
}

impl SettingsExport {
    pub fn from_store(store: &ProjectStore) -> Self {
        Self {
            export_date: timestamp_now(),
            saved_paths: store.saved_paths().to_vec(),
            settings: SettingsInfo {
                version: SETTINGS_VERSION.to_string(),
                exported_from: EXPORTED_FROM.to_string(),
            },
        }
    }
}

/// Timestamped default location, e.g. `project_organizer_export_20240101_120000.json`.
pub fn default_export_path(dir: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{prefix}_{stamp}.json"))
}

pub fn write_export<T: Serialize>(path: &Path, export: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "export written");
    Ok(())
}
