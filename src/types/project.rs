use crate::error::OrganizerError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Lifecycle tag a user attaches to a project.
///
/// Variant order is the display order used by every status listing, so the
/// derived `Ord` can key ordered maps directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Set")]
    NotSet,
    #[serde(rename = "Under Development")]
    UnderDevelopment,
    #[serde(rename = "Under Update")]
    UnderUpdate,
    #[serde(rename = "Need Fix")]
    NeedFix,
    #[serde(rename = "Not Working")]
    NotWorking,
    #[serde(rename = "Dropped")]
    Dropped,
    #[serde(rename = "Complete")]
    Complete,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::NotSet,
        Status::UnderDevelopment,
        Status::UnderUpdate,
        Status::NeedFix,
        Status::NotWorking,
        Status::Dropped,
        Status::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "Not Set",
            Self::UnderDevelopment => "Under Development",
            Self::UnderUpdate => "Under Update",
            Self::NeedFix => "Need Fix",
            Self::NotWorking => "Not Working",
            Self::Dropped => "Dropped",
            Self::Complete => "Complete",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::NotSet => "⚪",
            Self::UnderDevelopment => "🟢",
            Self::UnderUpdate => "🟡",
            Self::NeedFix => "🔴",
            Self::NotWorking => "🟣",
            Self::Dropped => "⚫",
            Self::Complete => "✅",
        }
    }

    /// Contribution of the status to the health score.
    pub fn health_delta(self) -> i32 {
        match self {
            Self::Complete => 20,
            Self::UnderDevelopment => 10,
            Self::UnderUpdate => 5,
            Self::NeedFix => -10,
            Self::NotWorking => -20,
            Self::Dropped => -30,
            Self::NotSet => -5,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Status {
    type Err = OrganizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|status| normalize_label(status.as_str()) == wanted)
            .ok_or_else(|| OrganizerError::UnknownStatus(s.to_string()))
    }
}

/// Facts collected about one project folder during a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub path: PathBuf,
    pub python_files: usize,
    pub has_requirements: bool,
    pub has_readme: bool,
    pub last_modified: NaiveDate,
    pub size_mb: f64,
}

impl ProjectInfo {
    /// Key used for the project in the status store.
    pub fn key(&self) -> String {
        self.path.display().to_string()
    }
}

/// User-maintained metadata for a project path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectRecord {
    pub status: Status,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}
