pub mod compare;
pub mod group;
pub mod health;
pub mod metrics;
pub mod overview;
pub mod status_report;

use crate::store::ProjectStore;
use crate::types::project::{ProjectInfo, ProjectRecord};
use chrono::NaiveDate;
use health::{calculate_health, HealthBand};
use metrics::AdvancedMetrics;
use overview::Overview;
use serde::Serialize;

/// A scanned project joined with its stored record and health score.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub project: ProjectInfo,
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub health: u8,
}

impl Assessment {
    pub fn band(&self) -> HealthBand {
        HealthBand::from_score(f64::from(self.health))
    }
}

pub fn assess(projects: &[ProjectInfo], store: &ProjectStore) -> Vec<Assessment> {
    projects
        .iter()
        .map(|project| {
            let record = store.get_project_status(&project.key());
            let health = calculate_health(project, record.status);
            Assessment {
                project: project.clone(),
                record,
                health,
            }
        })
        .collect()
}

pub fn average_health(assessed: &[Assessment]) -> f64 {
    if assessed.is_empty() {
        return 0.0;
    }
    let total: u32 = assessed.iter().map(|a| u32::from(a.health)).sum();
    f64::from(total) / assessed.len() as f64
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub root: String,
    pub overview: Overview,
    pub metrics: AdvancedMetrics,
    pub projects: Vec<Assessment>,
}

pub fn dashboard(
    root: &str,
    assessed: Vec<Assessment>,
    today: NaiveDate,
    stale_after_days: i64,
) -> Dashboard {
    Dashboard {
        root: root.to_string(),
        overview: overview::overview(&assessed),
        metrics: metrics::advanced_metrics(&assessed, today, stale_after_days),
        projects: assessed,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Assessment;
    use crate::analyze::health::calculate_health;
    use crate::types::project::{ProjectInfo, ProjectRecord, Status};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub fn assessment(
        name: &str,
        python_files: usize,
        size_mb: f64,
        last_modified: NaiveDate,
        status: Status,
    ) -> Assessment {
        let project = ProjectInfo {
            name: name.to_string(),
            path: PathBuf::from(format!("/projects/{name}")),
            python_files,
            has_requirements: python_files % 2 == 0,
            has_readme: python_files > 3,
            last_modified,
            size_mb,
        };
        let health = calculate_health(&project, status);
        Assessment {
            project,
            record: ProjectRecord {
                status,
                notes: String::new(),
                last_updated: None,
            },
            health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::project::Status;
    use tempfile::TempDir;

    #[test]
    fn assess_joins_store_records() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = ProjectStore::open(dir.path().join("d.json"), dir.path().join("p.json"))
            .expect("store should open");
        store
            .update_project_status("/projects/alpha", Status::Complete, "shipped")
            .expect("update should save");

        let projects = vec![
            fixtures::assessment("alpha", 1, 0.0, fixtures::date(2024, 1, 1), Status::NotSet)
                .project,
            fixtures::assessment("beta", 1, 0.0, fixtures::date(2024, 1, 1), Status::NotSet)
                .project,
        ];
        let assessed = assess(&projects, &store);

        assert_eq!(assessed[0].record.status, Status::Complete);
        assert_eq!(assessed[0].record.notes, "shipped");
        // 50 + 2 + 20
        assert_eq!(assessed[0].health, 72);
        assert_eq!(assessed[1].record.status, Status::NotSet);
        assert_eq!(assessed[1].health, 47);
    }

    #[test]
    fn average_health_of_nothing_is_zero() {
        assert_eq!(average_health(&[]), 0.0);
    }
}
