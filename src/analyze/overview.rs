use super::{average_health, Assessment};
use crate::types::project::Status;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_projects: usize,
    pub total_python_files: usize,
    pub with_requirements: usize,
    pub with_readme: usize,
    pub not_set: usize,
    pub with_notes: usize,
    /// Every status in display order, zero counts included.
    pub status_distribution: Vec<StatusCount>,
    pub total_size_mb: f64,
    pub avg_python_files: f64,
    pub avg_health: f64,
}

pub fn overview(assessed: &[Assessment]) -> Overview {
    let total_projects = assessed.len();
    let total_python_files = assessed.iter().map(|a| a.project.python_files).sum();
    let status_distribution = Status::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: assessed.iter().filter(|a| a.record.status == status).count(),
        })
        .collect();
    let avg_python_files = if total_projects == 0 {
        0.0
    } else {
        total_python_files as f64 / total_projects as f64
    };

    Overview {
        total_projects,
        total_python_files,
        with_requirements: assessed.iter().filter(|a| a.project.has_requirements).count(),
        with_readme: assessed.iter().filter(|a| a.project.has_readme).count(),
        not_set: assessed
            .iter()
            .filter(|a| a.record.status == Status::NotSet)
            .count(),
        with_notes: assessed.iter().filter(|a| !a.record.notes.is_empty()).count(),
        status_distribution,
        total_size_mb: assessed.iter().map(|a| a.project.size_mb).sum(),
        avg_python_files,
        avg_health: average_health(assessed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::{assessment, date};

    #[test]
    fn overview_totals_and_distribution() {
        let mut assessed = vec![
            assessment("a", 2, 1.5, date(2024, 1, 1), Status::NotSet),
            assessment("b", 4, 2.5, date(2024, 1, 1), Status::Complete),
            assessment("c", 3, 0.0, date(2024, 1, 1), Status::NotSet),
        ];
        assessed[1].record.notes = "done".to_string();

        let summary = overview(&assessed);
        assert_eq!(summary.total_projects, 3);
        assert_eq!(summary.total_python_files, 9);
        assert_eq!(summary.with_requirements, 2);
        assert_eq!(summary.with_readme, 1);
        assert_eq!(summary.not_set, 2);
        assert_eq!(summary.with_notes, 1);
        assert_eq!(summary.total_size_mb, 4.0);
        assert_eq!(summary.avg_python_files, 3.0);
        assert_eq!(summary.status_distribution.len(), Status::ALL.len());
        assert_eq!(
            summary.status_distribution[0],
            StatusCount {
                status: Status::NotSet,
                count: 2
            }
        );
    }

    #[test]
    fn overview_of_empty_scan_is_zeroed() {
        let summary = overview(&[]);
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.avg_python_files, 0.0);
        assert_eq!(summary.avg_health, 0.0);
    }
}
