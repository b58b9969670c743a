use super::Assessment;
use crate::types::project::Status;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub total_projects: usize,
    pub total_python_files: usize,
    pub with_requirements: usize,
    pub with_readme: usize,
    /// Statuses in the order they first appear in the scan.
    pub distribution: Vec<StatusShare>,
}

pub fn status_report(assessed: &[Assessment]) -> StatusReport {
    let mut counts: Vec<(Status, usize)> = Vec::new();
    for assessment in assessed {
        let status = assessment.record.status;
        match counts.iter_mut().find(|(seen, _)| *seen == status) {
            Some((_, count)) => *count += 1,
            None => counts.push((status, 1)),
        }
    }
    let total = assessed.len();
    let distribution = counts
        .into_iter()
        .map(|(status, count)| StatusShare {
            status,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    StatusReport {
        total_projects: total,
        total_python_files: assessed.iter().map(|a| a.project.python_files).sum(),
        with_requirements: assessed.iter().filter(|a| a.project.has_requirements).count(),
        with_readme: assessed.iter().filter(|a| a.project.has_readme).count(),
        distribution,
    }
}

impl StatusReport {
    /// Plain-text form suitable for pasting into notes or chat.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("Python Projects Status Report\n");
        output.push_str(&format!("Total Projects: {}\n", self.total_projects));
        output.push_str(&format!("Total Python Files: {}\n", self.total_python_files));
        output.push_str("Status Distribution:\n");
        for share in &self.distribution {
            output.push_str(&format!(
                "  - {}: {} ({:.1}%)\n",
                share.status, share.count, share.percentage
            ));
        }
        output
    }
}
