use super::Assessment;
use crate::types::project::Status;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    None,
    Status,
    Requirements,
    PythonFiles,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectGroup {
    pub label: String,
    pub projects: Vec<Assessment>,
}

/// Explorer page: headline totals over the whole scan, then the filtered
/// projects in groups.
#[derive(Debug, Clone, Serialize)]
pub struct Explorer {
    pub root: String,
    pub total_projects: usize,
    pub total_python_files: usize,
    pub with_requirements: usize,
    pub with_readme: usize,
    pub status_filter: String,
    pub matched: usize,
    pub groups: Vec<ProjectGroup>,
}

pub fn explore(
    root: &str,
    assessed: &[Assessment],
    filter: StatusFilter,
    group_by: GroupBy,
) -> Explorer {
    let filtered = filter_by_status(assessed, filter);
    let matched = filtered.len();
    Explorer {
        root: root.to_string(),
        total_projects: assessed.len(),
        total_python_files: assessed.iter().map(|a| a.project.python_files).sum(),
        with_requirements: assessed.iter().filter(|a| a.project.has_requirements).count(),
        with_readme: assessed.iter().filter(|a| a.project.has_readme).count(),
        status_filter: filter.label().to_string(),
        matched,
        groups: group_projects(filtered, group_by),
    }
}

pub fn filter_by_status(assessed: &[Assessment], filter: StatusFilter) -> Vec<Assessment> {
    assessed
        .iter()
        .filter(|a| filter.matches(a.record.status))
        .cloned()
        .collect()
}

/// Splits projects into labelled groups. Fixed-bucket groupings drop empty
/// buckets; status groups appear in first-seen order.
pub fn group_projects(assessed: Vec<Assessment>, group_by: GroupBy) -> Vec<ProjectGroup> {
    match group_by {
        GroupBy::None => vec![ProjectGroup {
            label: "All Projects".to_string(),
            projects: assessed,
        }],
        GroupBy::Status => {
            let mut groups: Vec<ProjectGroup> = Vec::new();
            for assessment in assessed {
                let label = assessment.record.status.as_str();
                match groups.iter_mut().find(|group| group.label == label) {
                    Some(group) => group.projects.push(assessment),
                    None => groups.push(ProjectGroup {
                        label: label.to_string(),
                        projects: vec![assessment],
                    }),
                }
            }
            groups
        }
        GroupBy::Requirements => bucket(
            assessed,
            &["With Requirements", "Without Requirements"],
            |a| if a.project.has_requirements { 0 } else { 1 },
        ),
        GroupBy::PythonFiles => bucket(
            assessed,
            &["No Python Files", "1-5 Files", "6-20 Files", "20+ Files"],
            |a| match a.project.python_files {
                0 => 0,
                1..=5 => 1,
                6..=20 => 2,
                _ => 3,
            },
        ),
        GroupBy::Size => bucket(
            assessed,
            &["Small (< 10 MB)", "Medium (10-100 MB)", "Large (> 100 MB)"],
            |a| {
                let size = a.project.size_mb;
                if size < 10.0 {
                    0
                } else if size <= 100.0 {
                    1
                } else {
                    2
                }
            },
        ),
    }
}

fn bucket(
    assessed: Vec<Assessment>,
    labels: &[&str],
    index_of: impl Fn(&Assessment) -> usize,
) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = labels
        .iter()
        .map(|label| ProjectGroup {
            label: (*label).to_string(),
            projects: Vec::new(),
        })
        .collect();
    for assessment in assessed {
        let index = index_of(&assessment);
        groups[index].projects.push(assessment);
    }
    groups.retain(|group| !group.projects.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::{assessment, date};

    fn labels(groups: &[ProjectGroup]) -> Vec<(&str, usize)> {
        groups
            .iter()
            .map(|group| (group.label.as_str(), group.projects.len()))
            .collect()
    }

    #[test]
    fn status_groups_keep_first_seen_order() {
        let assessed = vec![
            assessment("a", 1, 0.0, date(2024, 1, 1), Status::Complete),
            assessment("b", 1, 0.0, date(2024, 1, 1), Status::NotSet),
            assessment("c", 1, 0.0, date(2024, 1, 1), Status::Complete),
        ];
        let groups = group_projects(assessed, GroupBy::Status);
        assert_eq!(labels(&groups), vec![("Complete", 2), ("Not Set", 1)]);
    }

    #[test]
    fn python_file_buckets_drop_empty_groups() {
        let assessed = vec![
            assessment("a", 0, 0.0, date(2024, 1, 1), Status::NotSet),
            assessment("b", 5, 0.0, date(2024, 1, 1), Status::NotSet),
            assessment("c", 21, 0.0, date(2024, 1, 1), Status::NotSet),
        ];
        let groups = group_projects(assessed, GroupBy::PythonFiles);
        assert_eq!(
            labels(&groups),
            vec![("No Python Files", 1), ("1-5 Files", 1), ("20+ Files", 1)]
        );
    }

    #[test]
    fn size_buckets_include_hundred_in_medium() {
        let assessed = vec![
            assessment("a", 1, 9.99, date(2024, 1, 1), Status::NotSet),
            assessment("b", 1, 100.0, date(2024, 1, 1), Status::NotSet),
            assessment("c", 1, 100.01, date(2024, 1, 1), Status::NotSet),
        ];
        let groups = group_projects(assessed, GroupBy::Size);
        assert_eq!(
            labels(&groups),
            vec![
                ("Small (< 10 MB)", 1),
                ("Medium (10-100 MB)", 1),
                ("Large (> 100 MB)", 1)
            ]
        );
    }

    #[test]
    fn requirements_grouping_splits_projects() {
        let assessed = vec![
            assessment("a", 2, 0.0, date(2024, 1, 1), Status::NotSet),
            assessment("b", 1, 0.0, date(2024, 1, 1), Status::NotSet),
        ];
        let groups = group_projects(assessed, GroupBy::Requirements);
        assert_eq!(
            labels(&groups),
            vec![("With Requirements", 1), ("Without Requirements", 1)]
        );
    }

    #[test]
    fn filter_keeps_matching_status_only() {
        let assessed = vec![
            assessment("a", 1, 0.0, date(2024, 1, 1), Status::NeedFix),
            assessment("b", 1, 0.0, date(2024, 1, 1), Status::NotSet),
        ];
        let filtered = filter_by_status(&assessed, StatusFilter::Only(Status::NeedFix));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].project.name, "a");
        assert_eq!(filter_by_status(&assessed, StatusFilter::All).len(), 2);
    }

    #[test]
    fn explore_totals_cover_whole_scan() {
        let assessed = vec![
            assessment("a", 2, 0.0, date(2024, 1, 1), Status::NeedFix),
            assessment("b", 1, 0.0, date(2024, 1, 1), Status::NotSet),
        ];
        let explorer = explore(
            "/projects",
            &assessed,
            StatusFilter::Only(Status::Complete),
            GroupBy::None,
        );
        assert_eq!(explorer.total_projects, 2);
        assert_eq!(explorer.total_python_files, 3);
        assert_eq!(explorer.matched, 0);
        assert_eq!(explorer.status_filter, "Complete");
    }
}
