use super::health::HealthBand;
use super::metrics::days_since;
use super::Assessment;
use crate::types::project::Status;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub project: String,
    pub health: u8,
    pub band: HealthBand,
    pub status: Status,
    pub python_files: usize,
    pub has_requirements: bool,
    pub has_readme: bool,
    pub size_mb: f64,
    pub days_since_modified: i64,
    pub last_modified: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub project: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub best_health: Highlight,
    pub needs_attention: Highlight,
    pub most_stale: Highlight,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub insights: Option<Insights>,
    pub unknown: Vec<String>,
}

/// Compares the named projects, or the first `default_limit` when `names`
/// is empty. Ties resolve to the earliest row.
pub fn compare(
    assessed: &[Assessment],
    names: &[String],
    default_limit: usize,
    today: NaiveDate,
) -> Comparison {
    let mut unknown = Vec::new();
    let selected: Vec<&Assessment> = if names.is_empty() {
        assessed.iter().take(default_limit).collect()
    } else {
        names
            .iter()
            .filter_map(|name| {
                let found = assessed.iter().find(|a| &a.project.name == name);
                if found.is_none() {
                    unknown.push(name.clone());
                }
                found
            })
            .collect()
    };

    let rows: Vec<ComparisonRow> = selected
        .into_iter()
        .map(|a| ComparisonRow {
            project: a.project.name.clone(),
            health: a.health,
            band: a.band(),
            status: a.record.status,
            python_files: a.project.python_files,
            has_requirements: a.project.has_requirements,
            has_readme: a.project.has_readme,
            size_mb: a.project.size_mb,
            days_since_modified: days_since(a.project.last_modified, today),
            last_modified: a.project.last_modified,
        })
        .collect();

    Comparison {
        insights: insights(&rows),
        rows,
        unknown,
    }
}

fn insights(rows: &[ComparisonRow]) -> Option<Insights> {
    let best = rows.iter().min_by_key(|row| Reverse(row.health))?;
    let worst = rows.iter().min_by_key(|row| row.health)?;
    let stale = rows
        .iter()
        .min_by_key(|row| Reverse(row.days_since_modified))?;
    Some(Insights {
        best_health: Highlight {
            project: best.project.clone(),
            value: i64::from(best.health),
        },
        needs_attention: Highlight {
            project: worst.project.clone(),
            value: i64::from(worst.health),
        },
        most_stale: Highlight {
            project: stale.project.clone(),
            value: stale.days_since_modified,
        },
    })
}
