use crate::types::project::{ProjectInfo, Status};
use serde::Serialize;

const BASE_SCORE: i32 = 50;
const REQUIREMENTS_BONUS: i32 = 15;
const README_BONUS: i32 = 15;
const PER_PYTHON_FILE: i32 = 2;
const PYTHON_FILES_CAP: i32 = 20;

/// Heuristic health in `0..=100` for a scanned project under `status`.
pub fn calculate_health(project: &ProjectInfo, status: Status) -> u8 {
    let mut score = BASE_SCORE;
    if project.has_requirements {
        score += REQUIREMENTS_BONUS;
    }
    if project.has_readme {
        score += README_BONUS;
    }
    let files = i32::try_from(project.python_files).unwrap_or(i32::MAX);
    score += files.saturating_mul(PER_PYTHON_FILE).min(PYTHON_FILES_CAP);
    score += status.health_delta();
    score.clamp(0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    pub const ALL: [HealthBand; 4] = [
        HealthBand::Excellent,
        HealthBand::Good,
        HealthBand::Fair,
        HealthBand::Poor,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "🟢",
            Self::Good => "🟡",
            Self::Fair => "🟠",
            Self::Poor => "🔴",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (80-100)",
            Self::Good => "Good (60-79)",
            Self::Fair => "Fair (40-59)",
            Self::Poor => "Poor (0-39)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn project(python_files: usize, has_requirements: bool, has_readme: bool) -> ProjectInfo {
        ProjectInfo {
            name: "sample".to_string(),
            path: PathBuf::from("/projects/sample"),
            python_files,
            has_requirements,
            has_readme,
            last_modified: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            size_mb: 0.1,
        }
    }

    #[test]
    fn health_sums_all_terms() {
        // 50 + 15 + 15 + 6 + 10
        assert_eq!(calculate_health(&project(3, true, true), Status::UnderDevelopment), 96);
    }

    #[test]
    fn python_file_bonus_is_capped() {
        // 50 + 20 - 5
        assert_eq!(calculate_health(&project(40, false, false), Status::NotSet), 65);
    }

    #[test]
    fn health_is_clamped_to_hundred() {
        assert_eq!(calculate_health(&project(50, true, true), Status::Complete), 100);
    }

    #[test]
    fn dropped_bare_project_scores_twenty() {
        assert_eq!(calculate_health(&project(0, false, false), Status::Dropped), 20);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(HealthBand::from_score(80.0), HealthBand::Excellent);
        assert_eq!(HealthBand::from_score(79.9), HealthBand::Good);
        assert_eq!(HealthBand::from_score(60.0), HealthBand::Good);
        assert_eq!(HealthBand::from_score(40.0), HealthBand::Fair);
        assert_eq!(HealthBand::from_score(39.5), HealthBand::Poor);
        assert_eq!(HealthBand::Fair.emoji(), "🟠");
    }
}
