use super::health::HealthBand;
use super::{average_health, Assessment};
use crate::types::project::Status;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub band: HealthBand,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedMetrics {
    pub portfolio_size_gb: f64,
    pub avg_health: f64,
    pub avg_band: HealthBand,
    pub health_distribution: Vec<BandCount>,
    pub stale_after_days: i64,
    pub stale_count: usize,
    /// Percentage of projects marked `Complete`.
    pub completion_rate: f64,
}

/// Whole days from `date` to `today`, negative for future dates.
pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(date).num_days()
}

pub fn advanced_metrics(
    assessed: &[Assessment],
    today: NaiveDate,
    stale_after_days: i64,
) -> AdvancedMetrics {
    let total_size_mb: f64 = assessed.iter().map(|a| a.project.size_mb).sum();
    let avg_health = average_health(assessed);
    let health_distribution = HealthBand::ALL
        .into_iter()
        .map(|band| BandCount {
            band,
            count: assessed.iter().filter(|a| a.band() == band).count(),
        })
        .collect();
    let stale_count = assessed
        .iter()
        .filter(|a| days_since(a.project.last_modified, today) > stale_after_days)
        .count();
    let completed = assessed
        .iter()
        .filter(|a| a.record.status == Status::Complete)
        .count();
    let completion_rate = if assessed.is_empty() {
        0.0
    } else {
        completed as f64 / assessed.len() as f64 * 100.0
    };

    AdvancedMetrics {
        portfolio_size_gb: total_size_mb / 1024.0,
        avg_health,
        avg_band: HealthBand::from_score(avg_health),
        health_distribution,
        stale_after_days,
        stale_count,
        completion_rate,
    }
}
