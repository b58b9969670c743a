use super::ToMarkdown;
use crate::analyze::compare::Comparison;
use crate::analyze::group::Explorer;
use crate::analyze::health::HealthBand;
use crate::analyze::status_report::StatusReport;
use crate::analyze::{Assessment, Dashboard};
use crate::types::project::Status;

const NOTES_PREVIEW_CHARS: usize = 50;

fn check(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn notes_preview(notes: &str) -> String {
    if notes.chars().count() > NOTES_PREVIEW_CHARS {
        let head: String = notes.chars().take(NOTES_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        notes.to_string()
    }
}

fn health_label(health: u8) -> String {
    let band = HealthBand::from_score(f64::from(health));
    format!("{} {}", band.emoji(), health)
}

impl ToMarkdown for Dashboard {
    fn to_markdown(&self) -> String {
        let overview = &self.overview;
        let metrics = &self.metrics;
        let mut output = String::new();
        output.push_str("# Project Dashboard\n\n");
        output.push_str(&format!("Root: `{}`\n\n", self.root));

        output.push_str("## Overview\n\n");
        output.push_str(&format!(
            "- Total Projects: {}\n- Python Files: {}\n- With Requirements: {}\n- With README: {}\n- Not Set Status: {} ({} need attention)\n\n",
            overview.total_projects,
            overview.total_python_files,
            overview.with_requirements,
            overview.with_readme,
            overview.not_set,
            overview.not_set
        ));

        output.push_str("## Status Distribution\n\n");
        for entry in &overview.status_distribution {
            if entry.status == Status::NotSet && entry.count > 0 {
                output.push_str(&format!(
                    "- {} **{}: {} projects**\n",
                    entry.status.emoji(),
                    entry.status,
                    entry.count
                ));
            } else {
                output.push_str(&format!(
                    "- {} {}: {} projects\n",
                    entry.status.emoji(),
                    entry.status,
                    entry.count
                ));
            }
        }
        output.push('\n');

        output.push_str("## All Projects\n\n");
        output.push_str(
            "| # | Project | Health | Status | Python Files | Req | README | Size (MB) | Last Modified | Notes |\n",
        );
        output.push_str("|---|---|---|---|---|---|---|---|---|---|\n");
        for (index, assessment) in self.projects.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                index + 1,
                cell(&assessment.project.name),
                health_label(assessment.health),
                assessment.record.status,
                assessment.project.python_files,
                check(assessment.project.has_requirements),
                check(assessment.project.has_readme),
                assessment.project.size_mb,
                assessment.project.last_modified,
                cell(&notes_preview(&assessment.record.notes))
            ));
        }
        output.push('\n');
        output.push_str(&format!(
            "Total Size: {:.1} MB | Avg Python Files: {:.1} | Projects with Notes: {}\n\n",
            overview.total_size_mb, overview.avg_python_files, overview.with_notes
        ));

        output.push_str("## Advanced Metrics\n\n");
        output.push_str(&format!(
            "- Portfolio Size: {:.2} GB\n- Avg Health Score: {:.1} ({} {})\n- Stale Projects: {} (not modified in {}+ days)\n- Completion Rate: {:.1}%\n\n",
            metrics.portfolio_size_gb,
            metrics.avg_health,
            metrics.avg_band.emoji(),
            metrics.avg_band.description(),
            metrics.stale_count,
            metrics.stale_after_days,
            metrics.completion_rate
        ));

        output.push_str("## Health Distribution\n\n");
        for entry in &metrics.health_distribution {
            output.push_str(&format!(
                "- {} {}: {} projects\n",
                entry.band.emoji(),
                entry.band.range_label(),
                entry.count
            ));
        }
        output.push_str(&format!(
            "\nOverall Portfolio Health: {} {}\n",
            metrics.avg_band.emoji(),
            metrics.avg_band.description()
        ));

        output
    }
}

fn project_card(output: &mut String, assessment: &Assessment) {
    let project = &assessment.project;
    let record = &assessment.record;
    output.push_str(&format!("### {} {}\n\n", record.status.emoji(), project.name));
    output.push_str(&format!("- Path: `{}`\n", project.path.display()));
    output.push_str(&format!(
        "- Health: {} ({})\n",
        health_label(assessment.health),
        assessment.band().description()
    ));
    output.push_str(&format!(
        "- Python Files: {} | Last Modified: {}\n",
        project.python_files, project.last_modified
    ));
    output.push_str(&format!(
        "- Size: {} MB | Requirements: {} | README: {}\n",
        project.size_mb,
        check(project.has_requirements),
        check(project.has_readme)
    ));
    match record.last_updated {
        Some(updated) => output.push_str(&format!(
            "- Status: **{}** (updated {})\n",
            record.status,
            updated.format("%m/%d/%Y")
        )),
        None => output.push_str(&format!("- Status: **{}**\n", record.status)),
    }
    if !record.notes.is_empty() {
        output.push_str(&format!("- Notes: {}\n", record.notes));
    }
    output.push('\n');
}

impl ToMarkdown for Explorer {
    fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("# Project Explorer\n\n");
        output.push_str(&format!("Root: `{}`\n\n", self.root));
        output.push_str(&format!(
            "- Total Projects: {}\n- Python Files: {}\n- With Requirements: {}\n- With README: {}\n\n",
            self.total_projects, self.total_python_files, self.with_requirements, self.with_readme
        ));

        if self.matched == 0 {
            output.push_str(&format!("No projects with status: {}\n", self.status_filter));
            return output;
        }

        for group in self.groups.iter().filter(|group| !group.projects.is_empty()) {
            output.push_str(&format!(
                "## {} ({} projects)\n\n",
                group.label,
                group.projects.len()
            ));
            for assessment in &group.projects {
                project_card(&mut output, assessment);
            }
        }
        output
    }
}

impl ToMarkdown for Comparison {
    fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("# Project Comparison\n\n");
        if self.rows.is_empty() {
            output.push_str("- none\n");
        } else {
            output.push_str(
                "| Project | Health | Status | Files | Req | README | Size | Days Old | Last Updated |\n",
            );
            output.push_str("|---|---|---|---|---|---|---|---|---|\n");
            for row in &self.rows {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    cell(&row.project),
                    health_label(row.health),
                    row.status,
                    row.python_files,
                    check(row.has_requirements),
                    check(row.has_readme),
                    row.size_mb,
                    row.days_since_modified,
                    row.last_modified
                ));
            }
        }

        if let Some(insights) = &self.insights {
            output.push_str("\n## Insights\n\n");
            output.push_str(&format!(
                "- Best Health: {} (score {})\n- Needs Most Attention: {} (score {})\n- Most Stale: {} ({} days old)\n",
                insights.best_health.project,
                insights.best_health.value,
                insights.needs_attention.project,
                insights.needs_attention.value,
                insights.most_stale.project,
                insights.most_stale.value
            ));
        }

        if !self.unknown.is_empty() {
            output.push_str(&format!(
                "\nUnknown projects: {}\n",
                self.unknown.join(", ")
            ));
        }
        output
    }
}

impl ToMarkdown for StatusReport {
    fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("# Status Report\n\n");
        output.push_str("## Project Statistics\n\n");
        output.push_str(&format!(
            "- Total Projects: {}\n- Total Python Files: {}\n- Projects with Requirements: {}\n- Projects with README: {}\n\n",
            self.total_projects, self.total_python_files, self.with_requirements, self.with_readme
        ));
        output.push_str("## Status Distribution\n\n");
        for share in &self.distribution {
            output.push_str(&format!(
                "- {} {}: {} ({:.1}%)\n",
                share.status.emoji(),
                share.status,
                share.count,
                share.percentage
            ));
        }
        output.push_str("\n## Copyable Report\n\n```text\n");
        output.push_str(&self.to_text());
        output.push_str("```\n");
        output
    }
}
