use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::{assessment, date};
    use crate::analyze::status_report::status_report;
    use crate::types::project::Status;

    #[test]
    fn json_report_uses_display_status_names() {
        let assessed = vec![assessment("alpha", 1, 0.0, date(2024, 1, 1), Status::NeedFix)];
        let rendered = to_json(&status_report(&assessed)).expect("json should serialize");
        assert!(rendered.contains("\"status\": \"Need Fix\""));
        assert!(rendered.contains("\"percentage\": 100.0"));
    }

    #[test]
    fn json_assessment_flattens_project_and_record() {
        let assessed = assessment("alpha", 1, 0.0, date(2024, 1, 1), Status::NotSet);
        let rendered = to_json(&assessed).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["name"], "alpha");
        assert_eq!(value["status"], "Not Set");
        assert_eq!(value["last_modified"], "2024-01-01");
        assert_eq!(value["health"], 47);
    }
}
