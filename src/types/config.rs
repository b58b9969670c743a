use serde::Deserialize;

pub const DEFAULT_DATA_FILE: &str = "project_data.json";
pub const DEFAULT_PATHS_FILE: &str = "saved_paths.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizerConfig {
    pub storage: Option<StorageConfig>,
    pub analysis: Option<AnalysisConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_file: Option<String>,
    pub paths_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub stale_after_days: Option<u32>,
    pub compare_limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub stale_after_days: i64,
    pub compare_limit: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            stale_after_days: 180,
            compare_limit: 5,
        }
    }
}

impl OrganizerConfig {
    pub fn data_file(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.data_file.as_deref())
            .unwrap_or(DEFAULT_DATA_FILE)
    }

    pub fn paths_file(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.paths_file.as_deref())
            .unwrap_or(DEFAULT_PATHS_FILE)
    }

    pub fn analysis(&self) -> AnalysisSettings {
        let defaults = AnalysisSettings::default();
        match &self.analysis {
            Some(analysis) => AnalysisSettings {
                stale_after_days: analysis
                    .stale_after_days
                    .map(i64::from)
                    .unwrap_or(defaults.stale_after_days),
                compare_limit: analysis
                    .compare_limit
                    .map(|limit| limit as usize)
                    .unwrap_or(defaults.compare_limit),
            },
            None => defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let cfg = OrganizerConfig::default();
        assert_eq!(cfg.data_file(), DEFAULT_DATA_FILE);
        assert_eq!(cfg.paths_file(), DEFAULT_PATHS_FILE);
        assert_eq!(cfg.analysis(), AnalysisSettings::default());
    }

    #[test]
    fn partial_analysis_section_keeps_other_defaults() {
        let cfg: OrganizerConfig = toml::from_str(
            r#"
[analysis]
stale_after_days = 30
"#,
        )
        .expect("config should parse");
        let analysis = cfg.analysis();
        assert_eq!(analysis.stale_after_days, 30);
        assert_eq!(analysis.compare_limit, 5);
    }
}
