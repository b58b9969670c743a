use crate::error::{OrganizerError, Result};
use crate::types::config::OrganizerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "organizer.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/organizer/config.toml";

/// Loads the global config overlaid with `<data_dir>/organizer.toml`.
pub fn load_config(data_dir: &Path) -> Result<OrganizerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(data_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    data_dir: &Path,
    global_path: Option<&Path>,
) -> Result<OrganizerConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &data_dir.join(DEFAULT_CONFIG_FILE))?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| OrganizerError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| OrganizerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{DEFAULT_DATA_FILE, DEFAULT_PATHS_FILE};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_uses_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.data_file(), DEFAULT_DATA_FILE);
        assert_eq!(cfg.paths_file(), DEFAULT_PATHS_FILE);
        assert_eq!(cfg.analysis().stale_after_days, 180);
    }

    #[test]
    fn load_config_overlays_local_on_global() {
        let data_dir = TempDir::new().expect("data temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[storage]
data_file = "global_data.json"
paths_file = "global_paths.json"

[analysis]
compare_limit = 8
"#,
        )
        .expect("global config should write");

        fs::write(
            data_dir.path().join(DEFAULT_CONFIG_FILE),
            r#"
[storage]
data_file = "local_data.json"

[analysis]
stale_after_days = 90
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(data_dir.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.data_file(), "local_data.json");
        assert_eq!(cfg.paths_file(), "global_paths.json");
        assert_eq!(cfg.analysis().stale_after_days, 90);
        assert_eq!(cfg.analysis().compare_limit, 8);
    }

    #[test]
    fn load_config_reports_malformed_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[storage\n")
            .expect("broken config should write");
        let result = load_config_with_global(dir.path(), None);
        assert!(matches!(result, Err(OrganizerError::ConfigParse(_))));
    }
}
