use crate::error::{Result, StrengthsError};
use crate::types::config::StrengthsConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "strengths.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/strengths/config.toml";
pub const DEFAULT_STATE_FILE: &str = "strengths.json";

/// Loads the working-directory config merged over the optional global one.
/// Returns `None` when neither file exists; the tool runs fine on defaults.
pub fn load_config(dir: &Path) -> Result<Option<StrengthsConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<StrengthsConfig>> {
    let local_path = dir.join(DEFAULT_CONFIG_FILE);
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &local_path)?;
    if !found {
        return Ok(None);
    }

    let cfg: StrengthsConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| StrengthsError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| StrengthsError::ConfigParse(format!("{}: {}", path.display(), e)))
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
