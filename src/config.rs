use crate::error::{AiReadyError, Result};
use crate::types::config::AiReadyConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "ai-ready.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/ai-ready/config.toml";

/// Loads global, working-directory and explicit config files, later files winning.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<AiReadyConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let cwd = std::env::current_dir()?;
    load_config_with_global(&cwd, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<Option<AiReadyConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AiReadyError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    let local = root.join(DEFAULT_CONFIG_FILE);
    for path in global_path.into_iter().chain([local.as_path()]).chain(explicit) {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: AiReadyConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AiReadyError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "loading config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AiReadyError::ConfigParse(format!("{}: {}", path.display(), e)))
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
