use std::path::{Path, PathBuf};

use laudo_core::measurements::SUFFICIENT_FOLLOW_UP_MONTHS;
use laudo_export::assemble::ReportFormat;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaudoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_guideline")]
    pub pirads_guideline: String,
    #[serde(default = "default_follow_up")]
    pub sufficient_follow_up_months: u32,
    #[serde(default)]
    pub default_format: ReportFormat,
    /// Live catalog JSON loaded on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_guideline() -> String {
    "2.1".to_string()
}

fn default_follow_up() -> u32 {
    SUFFICIENT_FOLLOW_UP_MONTHS
}

impl Default for LaudoConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            pirads_guideline: default_guideline(),
            sufficient_follow_up_months: default_follow_up(),
            default_format: ReportFormat::default(),
            catalog_path: None,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.laudo.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or at the default location. A missing file
/// yields the defaults.
pub fn load_config(path: Option<&Path>) -> eyre::Result<LaudoConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LaudoConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<LaudoConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version)
            .map_err(|_| eyre::eyre!("config_version {version} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: LaudoConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update laudo."
        ));
    }

    // v0 → v1: follow_up_months renamed to sufficient_follow_up_months
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(months) = obj.remove("follow_up_months") {
            obj.entry("sufficient_follow_up_months").or_insert(months);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renamed follow_up_months)");
    }

    Ok(json)
}

pub fn save_config_to(config: &LaudoConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
