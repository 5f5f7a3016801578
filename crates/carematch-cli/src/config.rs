use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use carematch_api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use carematch_auth::storage;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarematchConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    /// Added in v1; older configs get the default timeout.
    pub request_timeout_secs: u64,
    pub created_at: jiff::Timestamp,
}

impl CarematchConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base_url: api_base_url.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CarematchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// `<config_dir>/carematch`, shared with the session store.
pub fn default_config_dir() -> eyre::Result<PathBuf> {
    storage::default_dir().ok_or_else(|| eyre::eyre!("no config directory found"))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn has_config(dir: &Path) -> bool {
    config_path(dir).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<CarematchConfig> {
    let path = config_path(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CarematchConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// The stored config, or defaults when none has been saved yet.
pub fn load_or_default(dir: &Path) -> eyre::Result<CarematchConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        Ok(CarematchConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update carematch."
        ));
    }

    // v0 → v1: add request_timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("request_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT.as_secs().into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added request_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &CarematchConfig) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    let path = storage::write_private(dir, CONFIG_FILE, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
