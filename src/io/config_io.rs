use std::fs;
use std::path::Path;

use crate::io::DataError;
use crate::model::config::AppConfig;

pub const CONFIG_FILE: &str = "tally.toml";

/// Read tally.toml from the data directory. A missing file means the built-in
/// catalog; a malformed file is an error, since the catalog is authoritative
/// configuration rather than recoverable state.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, DataError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| DataError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}
