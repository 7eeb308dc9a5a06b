use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_yaml::Value;

use crate::infra::{
    config::{merge::merge_values, WalletyConfig},
    error::AppError,
};

const DEFAULT_CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.yaml";
const CREDENTIALS_FILE: &str = "credentials.yaml";

/// Loads `config.yaml` and `credentials.yaml` from the given directory and
/// decodes the merged settings. Credential keys take precedence on
/// conflict. Both files are required; any read, parse, or decode failure is
/// fatal and no partial configuration is returned.
pub fn load(dir: Option<&Path>) -> Result<WalletyConfig, AppError> {
    let dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

    let mut settings = read_yaml(&dir.join(CONFIG_FILE))?;
    let credentials = read_yaml(&dir.join(CREDENTIALS_FILE))?;
    merge_values(&mut settings, credentials);

    serde_yaml::from_value(settings).map_err(|source| AppError::ConfigDecode { dir, source })
}

fn read_yaml(path: &Path) -> Result<Value, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
