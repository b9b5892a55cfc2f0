use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const ENV_CONFIG_PATH: &str = "VIDLY_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "VIDLY_CONFIG_JSON";
pub const ENV_API_URL: &str = "VIDLY_API_URL";
pub const ENV_PAGE_SIZE: &str = "VIDLY_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "VIDLY_TIMEOUT_SECS";

/// Raw configuration as written in a TOML or JSON file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub list: FileListConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileListConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Column path, e.g. `title` or `genre.name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// `literal` or `pattern`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_mode: Option<String>,
}

/// Environment values the loader looks at. Blank values count as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub api_url: Option<String>,
    pub page_size: Option<String>,
    pub timeout_secs: Option<String>,
}

impl EnvConfig {
    /// Read from the process environment.
    pub fn gather() -> Self {
        Self::from_map(&std::env::vars().collect())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            vars.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            config_path: get(ENV_CONFIG_PATH).map(PathBuf::from),
            config_json: get(ENV_CONFIG_JSON),
            api_url: get(ENV_API_URL),
            page_size: get(ENV_PAGE_SIZE),
            timeout_secs: get(ENV_TIMEOUT_SECS),
        }
    }
}
