pub mod error;

use anyhow::anyhow;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use vidly_core::query::{SearchMode, SortOrder, SortSpec};

use crate::{
    models::{
        ApiConfig, Config, ConfigMetadata, ConfigSource, ListConfig,
        sources::{
            ENV_API_URL, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS, EnvConfig, FileConfig,
        },
    },
    validation::{self, ConfigWarnings},
};
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["vidly.toml", "config/vidly.toml", "vidly.json"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory the default locations are resolved against
    pub search_root: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Load `.env`, then resolve configuration from the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve configuration against the given variables only.
    pub fn load_from_env_map(
        &self,
        vars: &HashMap<String, String>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_with_env(EnvConfig::from_map(vars))
    }

    /// Precedence for file-level settings: explicit path, then
    /// `VIDLY_CONFIG_PATH`, then inline `VIDLY_CONFIG_JSON`, then the first
    /// default location that exists, then built-in defaults. Individual
    /// `VIDLY_*` values are applied on top.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file, source) = self.load_file_config(&env)?;
        info!(source = ?source, "resolved configuration source");

        let (config, mut warnings) = compose_config(file, &env, source)?;
        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(FileConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let file = load_from_file(path)?;
            return Ok((file, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let file = load_from_file(path)?;
            return Ok((file, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let file = serde_json::from_str(raw).map_err(|err| {
                ConfigLoadError::Parse {
                    origin: "VIDLY_CONFIG_JSON".to_string(),
                    source: err.into(),
                }
            })?;
            return Ok((file, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let file = load_from_file(&path)?;
            return Ok((file, ConfigSource::File(path)));
        }

        Ok((FileConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self.options.search_root.as_deref().unwrap_or(Path::new(""));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|candidate| candidate.is_file())
    }
}

/// Read a TOML or JSON config file; the extension picks the format and
/// anything else is tried as TOML first, then JSON.
pub fn load_from_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let origin = path.display().to_string();
    let parsed: anyhow::Result<FileConfig> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(Into::into),
        Some("toml") => toml::from_str(&contents).map_err(Into::into),
        _ => parse_from_str(&contents, &origin),
    };

    debug!(path = %origin, "read config file");
    parsed.map_err(|source| ConfigLoadError::Parse { origin, source })
}

pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<FileConfig> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

fn compose_config(
    file: FileConfig,
    env: &EnvConfig,
    source: ConfigSource,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();
    let mut env_overrides = Vec::new();

    if source == ConfigSource::Default {
        warnings.push_with_hint(
            "No vidly.toml detected; using built-in defaults",
            "Create vidly.toml or set VIDLY_CONFIG_PATH to customize the list",
        );
    }

    let defaults = Config::default();

    let base_url = match &env.api_url {
        Some(url) => {
            env_overrides.push(ENV_API_URL);
            url.clone()
        }
        None => file.api.base_url.unwrap_or(defaults.api.base_url),
    };

    let timeout_secs = match &env.timeout_secs {
        Some(raw) => {
            env_overrides.push(ENV_TIMEOUT_SECS);
            parse_number(ENV_TIMEOUT_SECS, raw)?
        }
        None => file.api.timeout_secs.unwrap_or(defaults.api.timeout_secs),
    };

    let page_size = match &env.page_size {
        Some(raw) => {
            env_overrides.push(ENV_PAGE_SIZE);
            parse_number(ENV_PAGE_SIZE, raw)?
        }
        None => file.list.page_size.unwrap_or(defaults.list.page_size),
    };

    let order = match file.list.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>()?,
        None => defaults.list.sort.order,
    };
    let sort = match file.list.sort.as_deref() {
        Some(path) => SortSpec::from_path(path, order)?,
        None => SortSpec::new(defaults.list.sort.field, order),
    };

    let search_mode = match file.list.search_mode.as_deref() {
        None => defaults.list.search_mode,
        Some(raw) if raw.eq_ignore_ascii_case("literal") => SearchMode::Literal,
        Some(raw) if raw.eq_ignore_ascii_case("pattern") => SearchMode::Pattern,
        Some(raw) => {
            return Err(ConfigLoadError::InvalidValue {
                key: "list.search_mode",
                value: raw.to_string(),
            });
        }
    };

    let config = Config {
        api: ApiConfig {
            base_url,
            timeout_secs,
        },
        list: ListConfig {
            page_size,
            sort,
            search_mode,
        },
        metadata: ConfigMetadata {
            source,
            env_file_loaded: false,
            env_overrides,
        },
    };

    Ok((config, warnings))
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: &str,
) -> Result<T, ConfigLoadError> {
    raw.parse().map_err(|_| ConfigLoadError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
