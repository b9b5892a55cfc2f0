use thiserror::Error;
use tracing::warn;
use vidly_core::catalog::http::normalize_base_url;

use crate::models::Config;

/// Page sizes above this still work but make the table hard to scan.
const LARGE_PAGE_SIZE: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("list page size must be at least 1")]
    ZeroPageSize,
    #[error("API request timeout must be at least one second")]
    ZeroTimeout,
    #[error("invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for item in &self.items {
            match &item.hint {
                Some(hint) => warn!(hint = %hint, "{}", item.message),
                None => warn!("{}", item.message),
            }
        }
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.list.page_size == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize);
    }
    if config.list.page_size > LARGE_PAGE_SIZE {
        warnings.push(format!(
            "list page size {} is unusually large",
            config.list.page_size
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigGuardRailError::ZeroTimeout);
    }

    let url = normalize_base_url(&config.api.base_url).map_err(|_| {
        ConfigGuardRailError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
        }
    })?;
    let local = matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("[::1]")
    );
    if url.scheme() == "http" && !local {
        warnings.push_with_hint(
            format!("API base URL {url} is not using HTTPS"),
            "Use an https:// URL for catalog servers outside this machine",
        );
    }

    Ok(warnings)
}
