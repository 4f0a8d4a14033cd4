//! `~/.advisor/config.toml` loading.
//!
//! ```toml
//! [service]
//! endpoint = "https://agreenably-server.onrender.com/submitForm"
//! connect_timeout_secs = 30
//! allow_http = false
//!
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [profile]
//! email = "${ADVISOR_EMAIL}"
//! industries = ["Energy", "Textiles"]
//! revenue = 250000
//! budget = 1500
//! interest = "Environmental Focus For Customers"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use advisor_client::{ClientSettings, DEFAULT_CONNECT_TIMEOUT_SECS, Endpoint, EndpointError};
use advisor_types::ui::UiOptions;
use advisor_types::{IndustrySelection, Interest};
use serde::Deserialize;
use thiserror::Error;

use crate::form::FormState;

/// Environment variable that overrides `[service] endpoint`.
pub const ENDPOINT_ENV: &str = "ADVISOR_ENDPOINT";

#[derive(Debug, Default, Deserialize)]
pub struct AdvisorConfig {
    pub service: Option<ServiceConfig>,
    pub app: Option<AppConfig>,
    /// Values used to prefill the form at startup.
    pub profile: Option<ProfileConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    /// Accept a plain `http` endpoint (local development).
    #[serde(default)]
    pub allow_http: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileConfig {
    pub email: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub revenue: Option<i64>,
    pub budget: Option<i64>,
    pub interest: Option<String>,
}

impl ProfileConfig {
    /// Prefill `form` from the profile. Unknown labels are skipped and
    /// returned as warnings; everything else still applies.
    pub fn apply(&self, form: &mut FormState) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(email) = &self.email {
            form.set_email(expand_env_vars(email).trim());
        }

        let mut industries = IndustrySelection::empty();
        for label in &self.industries {
            match advisor_types::Industry::parse(label) {
                Ok(industry) => industries.insert(industry),
                Err(err) => warnings.push(err.to_string()),
            }
        }
        if !industries.is_empty() {
            form.set_industries(industries);
        }

        if let Some(revenue) = self.revenue {
            form.set_revenue(revenue);
        }
        if let Some(budget) = self.budget {
            form.set_budget(budget);
        }
        if let Some(interest) = &self.interest {
            match Interest::parse(interest) {
                Ok(interest) => form.set_interest(interest),
                Err(err) => warnings.push(err.to_string()),
            }
        }

        warnings
    }
}

/// Replace `${VAR}` references with environment values. Unset variables
/// become empty; an unclosed `${` is kept verbatim.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&std::env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl AdvisorConfig {
    /// Load from `~/.advisor/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Client settings, with [`ENDPOINT_ENV`] taking precedence over the file.
    pub fn client_settings(&self) -> Result<ClientSettings, EndpointError> {
        let service = self.service.as_ref();
        let allow_http = service.is_some_and(|s| s.allow_http);

        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                service
                    .and_then(|s| s.endpoint.as_deref())
                    .map(expand_env_vars)
            });
        let endpoint = match endpoint {
            Some(raw) => Endpoint::parse(&raw, allow_http)?,
            None => Endpoint::default(),
        };

        let connect_timeout = service
            .and_then(|s| s.connect_timeout_secs)
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Ok(ClientSettings {
            endpoint,
            connect_timeout: Duration::from_secs(connect_timeout),
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".advisor").join("config.toml"))
}
