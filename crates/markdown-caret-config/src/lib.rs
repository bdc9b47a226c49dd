use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Config file not found at {config_path}")]
    ConfigNotFound { config_path: PathBuf },

    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Connection settings for the cloud backend the editor syncs through.
///
/// Values come from the deployment environment, either directly
/// ([`BackendConfig::from_env`]) or via a TOML file whose values may
/// reference environment variables with `$VAR` syntax
/// ([`BackendConfig::load_from_path`]). A referenced variable that is not
/// set fails loudly with [`ConfigError::MissingVar`] instead of leaking a
/// placeholder into a deployed bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub region: String,
    pub identity_pool_id: String,
    pub user_pool_id: String,
    pub client_id: String,
    pub graphql_endpoint: String,
    pub app_sync_region: String,
    pub api_key: String,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`BackendConfig::from_env`] with an injected variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get =
            |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingVar(name.to_string()));
        Ok(Self {
            region: get("COGNITO_REGION")?,
            identity_pool_id: get("COGNITO_IDENTITY_POOL_ID")?,
            user_pool_id: get("COGNITO_USER_POOL_ID")?,
            client_id: get("COGNITO_CLIENT_ID")?,
            graphql_endpoint: get("GRAPHQL_ENDPOINT")?,
            app_sync_region: get("APP_SYNC_REGION")?,
            api_key: get("APP_SYNC_API_KEY")?,
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: BackendConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand $VAR references in the loaded values
        config.expand_values()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Resolves the config from an explicit file, the default file, or the
    /// process environment, in that order of preference.
    ///
    /// An explicit path must exist; the default file is optional and the
    /// environment is the fallback when it is absent.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => {
                Self::load_from_path(path)?.ok_or_else(|| ConfigError::ConfigNotFound {
                    config_path: path.to_path_buf(),
                })
            }
            None => match Self::load()? {
                Some(config) => Ok(config),
                None => Self::from_env(),
            },
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-caret");
        PathBuf::from(config_dir.as_ref()).join("backend.toml")
    }

    fn expand_values(&mut self) -> Result<(), ConfigError> {
        for value in [
            &mut self.region,
            &mut self.identity_pool_id,
            &mut self.user_pool_id,
            &mut self.client_id,
            &mut self.graphql_endpoint,
            &mut self.app_sync_region,
            &mut self.api_key,
        ] {
            let expanded = shellexpand::env(value.as_str())
                .map_err(|e| ConfigError::MissingVar(e.var_name))?
                .into_owned();
            *value = expanded;
        }
        Ok(())
    }

    /// Build-time define map in the shape the web bundler substitutes into
    /// the client code.
    ///
    /// Backend values are wrapped in single quotes so they land as string
    /// literals after substitution; `NODE_ENV` is the fixed double-quoted
    /// literal `"production"`.
    pub fn define_pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();
        pairs.insert("NODE_ENV".to_string(), "\"production\"".to_string());
        for (key, value) in [
            ("COGNITO_REGION", &self.region),
            ("COGNITO_IDENTITY_POOL_ID", &self.identity_pool_id),
            ("COGNITO_USER_POOL_ID", &self.user_pool_id),
            ("COGNITO_CLIENT_ID", &self.client_id),
            ("GRAPHQL_ENDPOINT", &self.graphql_endpoint),
            ("APP_SYNC_REGION", &self.app_sync_region),
            ("APP_SYNC_API_KEY", &self.api_key),
        ] {
            pairs.insert(key.to_string(), format!("'{value}'"));
        }
        pairs
    }

    pub fn to_define_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.define_pairs())?)
    }
}
