// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration for the data-protection CLI

use crate::infrastructure::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::shared::error::KarborError;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Which generation of client defaulting rules apply to list queries.
///
/// `Legacy` follows the shell commands: integer all-tenants, the
/// `ALL_TENANTS` environment override and client-side default ordering.
/// `Plugin` follows the plugin commands: boolean all-projects and server
/// ordering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClientGeneration {
    #[default]
    Legacy,
    Plugin,
}

impl ClientGeneration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientGeneration::Legacy => "legacy",
            ClientGeneration::Plugin => "plugin",
        }
    }
}

/// Main client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConf {
    /// Base URL of the data-protection v1 API, including the project segment
    pub endpoint: String,
    pub auth_token: Option<String>,
    pub generation: ClientGeneration,
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Default for ClientConf {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: None,
            generation: ClientGeneration::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            insecure: false,
        }
    }
}

/// Values given on the command line or through the environment.
/// Each one that is set wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfOverrides {
    pub endpoint: Option<String>,
    pub auth_token: Option<String>,
    pub generation: Option<ClientGeneration>,
}

impl ClientConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<str>>(path: T) -> anyhow::Result<Self> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.as_ref(), e))?;

        let conf: Self =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        Ok(conf)
    }

    /// Load the file if one is given, otherwise start from defaults, then
    /// apply overrides and validate.
    pub fn load(path: Option<&str>, overrides: &ConfOverrides) -> anyhow::Result<Self> {
        let mut conf = match path {
            Some(path) => {
                if !Path::new(path).exists() {
                    anyhow::bail!("Configuration file not found: {}", path);
                }
                Self::from(path)?
            }
            None => Self::default(),
        };

        conf.apply_overrides(overrides);
        conf.validate()?;
        Ok(conf)
    }

    pub fn apply_overrides(&mut self, overrides: &ConfOverrides) {
        if let Some(ref endpoint) = overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(ref token) = overrides.auth_token {
            self.auth_token = Some(token.clone());
        }
        if let Some(generation) = overrides.generation {
            self.generation = generation;
        }
    }

    pub fn validate(&self) -> Result<(), KarborError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(KarborError::config_error(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }

        if self.timeout_secs == 0 {
            return Err(KarborError::ConfigError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Endpoint without trailing slashes, ready for path joining
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
