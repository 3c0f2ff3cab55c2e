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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, KarborError>;

#[derive(Error, Debug)]
pub enum KarborError {
    /// Bad flag combination or unparsable argument; raised before any remote call.
    #[error("{0}")]
    Command(String),

    #[error("{0}")]
    Validation(String),

    #[error("No {resource_type} with a name or ID of '{id}' exists.")]
    NotFound { resource_type: String, id: String },

    #[error("Multiple {resource_type} matches found for '{name}', use an ID to be more specific.")]
    NoUniqueMatch { resource_type: String, name: String },

    #[error("Data protection API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl KarborError {
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    pub fn no_unique_match(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NoUniqueMatch {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
