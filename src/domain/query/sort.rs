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

//! Sort specifications and their wire formatting

use crate::infrastructure::constants::SORT_DIR_VALUES;
use crate::shared::error::{KarborError, Result};

/// Requested ordering for a list call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortSpec {
    /// Nothing requested; the server picks.
    #[default]
    ServerDefault,
    /// Deprecated `--sort_key` / `--sort_dir` pair, either half optional.
    Legacy {
        key: Option<String>,
        dir: Option<String>,
    },
    /// `key[:direction],key[:direction],...`
    Unified(String),
}

impl SortSpec {
    pub fn is_server_default(&self) -> bool {
        matches!(self, SortSpec::ServerDefault)
    }

    /// Validate against `allowed_keys` and produce query parameters.
    pub fn query_pairs(&self, allowed_keys: &[&str]) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        match self {
            SortSpec::ServerDefault => {}
            SortSpec::Unified(sort) => {
                pairs.push(("sort".to_string(), format_sort(sort, allowed_keys)?));
            }
            SortSpec::Legacy { key, dir } => {
                if let Some(key) = key.as_deref().filter(|k| !k.is_empty()) {
                    pairs.push(("sort_key".to_string(), format_sort_key(key, allowed_keys)?));
                }
                if let Some(dir) = dir.as_deref().filter(|d| !d.is_empty()) {
                    pairs.push(("sort_dir".to_string(), format_sort_dir(dir)?));
                }
            }
        }
        Ok(pairs)
    }
}

fn format_sort(sort: &str, allowed_keys: &[&str]) -> Result<String> {
    let mut parts = Vec::new();
    for item in sort.split(',') {
        let item = item.trim();
        let formatted = match item.split_once(':') {
            Some((key, dir)) => format!(
                "{}:{}",
                format_sort_key(key.trim(), allowed_keys)?,
                format_sort_dir(dir.trim())?
            ),
            None => format_sort_key(item, allowed_keys)?,
        };
        parts.push(formatted);
    }
    Ok(parts.join(","))
}

fn format_sort_key(key: &str, allowed_keys: &[&str]) -> Result<String> {
    if allowed_keys.contains(&key) {
        Ok(key.to_string())
    } else {
        Err(KarborError::validation(format!(
            "sort_key must be one of the following: {}.",
            allowed_keys.join(", ")
        )))
    }
}

fn format_sort_dir(dir: &str) -> Result<String> {
    if SORT_DIR_VALUES.contains(&dir) {
        Ok(dir.to_string())
    } else {
        Err(KarborError::validation(format!(
            "sort_dir must be one of the following: {}.",
            SORT_DIR_VALUES.join(", ")
        )))
    }
}
