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

//! Parsing of free-form command arguments into request values

use crate::domain::models::{ParameterMap, PlanResource};
use crate::shared::error::{KarborError, Result};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Parse `id=type,id=type` into an ordered resource list.
pub fn extract_resources(raw: &str) -> Result<Vec<PlanResource>> {
    raw.split(',')
        .map(|token| match token.split_once('=') {
            Some((id, resource_type)) => Ok(PlanResource::new(id, resource_type)),
            None => Err(KarborError::command("Unable to parse parameter resources.")),
        })
        .collect()
}

/// Parse `key=value` tokens. Each argument may hold several
/// whitespace-separated tokens; a bare `key` maps to `None`.
pub fn extract_parameters<S: AsRef<str>>(args: &[S]) -> ParameterMap {
    let mut parameters = ParameterMap::new();
    for arg in args {
        for token in arg.as_ref().split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) => {
                    parameters.insert(key.to_string(), Some(value.to_string()));
                }
                None => {
                    parameters.insert(token.to_string(), None);
                }
            }
        }
    }
    parameters
}

/// Parse a JSON object given on the command line.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(KarborError::command(
            "Unable to parse parameters JSON: expected an object",
        )),
        Err(e) => Err(KarborError::command(format!(
            "Unable to parse parameters JSON: {}",
            e
        ))),
    }
}

/// UUID-shape check; accepts hyphenated, simple, braced and urn forms.
pub fn is_uuid_like(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

pub fn require_uuid(value: &str, what: &str) -> Result<()> {
    if is_uuid_like(value) {
        Ok(())
    } else {
        Err(KarborError::validation(format!("Invalid {} provided.", what)))
    }
}
