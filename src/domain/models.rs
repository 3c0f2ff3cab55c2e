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

//! Plan and restore records exchanged with the data-protection API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One protectable resource inside a plan. Sent in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl PlanResource {
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
        }
    }
}

/// Restore parameters; a `None` value asks the server to unset the key.
pub type ParameterMap = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub provider_id: String,
    pub status: String,
    pub resources: Vec<PlanResource>,
    pub parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Restore {
    pub id: String,
    pub project_id: Option<String>,
    pub provider_id: String,
    pub checkpoint_id: String,
    pub restore_target: Option<String>,
    pub parameters: Map<String, Value>,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_status: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_reason: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCreate {
    pub name: String,
    pub provider_id: String,
    pub resources: Vec<PlanResource>,
    pub parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sparse plan update. Fields left as `None` are not sent, so "not changing"
/// stays distinct from "setting to empty".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlanPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<PlanResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PlanPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.resources.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestoreCreate {
    pub provider_id: String,
    pub checkpoint_id: String,
    pub restore_target: Option<String>,
    pub parameters: ParameterMap,
}
