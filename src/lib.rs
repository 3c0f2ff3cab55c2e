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

// Core modules
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use domain::config::{ClientConf, ClientGeneration, ConfOverrides};
pub use domain::models::{
    ParameterMap, Plan, PlanCreate, PlanPatch, PlanResource, Restore, RestoreCreate,
};
pub use domain::ops::{DeleteOutcome, DeleteReport, ResourceKind};
pub use domain::query::{
    AllTenants, ListArgs, ListQuery, QueryParameterResolver, SearchOptions, SortSpec,
};
pub use infrastructure::rest::{DataProtectionClient, DataProtectionClientImpl};
pub use shared::{KarborError, Result};
