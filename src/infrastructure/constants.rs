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

/// Environment variables
pub const CONF_FILE_ENV: &str = "KARBOR_CONF_FILE";
pub const ENDPOINT_ENV: &str = "KARBOR_URL";
pub const AUTH_TOKEN_ENV: &str = "OS_AUTH_TOKEN";
pub const CLIENT_GENERATION_ENV: &str = "KARBOR_CLIENT_GENERATION";
/// Legacy shell override for the all-tenants default
pub const ALL_TENANTS_ENV: &str = "ALL_TENANTS";

/// Client defaults
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8799/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("karbor-cli/", env!("CARGO_PKG_VERSION"));
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// REST collections
pub const PLANS_PATH: &str = "plans";
pub const RESTORES_PATH: &str = "restores";

/// Sorting
pub const SORT_DIR_VALUES: &[&str] = &["asc", "desc"];
pub const PLAN_SORT_KEYS: &[&str] = &["id", "status", "name", "created_at", "updated_at"];
pub const RESTORE_SORT_KEYS: &[&str] = &["id", "status", "created_at", "updated_at"];

/// Table columns
pub const PLAN_LIST_COLUMNS: &[&str] = &["Id", "Name", "Description", "Provider id", "Status"];
pub const RESTORE_LIST_COLUMNS: &[&str] = &[
    "Id",
    "Project id",
    "Provider id",
    "Checkpoint id",
    "Restore target",
    "Parameters",
    "Status",
];

/// Column used for the legacy client-side default ordering
pub const PLAN_DEFAULT_SORT_COLUMN: usize = 1;
pub const RESTORE_DEFAULT_SORT_COLUMN: usize = 0;
