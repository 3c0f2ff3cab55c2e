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

//! Translation of list flags into the search and sort parameters sent to
//! the listing endpoints, for both client generations.

use super::sort::SortSpec;
use crate::domain::config::ClientGeneration;
use crate::infrastructure::constants::ALL_TENANTS_ENV;
use crate::shared::error::{KarborError, Result};

pub const SORT_CONFLICT_MESSAGE: &str =
    "The --sort_key and --sort_dir arguments are deprecated and are not supported with --sort.";

/// Raw list flags as parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    pub tenant: Option<String>,
    /// `--all-tenants [N]`; `None` when the flag was not given.
    pub all_tenants: Option<i64>,
    pub all_projects: bool,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub marker: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub sort_key: Option<String>,
    pub sort_dir: Option<String>,
}

/// The all-tenants filter. Integer for the legacy generation, boolean for
/// the plugin generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllTenants {
    Count(i64),
    Flag(bool),
}

impl Default for AllTenants {
    fn default() -> Self {
        AllTenants::Count(0)
    }
}

impl AllTenants {
    pub fn is_enabled(&self) -> bool {
        match *self {
            AllTenants::Count(n) => n != 0,
            AllTenants::Flag(b) => b,
        }
    }

    /// Wire value; `None` when falsy so the key is left out of the query.
    fn query_value(&self) -> Option<String> {
        match *self {
            AllTenants::Count(0) | AllTenants::Flag(false) => None,
            AllTenants::Count(n) => Some(n.to_string()),
            AllTenants::Flag(true) => Some("True".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub all_tenants: AllTenants,
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl SearchOptions {
    /// Filter for a lookup by exact name, within the caller's own project.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set filters only; empty strings count as unset.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(value) = self.all_tenants.query_value() {
            pairs.push(("all_tenants".to_string(), value));
        }
        let text_filters = [
            ("description", &self.description),
            ("name", &self.name),
            ("project_id", &self.project_id),
            ("status", &self.status),
        ];
        for (key, value) in text_filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key.to_string(), value.to_string()));
            }
        }
        pairs
    }
}

/// Everything a single list call needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_opts: SearchOptions,
    pub marker: Option<String>,
    pub limit: Option<u32>,
    pub sort: SortSpec,
    /// Legacy tables are re-sorted locally when no ordering was requested.
    pub client_side_sort: bool,
}

impl ListQuery {
    pub fn with_search(search_opts: SearchOptions) -> Self {
        Self {
            search_opts,
            ..Self::default()
        }
    }

    /// Full query string parameters, sorted by key.
    pub fn query_pairs(&self, allowed_sort_keys: &[&str]) -> Result<Vec<(String, String)>> {
        let mut pairs = self.search_opts.query_pairs();
        if let Some(marker) = self.marker.as_deref().filter(|m| !m.is_empty()) {
            pairs.push(("marker".to_string(), marker.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs.extend(self.sort.query_pairs(allowed_sort_keys)?);
        pairs.sort();
        Ok(pairs)
    }
}

pub struct QueryParameterResolver {
    generation: ClientGeneration,
    env_all_tenants: Option<String>,
    sort_keys: Option<&'static [&'static str]>,
}

impl QueryParameterResolver {
    pub fn new(generation: ClientGeneration) -> Self {
        Self {
            generation,
            env_all_tenants: None,
            sort_keys: None,
        }
    }

    /// Sort keys accepted by the listed resource; checked during `resolve`.
    pub fn with_sort_keys(mut self, keys: &'static [&'static str]) -> Self {
        self.sort_keys = Some(keys);
        self
    }

    pub fn with_env_all_tenants(mut self, value: Option<String>) -> Self {
        self.env_all_tenants = value;
        self
    }

    pub fn generation(&self) -> ClientGeneration {
        self.generation
    }

    pub fn resolve(&self, args: &ListArgs) -> Result<ListQuery> {
        let sort = Self::resolve_sort(args)?;
        if let Some(keys) = self.sort_keys {
            sort.query_pairs(keys)?;
        }
        let (all_tenants, project_id) = self.resolve_tenancy(args)?;

        let client_side_sort =
            self.generation == ClientGeneration::Legacy && sort.is_server_default();

        Ok(ListQuery {
            search_opts: SearchOptions {
                all_tenants,
                project_id,
                name: args.name.clone(),
                description: args.description.clone(),
                status: args.status.clone(),
            },
            marker: args.marker.clone(),
            limit: args.limit,
            sort,
            client_side_sort,
        })
    }

    /// Empty sort values count as not supplied.
    fn resolve_sort(args: &ListArgs) -> Result<SortSpec> {
        let given = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        match (given(&args.sort), given(&args.sort_key), given(&args.sort_dir)) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err(KarborError::command(SORT_CONFLICT_MESSAGE))
            }
            (Some(sort), None, None) => Ok(SortSpec::Unified(sort)),
            (None, None, None) => Ok(SortSpec::ServerDefault),
            (None, key, dir) => Ok(SortSpec::Legacy { key, dir }),
        }
    }

    fn resolve_tenancy(&self, args: &ListArgs) -> Result<(AllTenants, Option<String>)> {
        let tenant = args.tenant.as_deref().filter(|t| !t.is_empty());

        match self.generation {
            ClientGeneration::Legacy => {
                if let Some(tenant) = tenant {
                    return Ok((AllTenants::Count(1), Some(tenant.to_string())));
                }
                let parsed = args
                    .all_tenants
                    .unwrap_or(if args.all_projects { 1 } else { 0 });
                let count = match self.env_all_tenants {
                    Some(ref raw) => raw.trim().parse::<i64>().map_err(|_| {
                        KarborError::command(format!(
                            "Invalid {} value: '{}'. Expected an integer",
                            ALL_TENANTS_ENV, raw
                        ))
                    })?,
                    None => parsed,
                };
                Ok((AllTenants::Count(count), None))
            }
            ClientGeneration::Plugin => {
                let flag = tenant.is_some()
                    || args.all_projects
                    || args.all_tenants.map(|n| n != 0).unwrap_or(false);
                Ok((AllTenants::Flag(flag), tenant.map(str::to_string)))
            }
        }
    }
}
