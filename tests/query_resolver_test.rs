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

use karbor_cli::domain::query::SORT_CONFLICT_MESSAGE;
use karbor_cli::infrastructure::constants::{PLAN_SORT_KEYS, RESTORE_SORT_KEYS};
use karbor_cli::*;

const TENANTS: [Option<&str>; 3] = [None, Some(""), Some("proj-b")];
const ALL_TENANTS: [Option<i64>; 4] = [None, Some(0), Some(1), Some(2)];
const ENV_VALUES: [Option<&str>; 3] = [None, Some("0"), Some("1")];

fn text(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[test]
fn test_legacy_tenancy_combinations() {
    for tenant in TENANTS {
        for all_tenants in ALL_TENANTS {
            for all_projects in [false, true] {
                for env in ENV_VALUES {
                    let args = ListArgs {
                        tenant: text(tenant),
                        all_tenants,
                        all_projects,
                        ..ListArgs::default()
                    };
                    let query = QueryParameterResolver::new(ClientGeneration::Legacy)
                        .with_env_all_tenants(text(env))
                        .resolve(&args)
                        .unwrap();

                    let expected = match (tenant.filter(|t| !t.is_empty()), env) {
                        (Some(_), _) => 1,
                        (None, Some(raw)) => raw.parse::<i64>().unwrap(),
                        (None, None) => all_tenants.unwrap_or(i64::from(all_projects)),
                    };
                    assert_eq!(
                        query.search_opts.all_tenants,
                        AllTenants::Count(expected),
                        "tenant={:?} all_tenants={:?} all_projects={} env={:?}",
                        tenant,
                        all_tenants,
                        all_projects,
                        env
                    );
                    assert_eq!(
                        query.search_opts.project_id.as_deref(),
                        tenant.filter(|t| !t.is_empty())
                    );
                }
            }
        }
    }
}

#[test]
fn test_plugin_tenancy_combinations() {
    for tenant in TENANTS {
        for all_tenants in ALL_TENANTS {
            for all_projects in [false, true] {
                for env in ENV_VALUES {
                    let args = ListArgs {
                        tenant: text(tenant),
                        all_tenants,
                        all_projects,
                        ..ListArgs::default()
                    };
                    let query = QueryParameterResolver::new(ClientGeneration::Plugin)
                        .with_env_all_tenants(text(env))
                        .resolve(&args)
                        .unwrap();

                    let tenant = tenant.filter(|t| !t.is_empty());
                    let expected = tenant.is_some()
                        || all_projects
                        || all_tenants.map(|n| n != 0).unwrap_or(false);
                    assert_eq!(query.search_opts.all_tenants, AllTenants::Flag(expected));
                    assert_eq!(query.search_opts.project_id.as_deref(), tenant);
                    assert!(!query.client_side_sort);
                }
            }
        }
    }
}

#[test]
fn test_sort_conflict_for_every_generation() {
    let keys = [None, Some("name")];
    let dirs = [None, Some("desc")];

    for generation in [ClientGeneration::Legacy, ClientGeneration::Plugin] {
        for sort in [None, Some("name:asc")] {
            for sort_key in keys {
                for sort_dir in dirs {
                    let args = ListArgs {
                        sort: text(sort),
                        sort_key: text(sort_key),
                        sort_dir: text(sort_dir),
                        ..ListArgs::default()
                    };
                    let result = QueryParameterResolver::new(generation).resolve(&args);
                    let conflict = sort.is_some() && (sort_key.is_some() || sort_dir.is_some());

                    match result {
                        Err(err) => {
                            assert!(conflict, "unexpected error: {}", err);
                            assert_eq!(err.to_string(), SORT_CONFLICT_MESSAGE);
                        }
                        Ok(query) => {
                            assert!(!conflict);
                            let ordered = sort.is_some() || sort_key.is_some() || sort_dir.is_some();
                            assert_eq!(
                                query.client_side_sort,
                                generation == ClientGeneration::Legacy && !ordered
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_wire_parameters_for_legacy_sort_flags() {
    let args = ListArgs {
        sort_key: Some("created_at".to_string()),
        sort_dir: Some("desc".to_string()),
        ..ListArgs::default()
    };
    let pairs = QueryParameterResolver::new(ClientGeneration::Legacy)
        .resolve(&args)
        .unwrap()
        .query_pairs(RESTORE_SORT_KEYS)
        .unwrap();
    assert_eq!(
        pairs,
        vec![
            ("sort_dir".to_string(), "desc".to_string()),
            ("sort_key".to_string(), "created_at".to_string()),
        ]
    );
}

#[test]
fn test_wire_parameters_reject_unknown_sort_key() {
    let args = ListArgs {
        sort: Some("name".to_string()),
        ..ListArgs::default()
    };
    let query = QueryParameterResolver::new(ClientGeneration::Plugin)
        .resolve(&args)
        .unwrap();

    assert!(query.query_pairs(PLAN_SORT_KEYS).is_ok());
    let err = query.query_pairs(RESTORE_SORT_KEYS).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("sort_key must be one of the following:"));
}

#[test]
fn test_empty_sort_values_count_as_unset() {
    let empty = Some(String::new());
    let cases = [
        (empty.clone(), Some("name".to_string()), None),
        (Some("name".to_string()), empty.clone(), empty.clone()),
        (empty.clone(), empty.clone(), empty.clone()),
    ];

    for (sort, sort_key, sort_dir) in cases {
        let args = ListArgs {
            sort: sort.clone(),
            sort_key: sort_key.clone(),
            sort_dir: sort_dir.clone(),
            ..ListArgs::default()
        };
        let query = QueryParameterResolver::new(ClientGeneration::Legacy)
            .with_sort_keys(PLAN_SORT_KEYS)
            .resolve(&args)
            .unwrap();
        let pairs = query.query_pairs(PLAN_SORT_KEYS).unwrap();
        assert!(pairs.iter().all(|(_, value)| !value.is_empty()));

        let ordered = [&sort, &sort_key, &sort_dir]
            .iter()
            .any(|v| v.as_deref().map(|s| !s.is_empty()).unwrap_or(false));
        assert_eq!(query.client_side_sort, !ordered);
    }

    let args = ListArgs {
        sort_key: Some(String::new()),
        ..ListArgs::default()
    };
    let query = QueryParameterResolver::new(ClientGeneration::Legacy)
        .resolve(&args)
        .unwrap();
    assert!(query.client_side_sort);
    assert!(query.query_pairs(PLAN_SORT_KEYS).unwrap().is_empty());
}
