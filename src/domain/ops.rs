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

//! Lookup and batch operations shared by the plan and restore commands

use crate::domain::models::{Plan, Restore};
use crate::domain::query::{ListQuery, SearchOptions};
use crate::infrastructure::constants::{PLAN_SORT_KEYS, RESTORE_SORT_KEYS};
use crate::infrastructure::rest::DataProtectionClient;
use crate::shared::error::{KarborError, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Plan,
    Restore,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Plan => "plan",
            ResourceKind::Restore => "restore",
        }
    }

    pub fn sort_keys(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Plan => PLAN_SORT_KEYS,
            ResourceKind::Restore => RESTORE_SORT_KEYS,
        }
    }
}

/// Per-item result of a delete in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub not_found: Vec<String>,
}

impl DeleteReport {
    pub fn requested(&self) -> usize {
        self.deleted.len() + self.not_found.len()
    }

    /// Fails only when every requested identifier was missing.
    pub fn into_result(self, kind: ResourceKind) -> Result<Self> {
        if !self.not_found.is_empty() && self.deleted.is_empty() {
            return Err(KarborError::command(format!(
                "Unable to find and delete any of the specified {}s.",
                kind.as_str()
            )));
        }
        Ok(self)
    }
}

/// Resolve a plan by ID, falling back to an exact name match.
pub async fn find_plan(client: &dyn DataProtectionClient, name_or_id: &str) -> Result<Plan> {
    match client.get_plan(name_or_id).await {
        Ok(plan) => return Ok(plan),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    let query = ListQuery::with_search(SearchOptions::by_name(name_or_id));
    let mut matches: Vec<Plan> = client
        .list_plans(&query)
        .await?
        .into_iter()
        .filter(|plan| plan.name == name_or_id)
        .collect();

    match matches.len() {
        0 => Err(KarborError::not_found("plan", name_or_id)),
        1 => Ok(matches.remove(0)),
        _ => Err(KarborError::no_unique_match("plan", name_or_id)),
    }
}

/// Restores carry no name, so lookup is by ID only.
pub async fn find_restore(client: &dyn DataProtectionClient, id: &str) -> Result<Restore> {
    client.get_restore(id).await
}

async fn delete_one(
    client: &dyn DataProtectionClient,
    kind: ResourceKind,
    name_or_id: &str,
) -> Result<DeleteOutcome> {
    let resolved = match kind {
        ResourceKind::Plan => find_plan(client, name_or_id).await.map(|p| p.id),
        ResourceKind::Restore => find_restore(client, name_or_id).await.map(|r| r.id),
    };
    let id = match resolved {
        Ok(id) => id,
        Err(e) if e.is_not_found() => return Ok(DeleteOutcome::NotFound),
        Err(e) => return Err(e),
    };

    let deleted = match kind {
        ResourceKind::Plan => client.delete_plan(&id).await,
        ResourceKind::Restore => client.delete_restore(&id).await,
    };
    match deleted {
        Ok(()) => Ok(DeleteOutcome::Deleted(id)),
        Err(e) if e.is_not_found() => Ok(DeleteOutcome::NotFound),
        Err(e) => Err(e),
    }
}

/// Delete each identifier in turn. Missing items are reported on `out` and
/// skipped; any other error aborts the batch.
pub async fn delete_resources(
    client: &dyn DataProtectionClient,
    kind: ResourceKind,
    names_or_ids: &[String],
    out: &mut dyn Write,
) -> Result<DeleteReport> {
    let mut report = DeleteReport::default();

    for name_or_id in names_or_ids {
        match delete_one(client, kind, name_or_id).await? {
            DeleteOutcome::Deleted(id) => {
                tracing::debug!("deleted {} {}", kind.as_str(), id);
                report.deleted.push(id);
            }
            DeleteOutcome::NotFound => {
                tracing::warn!("{} {} not found", kind.as_str(), name_or_id);
                writeln!(
                    out,
                    "Failed to delete '{}'; {} not found",
                    name_or_id,
                    kind.as_str()
                )?;
                report.not_found.push(name_or_id.clone());
            }
        }
    }

    report.into_result(kind)
}
