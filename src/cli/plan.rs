//! Plan commands

use super::commands::ListFilterArgs;
use super::session::Session;
use crate::domain::models::{PlanCreate, PlanPatch};
use crate::domain::ops::{delete_resources, find_plan, ResourceKind};
use crate::domain::params::{extract_json_object, extract_resources, require_uuid};
use crate::infrastructure::constants::PLAN_DEFAULT_SORT_COLUMN;
use crate::shared::error::KarborError;
use clap::Parser;
use serde_json::Map;
use std::io::Write;

#[derive(Parser, Debug, Clone, Default)]
pub struct PlanListCommand {
    /// Filter results by plan name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter results by plan description
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub filters: ListFilterArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanCreateCommand {
    /// The name of the plan
    pub name: String,

    /// The UUID of the provider
    pub provider_id: String,

    /// Resources to protect, as id=type[,id=type,...]
    pub resources: String,

    /// The description of the plan
    #[arg(long)]
    pub description: Option<String>,

    /// Plan parameters as a JSON object keyed by resource type
    #[arg(long)]
    pub parameters_json: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanShowCommand {
    /// ID or name of the plan
    pub plan: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanDeleteCommand {
    /// ID or name of the plan(s) to delete
    #[arg(required = true)]
    pub plans: Vec<String>,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct PlanUpdateCommand {
    /// ID of the plan
    pub plan_id: String,

    /// New name for the plan
    #[arg(long)]
    pub name: Option<String>,

    /// Replacement resources, as id=type[,id=type,...]
    #[arg(long)]
    pub resources: Option<String>,

    /// New status for the plan (e.g. started, suspended)
    #[arg(long)]
    pub status: Option<String>,
}

impl PlanListCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let args = self
            .filters
            .to_list_args(self.name.clone(), self.description.clone());
        let query = session.resolver(ResourceKind::Plan).resolve(&args)?;
        tracing::debug!("plan-list query: {:?}", query);

        let plans = session.client().list_plans(&query).await?;

        let sort_column = query.client_side_sort.then_some(PLAN_DEFAULT_SORT_COLUMN);
        writeln!(out, "{}", session.printer().list(&plans, sort_column)?)?;
        Ok(())
    }
}

impl PlanCreateCommand {
    pub fn to_request(&self) -> Result<PlanCreate, KarborError> {
        require_uuid(&self.provider_id, "provider id")?;
        let resources = extract_resources(&self.resources)?;
        let parameters = match self.parameters_json {
            Some(ref raw) => extract_json_object(raw)?,
            None => Map::new(),
        };

        Ok(PlanCreate {
            name: self.name.clone(),
            provider_id: self.provider_id.clone(),
            resources,
            parameters,
            description: self.description.clone(),
        })
    }

    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let request = self.to_request()?;
        tracing::debug!("plan-create request: {:?}", request);

        let plan = session.client().create_plan(&request).await?;
        writeln!(out, "{}", session.printer().record(&plan)?)?;
        Ok(())
    }
}

impl PlanShowCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let plan = find_plan(session.client(), &self.plan).await?;
        writeln!(out, "{}", session.printer().record(&plan)?)?;
        Ok(())
    }
}

impl PlanDeleteCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let report = delete_resources(session.client(), ResourceKind::Plan, &self.plans, out).await?;
        tracing::debug!(
            "plan-delete: {} of {} deleted",
            report.deleted.len(),
            report.requested()
        );
        Ok(())
    }
}

impl PlanUpdateCommand {
    /// Only explicitly supplied fields end up in the patch.
    pub fn to_patch(&self) -> Result<PlanPatch, KarborError> {
        let resources = match self.resources {
            Some(ref raw) => Some(extract_resources(raw)?),
            None => None,
        };

        Ok(PlanPatch {
            name: self.name.clone(),
            resources,
            status: self.status.clone(),
        })
    }

    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let patch = self.to_patch()?;
        tracing::debug!("plan-update {} patch: {:?}", self.plan_id, patch);

        let not_found = |e: KarborError| {
            if e.is_not_found() {
                KarborError::command(format!("Plan {} not found", self.plan_id))
            } else {
                e
            }
        };

        session
            .client()
            .get_plan(&self.plan_id)
            .await
            .map_err(not_found)?;
        let plan = session
            .client()
            .update_plan(&self.plan_id, &patch)
            .await
            .map_err(not_found)?;

        writeln!(out, "{}", session.printer().record(&plan)?)?;
        Ok(())
    }
}
