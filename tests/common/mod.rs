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

//! In-memory data protection service shared by the integration tests

#![allow(dead_code)]

use karbor_cli::cli::display::OutputFormat;
use karbor_cli::cli::Session;
use karbor_cli::*;
use std::sync::{Arc, Mutex};

pub const PROVIDER_ID: &str = "cf56bd3e-97a7-4078-b6d5-f36246333fd9";
pub const CHECKPOINT_ID: &str = "204c825e-eb2f-4609-95ab-70b3caa43ac8";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPlans(ListQuery),
    GetPlan(String),
    CreatePlan(PlanCreate),
    UpdatePlan(String, PlanPatch),
    DeletePlan(String),
    ListRestores(ListQuery),
    GetRestore(String),
    CreateRestore(RestoreCreate),
    DeleteRestore(String),
}

#[derive(Default)]
struct State {
    plans: Vec<Plan>,
    restores: Vec<Restore>,
    calls: Vec<Call>,
}

/// Cloneable handle; clones share state so tests can inspect calls after
/// handing one clone to a `Session`.
#[derive(Clone, Default)]
pub struct FakeClient {
    state: Arc<Mutex<State>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plans(self, plans: Vec<Plan>) -> Self {
        self.state.lock().unwrap().plans = plans;
        self
    }

    pub fn with_restores(self, restores: Vec<Restore>) -> Self {
        self.state.lock().unwrap().restores = restores;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn plan_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .plans
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    pub fn session(&self, generation: ClientGeneration) -> Session {
        self.session_with(generation, OutputFormat::Table, None)
    }

    pub fn session_with(
        &self,
        generation: ClientGeneration,
        format: OutputFormat,
        env_all_tenants: Option<&str>,
    ) -> Session {
        let conf = ClientConf {
            generation,
            ..ClientConf::default()
        };
        Session::new(Box::new(self.clone()), conf, format)
            .with_env_all_tenants(env_all_tenants.map(str::to_string))
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

pub fn plan(id: &str, name: &str, status: &str) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(String::new()),
        provider_id: PROVIDER_ID.to_string(),
        status: status.to_string(),
        ..Plan::default()
    }
}

pub fn restore(id: &str, status: &str) -> Restore {
    Restore {
        id: id.to_string(),
        project_id: Some("proj-a".to_string()),
        provider_id: PROVIDER_ID.to_string(),
        checkpoint_id: CHECKPOINT_ID.to_string(),
        restore_target: Some("http://192.168.1.2/identity/".to_string()),
        status: Some(status.to_string()),
        ..Restore::default()
    }
}

#[async_trait::async_trait]
impl DataProtectionClient for FakeClient {
    async fn list_plans(&self, query: &ListQuery) -> std::result::Result<Vec<Plan>, KarborError> {
        self.record(Call::ListPlans(query.clone()));
        let state = self.state.lock().unwrap();
        Ok(state
            .plans
            .iter()
            .filter(|p| match query.search_opts.name {
                Some(ref name) => &p.name == name,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn get_plan(&self, id: &str) -> std::result::Result<Plan, KarborError> {
        self.record(Call::GetPlan(id.to_string()));
        let state = self.state.lock().unwrap();
        state
            .plans
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| KarborError::not_found("plan", id))
    }

    async fn create_plan(&self, plan: &PlanCreate) -> std::result::Result<Plan, KarborError> {
        self.record(Call::CreatePlan(plan.clone()));
        let created = Plan {
            id: "new-plan".to_string(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            provider_id: plan.provider_id.clone(),
            status: "suspended".to_string(),
            resources: plan.resources.clone(),
            parameters: plan.parameters.clone(),
            project_id: None,
        };
        self.state.lock().unwrap().plans.push(created.clone());
        Ok(created)
    }

    async fn update_plan(
        &self,
        id: &str,
        patch: &PlanPatch,
    ) -> std::result::Result<Plan, KarborError> {
        self.record(Call::UpdatePlan(id.to_string(), patch.clone()));
        let mut state = self.state.lock().unwrap();
        let plan = state
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| KarborError::not_found("plan", id))?;
        if let Some(ref name) = patch.name {
            plan.name = name.clone();
        }
        if let Some(ref resources) = patch.resources {
            plan.resources = resources.clone();
        }
        if let Some(ref status) = patch.status {
            plan.status = status.clone();
        }
        Ok(plan.clone())
    }

    async fn delete_plan(&self, id: &str) -> std::result::Result<(), KarborError> {
        self.record(Call::DeletePlan(id.to_string()));
        let mut state = self.state.lock().unwrap();
        let before = state.plans.len();
        state.plans.retain(|p| p.id != id);
        if state.plans.len() == before {
            return Err(KarborError::not_found("plan", id));
        }
        Ok(())
    }

    async fn list_restores(
        &self,
        query: &ListQuery,
    ) -> std::result::Result<Vec<Restore>, KarborError> {
        self.record(Call::ListRestores(query.clone()));
        Ok(self.state.lock().unwrap().restores.clone())
    }

    async fn get_restore(&self, id: &str) -> std::result::Result<Restore, KarborError> {
        self.record(Call::GetRestore(id.to_string()));
        let state = self.state.lock().unwrap();
        state
            .restores
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| KarborError::not_found("restore", id))
    }

    async fn create_restore(
        &self,
        restore: &RestoreCreate,
    ) -> std::result::Result<Restore, KarborError> {
        self.record(Call::CreateRestore(restore.clone()));
        Ok(Restore {
            id: "new-restore".to_string(),
            provider_id: restore.provider_id.clone(),
            checkpoint_id: restore.checkpoint_id.clone(),
            restore_target: restore.restore_target.clone(),
            status: Some("in_progress".to_string()),
            ..Restore::default()
        })
    }

    async fn delete_restore(&self, id: &str) -> std::result::Result<(), KarborError> {
        self.record(Call::DeleteRestore(id.to_string()));
        let mut state = self.state.lock().unwrap();
        let before = state.restores.len();
        state.restores.retain(|r| r.id != id);
        if state.restores.len() == before {
            return Err(KarborError::not_found("restore", id));
        }
        Ok(())
    }
}
