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

use crate::domain::config::ClientConf;
use crate::domain::models::{Plan, PlanCreate, PlanPatch, Restore, RestoreCreate};
use crate::domain::query::ListQuery;
use crate::infrastructure::constants::{
    AUTH_TOKEN_HEADER, PLANS_PATH, PLAN_SORT_KEYS, RESTORES_PATH, RESTORE_SORT_KEYS, USER_AGENT,
};
use crate::shared::error::KarborError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[async_trait::async_trait]
pub trait DataProtectionClient: Send + Sync {
    async fn list_plans(&self, query: &ListQuery) -> Result<Vec<Plan>, KarborError>;

    async fn get_plan(&self, id: &str) -> Result<Plan, KarborError>;

    async fn create_plan(&self, plan: &PlanCreate) -> Result<Plan, KarborError>;

    async fn update_plan(&self, id: &str, patch: &PlanPatch) -> Result<Plan, KarborError>;

    async fn delete_plan(&self, id: &str) -> Result<(), KarborError>;

    async fn list_restores(&self, query: &ListQuery) -> Result<Vec<Restore>, KarborError>;

    async fn get_restore(&self, id: &str) -> Result<Restore, KarborError>;

    async fn create_restore(&self, restore: &RestoreCreate) -> Result<Restore, KarborError>;

    async fn delete_restore(&self, id: &str) -> Result<(), KarborError>;
}

#[derive(Serialize, Deserialize)]
struct PlanEnvelope<T> {
    plan: T,
}

#[derive(Deserialize)]
struct PlansEnvelope {
    plans: Vec<Plan>,
}

#[derive(Serialize, Deserialize)]
struct RestoreEnvelope<T> {
    restore: T,
}

#[derive(Deserialize)]
struct RestoresEnvelope {
    restores: Vec<Restore>,
}

pub struct DataProtectionClientImpl {
    client: Client,
    base_url: String,
}

impl DataProtectionClientImpl {
    pub fn new(conf: &ClientConf) -> Result<Self, KarborError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = conf.auth_token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|e| KarborError::config_error(format!("Invalid auth token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTH_TOKEN_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(conf.timeout_secs))
            .danger_accept_invalid_certs(conf.insecure)
            .build()
            .map_err(|e| KarborError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: conf.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    pub(crate) fn member_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        resource_type: &str,
        id: &str,
    ) -> Result<reqwest::Response, KarborError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", resource_type, id, status);

        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND {
            Err(KarborError::not_found(resource_type, id))
        } else {
            let message = response.text().await?;
            Err(KarborError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource_type: &str,
        id: &str,
    ) -> Result<T, KarborError> {
        let response = self.send(request, resource_type, id).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl DataProtectionClient for DataProtectionClientImpl {
    async fn list_plans(&self, query: &ListQuery) -> Result<Vec<Plan>, KarborError> {
        let pairs = query.query_pairs(PLAN_SORT_KEYS)?;
        let request = self.client.get(self.collection_url(PLANS_PATH)).query(&pairs);
        let envelope: PlansEnvelope = self.send_json(request, "plan", PLANS_PATH).await?;
        Ok(envelope.plans)
    }

    async fn get_plan(&self, id: &str) -> Result<Plan, KarborError> {
        let request = self.client.get(self.member_url(PLANS_PATH, id));
        let envelope: PlanEnvelope<Plan> = self.send_json(request, "plan", id).await?;
        Ok(envelope.plan)
    }

    async fn create_plan(&self, plan: &PlanCreate) -> Result<Plan, KarborError> {
        let request = self
            .client
            .post(self.collection_url(PLANS_PATH))
            .json(&PlanEnvelope { plan });
        let envelope: PlanEnvelope<Plan> = self.send_json(request, "plan", &plan.name).await?;
        Ok(envelope.plan)
    }

    async fn update_plan(&self, id: &str, patch: &PlanPatch) -> Result<Plan, KarborError> {
        let request = self
            .client
            .put(self.member_url(PLANS_PATH, id))
            .json(&PlanEnvelope { plan: patch });
        let envelope: PlanEnvelope<Plan> = self.send_json(request, "plan", id).await?;
        Ok(envelope.plan)
    }

    async fn delete_plan(&self, id: &str) -> Result<(), KarborError> {
        let request = self.client.delete(self.member_url(PLANS_PATH, id));
        self.send(request, "plan", id).await?;
        Ok(())
    }

    async fn list_restores(&self, query: &ListQuery) -> Result<Vec<Restore>, KarborError> {
        let pairs = query.query_pairs(RESTORE_SORT_KEYS)?;
        let request = self
            .client
            .get(self.collection_url(RESTORES_PATH))
            .query(&pairs);
        let envelope: RestoresEnvelope = self.send_json(request, "restore", RESTORES_PATH).await?;
        Ok(envelope.restores)
    }

    async fn get_restore(&self, id: &str) -> Result<Restore, KarborError> {
        let request = self.client.get(self.member_url(RESTORES_PATH, id));
        let envelope: RestoreEnvelope<Restore> = self.send_json(request, "restore", id).await?;
        Ok(envelope.restore)
    }

    async fn create_restore(&self, restore: &RestoreCreate) -> Result<Restore, KarborError> {
        let request = self
            .client
            .post(self.collection_url(RESTORES_PATH))
            .json(&RestoreEnvelope { restore });
        let envelope: RestoreEnvelope<Restore> = self
            .send_json(request, "restore", &restore.checkpoint_id)
            .await?;
        Ok(envelope.restore)
    }

    async fn delete_restore(&self, id: &str) -> Result<(), KarborError> {
        let request = self.client.delete(self.member_url(RESTORES_PATH, id));
        self.send(request, "restore", id).await?;
        Ok(())
    }
}
