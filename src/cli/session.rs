//! Per-invocation client session

use super::commands::GlobalArgs;
use super::display::{OutputFormat, Printer};
use crate::domain::config::{ClientConf, ClientGeneration, ConfOverrides};
use crate::domain::ops::ResourceKind;
use crate::domain::query::QueryParameterResolver;
use crate::infrastructure::constants::ALL_TENANTS_ENV;
use crate::infrastructure::rest::{DataProtectionClient, DataProtectionClientImpl};

/// Everything a command needs for its single remote call
pub struct Session {
    client: Box<dyn DataProtectionClient>,
    conf: ClientConf,
    printer: Printer,
    env_all_tenants: Option<String>,
}

impl Session {
    pub fn new(client: Box<dyn DataProtectionClient>, conf: ClientConf, format: OutputFormat) -> Self {
        Self {
            client,
            conf,
            printer: Printer::new(format),
            env_all_tenants: None,
        }
    }

    /// Build the configuration and REST client from global flags and the
    /// process environment.
    pub fn from_args(global: &GlobalArgs) -> anyhow::Result<Self> {
        let overrides = ConfOverrides {
            endpoint: global.endpoint.clone(),
            auth_token: global.auth_token.clone(),
            generation: global.client_generation,
        };
        let conf = ClientConf::load(global.config_file.as_deref(), &overrides)?;
        tracing::debug!(
            "endpoint={} generation={}",
            conf.endpoint,
            conf.generation.as_str()
        );

        let client = DataProtectionClientImpl::new(&conf)
            .map_err(|e| anyhow::anyhow!("Failed to create data protection client: {}", e))?;

        Ok(Self::new(Box::new(client), conf, global.format)
            .with_env_all_tenants(std::env::var(ALL_TENANTS_ENV).ok()))
    }

    pub fn with_env_all_tenants(mut self, value: Option<String>) -> Self {
        self.env_all_tenants = value;
        self
    }

    pub fn client(&self) -> &dyn DataProtectionClient {
        self.client.as_ref()
    }

    pub fn conf(&self) -> &ClientConf {
        &self.conf
    }

    pub fn generation(&self) -> ClientGeneration {
        self.conf.generation
    }

    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    pub fn resolver(&self, kind: ResourceKind) -> QueryParameterResolver {
        QueryParameterResolver::new(self.generation())
            .with_env_all_tenants(self.env_all_tenants.clone())
            .with_sort_keys(kind.sort_keys())
    }
}
