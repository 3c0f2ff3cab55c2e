// CLI command definitions

use super::display::OutputFormat;
use super::plan::{
    PlanCreateCommand, PlanDeleteCommand, PlanListCommand, PlanShowCommand, PlanUpdateCommand,
};
use super::restore::{
    RestoreCreateCommand, RestoreDeleteCommand, RestoreListCommand, RestoreShowCommand,
};
use crate::domain::config::ClientGeneration;
use crate::domain::query::ListArgs;
use crate::infrastructure::constants::{
    AUTH_TOKEN_ENV, CLIENT_GENERATION_ENV, CONF_FILE_ENV, ENDPOINT_ENV,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "karbor",
    version,
    about = "Command-line client for the data protection service",
    long_about = "Manage protection plans and restores through the data protection REST API"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Client configuration file (TOML)
    #[arg(long, global = true, env = CONF_FILE_ENV)]
    pub config_file: Option<String>,

    /// Data protection API endpoint, including the project segment
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// Authentication token sent as X-Auth-Token
    #[arg(long, global = true, env = AUTH_TOKEN_ENV, hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Which client generation's list defaulting rules apply
    #[arg(long, global = true, env = CLIENT_GENERATION_ENV, value_enum)]
    pub client_generation: Option<ClientGeneration>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the plans
    PlanList(PlanListCommand),

    /// Create a plan
    PlanCreate(PlanCreateCommand),

    /// Show plan details
    PlanShow(PlanShowCommand),

    /// Delete plans
    PlanDelete(PlanDeleteCommand),

    /// Update a plan
    PlanUpdate(PlanUpdateCommand),

    /// Create a restore from a checkpoint
    RestoreCreate(RestoreCreateCommand),

    /// List the restores
    RestoreList(RestoreListCommand),

    /// Show restore details
    RestoreShow(RestoreShowCommand),

    /// Delete restores
    RestoreDelete(RestoreDeleteCommand),
}

/// Filter, paging and sort flags shared by the list commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListFilterArgs {
    /// Filter results by a tenant (admin only)
    #[arg(long, value_name = "TENANT")]
    pub tenant: Option<String>,

    /// Shows details for all tenants (admin only)
    #[arg(
        long = "all-tenants",
        alias = "all_tenants",
        num_args = 0..=1,
        default_missing_value = "1",
        value_name = "0|1"
    )]
    pub all_tenants: Option<i64>,

    /// Include all projects (admin only)
    #[arg(long)]
    pub all_projects: bool,

    /// Filter results by status
    #[arg(long)]
    pub status: Option<String>,

    /// Begin returning results after this ID
    #[arg(long)]
    pub marker: Option<String>,

    /// Maximum number of results to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Comma-separated list of sort keys and directions (asc or desc)
    #[arg(long, value_name = "<key>[:<direction>]")]
    pub sort: Option<String>,

    #[arg(long = "sort_key", hide = true)]
    pub sort_key: Option<String>,

    #[arg(long = "sort_dir", hide = true)]
    pub sort_dir: Option<String>,
}

impl ListFilterArgs {
    pub fn to_list_args(&self, name: Option<String>, description: Option<String>) -> ListArgs {
        ListArgs {
            tenant: self.tenant.clone(),
            all_tenants: self.all_tenants,
            all_projects: self.all_projects,
            name,
            description,
            status: self.status.clone(),
            marker: self.marker.clone(),
            limit: self.limit,
            sort: self.sort.clone(),
            sort_key: self.sort_key.clone(),
            sort_dir: self.sort_dir.clone(),
        }
    }
}
