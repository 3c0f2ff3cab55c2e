//! Restore commands

use super::commands::ListFilterArgs;
use super::session::Session;
use crate::domain::models::RestoreCreate;
use crate::domain::ops::{delete_resources, find_restore, ResourceKind};
use crate::domain::params::{extract_parameters, require_uuid};
use crate::infrastructure::constants::RESTORE_DEFAULT_SORT_COLUMN;
use crate::shared::error::KarborError;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug, Clone)]
pub struct RestoreCreateCommand {
    /// The UUID of the provider
    pub provider_id: String,

    /// The UUID of the checkpoint to restore from
    pub checkpoint_id: String,

    /// The target of the restore operation
    pub restore_target: String,

    /// Restore parameters as key=value pairs; a bare key unsets it
    #[arg(long, num_args = 0.., value_name = "KEY=VALUE")]
    pub parameters: Option<Vec<String>>,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct RestoreListCommand {
    #[command(flatten)]
    pub filters: ListFilterArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct RestoreShowCommand {
    /// ID of the restore
    pub restore: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RestoreDeleteCommand {
    /// ID of the restore(s) to delete
    #[arg(required = true)]
    pub restores: Vec<String>,
}

impl RestoreCreateCommand {
    /// Checks run in order and all of them before any remote call.
    pub fn to_request(&self) -> Result<RestoreCreate, KarborError> {
        require_uuid(&self.provider_id, "provider id")?;
        require_uuid(&self.checkpoint_id, "checkpoint id")?;

        // Message names checkpoint_id although the check is on --parameters.
        let parameters = match self.parameters {
            Some(ref tokens) => extract_parameters(tokens),
            None => return Err(KarborError::command("checkpoint_id must be provided.")),
        };

        Ok(RestoreCreate {
            provider_id: self.provider_id.clone(),
            checkpoint_id: self.checkpoint_id.clone(),
            restore_target: Some(self.restore_target.clone()),
            parameters,
        })
    }

    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let request = self.to_request()?;
        tracing::debug!("restore-create request: {:?}", request);

        let restore = session.client().create_restore(&request).await?;
        writeln!(out, "{}", session.printer().record(&restore)?)?;
        Ok(())
    }
}

impl RestoreListCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let args = self.filters.to_list_args(None, None);
        let query = session.resolver(ResourceKind::Restore).resolve(&args)?;
        tracing::debug!("restore-list query: {:?}", query);

        let restores = session.client().list_restores(&query).await?;

        let sort_column = query
            .client_side_sort
            .then_some(RESTORE_DEFAULT_SORT_COLUMN);
        writeln!(out, "{}", session.printer().list(&restores, sort_column)?)?;
        Ok(())
    }
}

impl RestoreShowCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        let restore = find_restore(session.client(), &self.restore).await?;
        writeln!(out, "{}", session.printer().record(&restore)?)?;
        Ok(())
    }
}

impl RestoreDeleteCommand {
    pub async fn execute(&self, session: &Session, out: &mut dyn Write) -> anyhow::Result<()> {
        delete_resources(session.client(), ResourceKind::Restore, &self.restores, out).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVIDER: &str = "cf56bd3e-97a7-4078-b6d5-f36246333fd9";
    const CHECKPOINT: &str = "204c825e-eb2f-4609-95ab-70b3caa43ac8";

    fn command(provider: &str, checkpoint: &str, parameters: Option<Vec<&str>>) -> RestoreCreateCommand {
        RestoreCreateCommand {
            provider_id: provider.to_string(),
            checkpoint_id: checkpoint.to_string(),
            restore_target: "http://192.168.1.2/identity/".to_string(),
            parameters: parameters.map(|p| p.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_invalid_provider_checked_first() {
        let err = command("bad", "also-bad", None).to_request().unwrap_err();
        assert_eq!(err.to_string(), "Invalid provider id provided.");
    }

    #[test]
    fn test_invalid_checkpoint() {
        let err = command(PROVIDER, "bad", Some(vec!["k=v"]))
            .to_request()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid checkpoint id provided.");
    }

    #[test]
    fn test_missing_parameters_message() {
        let err = command(PROVIDER, CHECKPOINT, None).to_request().unwrap_err();
        assert_eq!(err.to_string(), "checkpoint_id must be provided.");
    }

    #[test]
    fn test_empty_parameters_accepted() {
        let request = command(PROVIDER, CHECKPOINT, Some(vec![]))
            .to_request()
            .unwrap();
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn test_parameters_with_unset_key() {
        let request = command(PROVIDER, CHECKPOINT, Some(vec!["k1=v1", "k2"]))
            .to_request()
            .unwrap();
        assert_eq!(request.parameters.get("k1"), Some(&Some("v1".to_string())));
        assert_eq!(request.parameters.get("k2"), Some(&None));
    }
}
