// file: src/cli/commands.rs
// version: 1.4.0
// guid: 4d9a2c7e-8f1b-4e6a-b3c8-0d5f9a2e7c41

//! Command implementations for the CLI

use crate::cli::args::{AccountFieldArgs, OutputFormat};
use crate::config::GoogleCloudBuildAccount;
use crate::daemon::DaemonClient;
use crate::edit::{merge_overrides, EditOutcome, RecordEditor};
use crate::{ui, Result};
use tracing::{debug, info};

/// CI system name addressed by the `gcb` command tree
pub const GCB_CI_NAME: &str = "gcb";

/// Add a Google Cloud Build account
pub async fn add_account_command(
    client: &DaemonClient,
    deployment: &str,
    name: &str,
    fields: &AccountFieldArgs,
    no_validate: bool,
) -> Result<()> {
    info!("Adding Google Cloud Build account {}", name);

    let mut account = GoogleCloudBuildAccount::new(name);
    fields.apply(&mut account);

    match client
        .add_account(deployment, GCB_CI_NAME, !no_validate, &account)
        .await
    {
        Ok(()) => {
            ui::success(&format!("Added Google Cloud Build account {}.", name));
            Ok(())
        }
        Err(e) => {
            ui::failure(&format!("Failed to add Google Cloud Build account {}.", name));
            Err(e)
        }
    }
}

/// Edit a Google Cloud Build account
///
/// Fetches the current record, applies the supplied field overrides, and
/// submits the candidate only when the merge actually changed something.
pub async fn edit_account_command(
    client: &DaemonClient,
    deployment: &str,
    name: &str,
    fields: &AccountFieldArgs,
    no_validate: bool,
) -> Result<()> {
    info!("Editing Google Cloud Build account {}", name);

    // Fetch with validation off: an illegal stored config must stay editable.
    let current = match client
        .get_account(deployment, GCB_CI_NAME, name, false)
        .await
    {
        Ok(account) => account,
        Err(e) => {
            ui::failure(&format!("Failed to get Google Cloud Build account {}.", name));
            return Err(e);
        }
    };

    match merge_overrides(fields, &current)? {
        EditOutcome::Unchanged => {
            ui::failure("No changes supplied.");
            Ok(())
        }
        EditOutcome::Changed(candidate) => {
            debug!("Submitting edited account {}", name);
            match client
                .set_account(deployment, GCB_CI_NAME, name, !no_validate, &candidate)
                .await
            {
                Ok(()) => {
                    ui::success(&format!("Edited Google Cloud Build account {}.", name));
                    Ok(())
                }
                Err(e) => {
                    ui::failure(&format!(
                        "Failed to edit Google Cloud Build account {}.",
                        name
                    ));
                    Err(e)
                }
            }
        }
    }
}

/// Show a Google Cloud Build account
pub async fn get_account_command(
    client: &DaemonClient,
    deployment: &str,
    name: &str,
    output: OutputFormat,
    no_validate: bool,
) -> Result<()> {
    let account = match client
        .get_account(deployment, GCB_CI_NAME, name, !no_validate)
        .await
    {
        Ok(account) => account,
        Err(e) => {
            ui::failure(&format!("Failed to get Google Cloud Build account {}.", name));
            return Err(e);
        }
    };

    match output {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&account)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&account)?),
    }

    Ok(())
}

/// List Google Cloud Build accounts
pub async fn list_accounts_command(
    client: &DaemonClient,
    deployment: &str,
    json_output: bool,
) -> Result<()> {
    let accounts = match client.list_accounts(deployment, GCB_CI_NAME).await {
        Ok(accounts) => accounts,
        Err(e) => {
            ui::failure("Failed to list Google Cloud Build accounts.");
            return Err(e);
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    if accounts.is_empty() {
        info!("No Google Cloud Build accounts configured");
        return Ok(());
    }

    println!("{:<24} {:<24} {:<24}", "NAME", "PROJECT", "SUBSCRIPTION");
    for account in &accounts {
        println!(
            "{:<24} {:<24} {:<24}",
            account.name,
            account.project.as_deref().unwrap_or("-"),
            account.subscription_name.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

/// Delete a Google Cloud Build account
pub async fn delete_account_command(
    client: &DaemonClient,
    deployment: &str,
    name: &str,
    no_validate: bool,
) -> Result<()> {
    info!("Deleting Google Cloud Build account {}", name);

    match client
        .delete_account(deployment, GCB_CI_NAME, name, !no_validate)
        .await
    {
        Ok(()) => {
            ui::success(&format!("Deleted Google Cloud Build account {}.", name));
            Ok(())
        }
        Err(e) => {
            ui::failure(&format!(
                "Failed to delete Google Cloud Build account {}.",
                name
            ));
            Err(e)
        }
    }
}
