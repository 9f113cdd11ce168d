// file: src/cli/args.rs
// version: 1.2.0
// guid: 6b0d8f3a-4e7c-4b1f-9a5d-2c8e6f0b4d17

//! Command line argument definitions

use crate::config::GoogleCloudBuildAccount;
use crate::edit::RecordEditor;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "davit")]
#[command(about = "Manage deployment configuration through the davit daemon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Deployment whose configuration is being managed
    #[arg(long, global = true, default_value = "default")]
    pub deployment: String,

    /// Base URL of the configuration daemon
    #[arg(
        long,
        global = true,
        env = "DAVIT_DAEMON_ENDPOINT",
        default_value = "http://localhost:8064"
    )]
    pub daemon_endpoint: String,

    /// Skip daemon-side validation when submitting changes
    #[arg(long, global = true)]
    pub no_validate: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage continuous-integration services
    Ci {
        #[command(subcommand)]
        command: CiCommands,
    },
}

#[derive(Subcommand)]
pub enum CiCommands {
    /// Manage the Google Cloud Build service
    Gcb {
        #[command(subcommand)]
        command: GcbCommands,
    },
}

#[derive(Subcommand)]
pub enum GcbCommands {
    /// Manage Google Cloud Build accounts
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a Google Cloud Build account
    Add {
        /// Name of the account to add
        name: String,

        #[command(flatten)]
        fields: AccountFieldArgs,
    },

    /// Edit a Google Cloud Build account
    Edit {
        /// Name of the account to edit
        name: String,

        #[command(flatten)]
        fields: AccountFieldArgs,
    },

    /// Show a Google Cloud Build account
    Get {
        /// Name of the account to show
        name: String,

        #[arg(long, value_enum, default_value = "yaml")]
        output: OutputFormat,
    },

    /// List Google Cloud Build accounts
    List {
        #[arg(long)]
        json: bool,
    },

    /// Delete a Google Cloud Build account
    Delete {
        /// Name of the account to delete
        name: String,
    },
}

/// Optional field overrides shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct AccountFieldArgs {
    /// The Google Cloud project in which to trigger and monitor builds
    #[arg(long)]
    pub project: Option<String>,

    /// The Pub/Sub subscription on which to listen for build changes
    #[arg(long = "subscriptionName")]
    pub subscription_name: Option<String>,

    /// The path to a JSON service account key to use as credentials
    #[arg(long = "jsonKey")]
    pub json_key: Option<String>,
}

impl RecordEditor for AccountFieldArgs {
    type Record = GoogleCloudBuildAccount;

    fn apply(&self, account: &mut GoogleCloudBuildAccount) {
        if let Some(project) = &self.project {
            account.project = Some(project.clone());
        }
        if let Some(subscription_name) = &self.subscription_name {
            account.subscription_name = Some(subscription_name.clone());
        }
        if let Some(json_key) = &self.json_key {
            account.json_key = Some(json_key.clone());
        }
    }
}

/// Output format for record display
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Yaml,
    Json,
}
