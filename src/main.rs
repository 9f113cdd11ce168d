// file: src/main.rs
// version: 1.2.0
// guid: d5e8b2f6-0a3c-4d7e-9b1f-8c4a6e2d0b59

//! Davit - Main entry point

use clap::Parser;
use davit::{
    cli::{
        args::{AccountCommands, CiCommands, Cli, Commands, GcbCommands},
        commands::*,
    },
    daemon::DaemonClient,
    logging::logger,
    Result,
};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logger::init_logger(cli.verbose, cli.quiet)?;

    let client = DaemonClient::new(&cli.daemon_endpoint)?;
    let deployment = &cli.deployment;
    let no_validate = cli.no_validate;

    match cli.command {
        Commands::Ci { command } => match command {
            CiCommands::Gcb { command } => match command {
                GcbCommands::Account { command } => match command {
                    AccountCommands::Add { name, fields } => {
                        add_account_command(&client, deployment, &name, &fields, no_validate)
                            .await
                    }
                    AccountCommands::Edit { name, fields } => {
                        edit_account_command(&client, deployment, &name, &fields, no_validate)
                            .await
                    }
                    AccountCommands::Get { name, output } => {
                        get_account_command(&client, deployment, &name, output, no_validate)
                            .await
                    }
                    AccountCommands::List { json } => {
                        list_accounts_command(&client, deployment, json).await
                    }
                    AccountCommands::Delete { name } => {
                        delete_account_command(&client, deployment, &name, no_validate).await
                    }
                },
            },
        },
    }
}
