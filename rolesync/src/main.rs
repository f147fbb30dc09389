use std::rc::Rc;

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use rolesync::{
    actions::{render_role_listing, run_action, ActionOutcome},
    cli::CliArgs,
    connection::ConnectionSettings,
    logging::{console_filter_with_environment_override, initialize_tracing},
};
use rolesync_api_client::Client;
use rolesync_configuration::Configuration;
use tracing::info;



#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing `.env` file is fine, a malformed one is not.
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            return Err(error)
                .into_diagnostic()
                .wrap_err("Failed to load the .env file.");
        }
    }

    // Parse CLI arguments.
    let arguments = CliArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => Configuration::load_from_path(path),
        None => Configuration::load_from_default_path_or_defaults(),
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration.")?;

    configuration
        .logging
        .create_log_file_output_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create the log file output directory.")?;

    let guard = initialize_tracing(
        console_filter_with_environment_override(
            configuration.logging.console_output_level_filter(),
        ),
        configuration.logging.log_file_output_level_filter(),
        configuration.logging.log_file_output_directory.as_deref(),
        "rolesync.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    match configuration.configuration_file_path.as_ref() {
        Some(file_path) => info!(
            file_path = %file_path.display(),
            "Configuration loaded."
        ),
        None => info!("No configuration file found, using defaults."),
    }


    let connection = ConnectionSettings::resolve(&arguments.connection, &configuration)
        .into_diagnostic()
        .wrap_err("Invalid connection settings.")?;
    let server = Rc::new(connection.api_server());

    info!(
        base_url = server.base_url(),
        username = connection.username.as_str(),
        action = ?arguments.action,
        "Connecting to Jenkins."
    );

    let client = Client::new(server)
        .into_diagnostic()
        .wrap_err("Failed to initialize the HTTP client.")?
        .with_authentication(&Rc::new(connection.credentials()));


    let outcome = run_action(
        &client.role_strategy(),
        arguments.action_request(),
        &configuration,
    )
    .await
    .into_diagnostic()
    .wrap_err("Action failed.")?;

    match outcome {
        ActionOutcome::RoleListing { role_type, body } => {
            info!(role_type = role_type.name(), "Listed roles.");

            println!("{}", render_role_listing(&body));
        }
        ActionOutcome::Imported(summary) => {
            println!(
                "Imported {} roles with {} user assignments.",
                summary.roles_created, summary.users_assigned
            );
        }
    }


    drop(guard);

    Ok(())
}
