use clap::Parser;
use order_desk::{
    config::{app, database},
    errors::Result,
    shell::{self, Cli, ShellData, render},
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Non-fatal, env vars can be set externally
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", render::error_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = app::load_app_configuration()?;

    let db = database::create_connection(&config.database_url)
        .await
        .inspect(|_| info!("Database ready at {}", config.database_url))
        .inspect_err(|e| error!("Failed to open database: {}", e))?;

    let data = ShellData::new(db, config);
    let mut stdout = std::io::stdout().lock();
    shell::run(&data, cli.command, &mut stdout).await
}
