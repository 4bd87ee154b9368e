mod cli;
mod codec;
mod config;
mod error;
mod models;
mod store;
mod validator;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli, MenuItem};
use colored::*;
use config::{Config, LogFormat};
use std::path::Path;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::from_env()?;

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = init_logging(&config)?;

    info!("Starting contact manager...");

    let mut app = App::new(config);

    if let Some(path) = &args.load {
        app.run_command(cli::Commands::Import {
            file: Some(path.clone()),
        })
        .await
        .with_context(|| format!("loading contacts from {}", path.display()))?;
    }

    match args.command {
        Some(command) => {
            if let Err(e) = app.run_command(command).await {
                error!("Command execution failed: {:?}", e);
                return Err(e.into());
            }
        },
        None => run_interactive(&mut app).await?,
    }

    save_if_requested(&mut app, args.save.as_deref()).await?;
    Ok(())
}

async fn run_interactive(app: &mut App) -> anyhow::Result<()> {
    println!(
        "{}",
        "Welcome to the Contact Management System!".cyan().bold()
    );

    // Main interactive loop
    loop {
        let item = cli::prompt_menu()?;
        println!("\n---\n");

        if item == MenuItem::Quit {
            println!(
                "{}",
                "Thank you for using the Contact Management System. Goodbye!".green()
            );
            break;
        }

        let command_result = match cli::prompt_command(item, app) {
            Ok(Some(command)) => app.run_command(command).await,
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };

        // Handle potential errors from command execution
        if let Err(e) = command_result {
            error!("Command execution failed: {:?}", e);
            println!("{} {}", "Error:".red(), e.to_string().red());
        }

        cli::pause()?;
        println!("\n---\n");
    }

    Ok(())
}

async fn save_if_requested(app: &mut App, save: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = save {
        app.run_command(cli::Commands::Export {
            file: Some(path.to_path_buf()),
        })
        .await
        .with_context(|| format!("saving contacts to {}", path.display()))?;
    }
    Ok(())
}

/// Sets up the global `tracing` subscriber.
///
/// Logs go to a daily-rolling `contacts.log` under `CONTACTS_LOG_DIR` when configured,
/// otherwise to stderr. `RUST_LOG` controls the filter (default `warn`).
fn init_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "contacts.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        },
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.log_dir.is_none());

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    Ok(guard)
}
