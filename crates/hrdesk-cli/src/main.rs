use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use hrdesk_application::{AppContext, resolve_data_dir};
use hrdesk_core::config::{LoggingSettings, RootConfig};
use hrdesk_core::session::Role;
use hrdesk_infrastructure::HrdeskPaths;
use hrdesk_infrastructure::storage::ConfigStorage;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hrdesk")]
#[command(about = "hrdesk - employee records with HR and employee sign-in", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the record store (overrides [storage] data_dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in as HR or as an employee
    Login {
        #[arg(long, value_parser = parse_role)]
        role: Role,
        #[arg(long)]
        username: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// Manage employee records (HR only)
    Employees {
        #[command(subcommand)]
        action: EmployeesAction,
    },
    /// HR profile settings (HR only)
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Show your own employee record (employees only)
    Me,
    /// Manage config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum EmployeesAction {
    /// List all employees
    List,
    /// Show one employee in full
    Show { id: String },
    /// Delete an employee; a reason is required
    Delete {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Add an employee through the interactive four-step form
    Add,
    /// Replace an employee with a full record read from a JSON file
    Replace {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Show the HR profile
    Show,
    /// Update HR profile fields
    Set {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        designation: Option<String>,
        /// Photo as a data URL or path; an empty value removes it
        #[arg(long)]
        photo: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a default config.toml if none exists
    Init,
    /// Hash a password for [hr] password_hash
    HashPassword,
}

fn parse_role(value: &str) -> std::result::Result<Role, String> {
    value
        .parse::<Role>()
        .map_err(|_| format!("unknown role '{}', expected hr or employee", value))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => HrdeskPaths::new(None).config_file()?,
    };
    let config_storage = ConfigStorage::new(config_path);
    let config = config_storage
        .load()
        .with_context(|| format!("Failed to load {:?}", config_storage.path()))?;
    let data_dir = resolve_data_dir(&config, cli.data_dir.as_deref())?;

    let _guard = init_logging(&config.logging, &data_dir);
    tracing::debug!("Using config {:?}", config_storage.path());

    let command = match cli.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Init => commands::config::init(&config_storage),
                ConfigAction::HashPassword => commands::config::hash_password(),
            };
        }
        command => command,
    };

    let ctx = AppContext::build(&config, &data_dir)?;
    dispatch(&ctx, &config, command).await
}

async fn dispatch(ctx: &AppContext, config: &RootConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Config { .. } => {
            anyhow::bail!("config commands run without a record store")
        }
        Commands::Login {
            role,
            username,
            password,
        } => commands::auth::login(ctx, role, &username, password).await?,
        Commands::Logout => commands::auth::logout(ctx).await?,
        Commands::Whoami => commands::auth::whoami(ctx).await?,
        Commands::Me => commands::auth::me(ctx).await?,
        Commands::Employees { action } => match action {
            EmployeesAction::List => commands::employees::list(ctx).await?,
            EmployeesAction::Show { id } => commands::employees::show(ctx, &id).await?,
            EmployeesAction::Delete { id, reason } => {
                commands::employees::delete(ctx, &id, &reason).await?
            }
            EmployeesAction::Add => commands::intake::run(ctx, config).await?,
            EmployeesAction::Replace { id, file } => {
                commands::employees::replace(ctx, &id, &file).await?
            }
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(ctx).await?,
            SettingsAction::Set {
                first_name,
                last_name,
                mobile,
                designation,
                photo,
            } => {
                let update = hrdesk_application::ProfileUpdate {
                    first_name,
                    last_name,
                    mobile_number: mobile,
                    designation,
                    profile_photo: photo,
                };
                commands::settings::set(ctx, update).await?
            }
        },
    }
    Ok(())
}

/// Installs the stderr layer and, when enabled, a daily rolling file under
/// `<data_dir>/logs`. The returned guard flushes the file writer on drop.
fn init_logging(settings: &LoggingSettings, data_dir: &std::path::Path) -> Option<WorkerGuard> {
    // stderr stays quiet unless RUST_LOG asks for more; it shares the terminal
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let (file_layer, guard) = if settings.file {
        let file_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let appender =
            tracing_appender::rolling::daily(HrdeskPaths::logs_dir(data_dir), "hrdesk.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(file_filter);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    // a second init (e.g. in tests) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from([
            "hrdesk",
            "login",
            "--role",
            "hr",
            "--username",
            "HR@vmcc-india.com",
        ])
        .unwrap();
        match cli.command {
            Commands::Login {
                role,
                username,
                password,
            } => {
                assert_eq!(role, Role::Hr);
                assert_eq!(username, "HR@vmcc-india.com");
                assert!(password.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from([
            "hrdesk", "login", "--role", "admin", "--username", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_requires_reason_flag() {
        assert!(Cli::try_parse_from(["hrdesk", "employees", "delete", "42"]).is_err());

        let cli = Cli::try_parse_from([
            "hrdesk",
            "--data-dir",
            "/tmp/hr",
            "employees",
            "delete",
            "42",
            "--reason",
            "Resigned",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/hr")));
        assert!(matches!(
            cli.command,
            Commands::Employees {
                action: EmployeesAction::Delete { .. }
            }
        ));
    }

    #[test]
    fn test_parse_replace() {
        assert!(Cli::try_parse_from(["hrdesk", "employees", "replace", "42"]).is_err());

        let cli = Cli::try_parse_from([
            "hrdesk",
            "employees",
            "replace",
            "42",
            "--file",
            "asha.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Employees {
                action: EmployeesAction::Replace { id, file },
            } => {
                assert_eq!(id, "42");
                assert_eq!(file, PathBuf::from("asha.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hrdesk", "whoami", "--config", "/etc/hrdesk.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/hrdesk.toml")));
    }
}
