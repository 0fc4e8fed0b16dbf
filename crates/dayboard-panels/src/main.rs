/*
[INPUT]:  CLI arguments, YAML configuration file, DAYBOARD_* environment
[OUTPUT]: Dashboard panels printed, tasks created, or the interactive TUI
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use dayboard_adapter::{DashboardClient, NewTask};
use dayboard_panels::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogWriterFactory, panel_lines, run_tui_with_log};
use dayboard_panels::{Dashboard, DashboardConfig, Panel, SessionStatus};

#[derive(Parser, Debug)]
#[command(name = "dayboard", version, about = "Google productivity dashboard in the terminal")]
struct Cli {
    /// Config file; defaults to <config dir>/dayboard/config.yaml
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Override the backend origin from the config
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a sample config file
    Init,
    /// Refresh every panel once and print it
    Show,
    /// Create a task-list holding one task
    Plan {
        /// List title; defaults to the current local time
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "task-title")]
        task_title: String,
        #[arg(long)]
        notes: Option<String>,
        /// Due date, RFC 3339
        #[arg(long)]
        due: Option<DateTime<Utc>>,
    },
    /// List the emails the assign panel would queue
    Assign,
    /// Print the maps API key held by the backend
    ApiKey,
    /// Interactive dashboard
    Tui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if !matches!(args.command, Command::Tui) {
        init_tracing(&args.log_level)?;
    }

    let mut config = DashboardConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
        config.validate()?;
    }

    info!(base_url = %config.base_url, "starting dayboard");
    let mut dashboard = build_dashboard(&config)?;

    match args.command {
        Command::Init => write_sample_config(args.config_path.as_deref())?,
        Command::Show => {
            dashboard.populate_all().await;
            ensure_session(&dashboard)?;
            for panel in Panel::ALL {
                println!("== {} ==", panel.title());
                for line in panel_lines(dashboard.document(), panel) {
                    println!("{line}");
                }
                println!();
            }
        }
        Command::Plan {
            title,
            task_title,
            notes,
            due,
        } => {
            let mut task = NewTask::new(task_title);
            if let Some(notes) = notes {
                task = task.with_notes(notes);
            }
            if let Some(due) = due {
                task = task.with_due(due);
            }
            let outcome = dashboard.post_and_get_task_list(title, task).await;
            ensure_session(&dashboard)?;
            let outcome = outcome.ok_or_else(|| anyhow!("task workflow failed"))?;
            println!(
                "created list {} ({}) with task {}",
                outcome.task_list.title, outcome.task_list.id, outcome.task.title
            );
            println!("{} task-lists cached", dashboard.cache().task_lists.len());
        }
        Command::Assign => {
            dashboard.assign_start_reset().await;
            ensure_session(&dashboard)?;
            let assign = dashboard.assign();
            println!("{} suspected action items", assign.queue_len());
            if let Some(current) = assign.current() {
                println!("next: {}", current.headline());
            }
        }
        Command::ApiKey => {
            let key = dashboard.fetch_api_key().await;
            ensure_session(&dashboard)?;
            println!("{}", key.ok_or_else(|| anyhow!("api key unavailable"))?);
        }
        Command::Tui => {
            let log_buffer = LogBuffer::shared(LOG_BUFFER_CAPACITY);
            let _guard = init_tui_tracing(&args.log_level, log_buffer.clone(), config.log_dir.as_deref())?;
            run_tui_with_log(dashboard, log_buffer).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Route logs into the Logs panel, and into a daily file when `log_dir` is set
fn init_tui_tracing(
    log_level: &str,
    log_buffer: dayboard_panels::tui::LogBufferHandle,
    log_dir: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_writer = LogWriterFactory::new(log_buffer);

    let guard = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "dayboard.log");
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(buffer_writer.and(file_writer))
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(buffer_writer)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            None
        }
    };
    Ok(guard)
}

fn build_dashboard(config: &DashboardConfig) -> Result<Dashboard> {
    let mut client = DashboardClient::with_config_and_base_url(config.client_config(), &config.base_url)
        .context("create dashboard client")?;
    if let Some(credentials) = config.credentials() {
        client.set_credentials(credentials);
    }
    Ok(Dashboard::new(
        client,
        config.gmail_settings(),
        config.assign_settings(),
        SessionStatus::default(),
    ))
}

fn ensure_session(dashboard: &Dashboard) -> Result<()> {
    if dashboard.session().is_signed_out() {
        bail!("session rejected by backend; refresh the tokens in the config");
    }
    Ok(())
}

fn write_sample_config(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => DashboardConfig::default_path().context("no config directory on this platform")?,
    };
    DashboardConfig::write_sample(&path)?;
    info!(path = %path.display(), "sample config written");
    println!("wrote {}", path.display());
    Ok(())
}
