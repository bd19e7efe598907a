//! CLI entrypoint for finruimte
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use finruimte_application::{
    EventLog, NoEventLog, RunEstimateInput, RunEstimateUseCase, WizardSession,
};
use finruimte_domain::{OutputFormat, Severity};
use finruimte_infrastructure::{ConfigLoader, FileConfig, JsonlEventLog};
use finruimte_presentation::{
    Cli, Command, ConsoleFormatter, EditorLineSource, EventsCommand, OutputFormatter, WizardRepl,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        Ok(ConfigLoader::load_defaults())
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };

    // Held for the whole run so the file writer flushes on exit
    let _log_guard = init_logging(&cli, config.as_ref().ok());

    info!("Starting finruimte");

    let config = config.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    if report_config_issues(&config) {
        bail!("Invalid configuration, see errors above");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let requested_format: Option<OutputFormat> =
        cli.output.map(Into::into).or(config.output.format);

    match cli.command.clone().unwrap_or(Command::Wizard) {
        Command::Estimate(args) => {
            let use_case = RunEstimateUseCase::new().with_event_log(open_event_log(&cli, &config));
            let estimate = use_case.execute(RunEstimateInput::standalone(args.to_answers()));

            let format = requested_format.unwrap_or_default();
            println!("{}", ConsoleFormatter.render(&estimate, format));
        }
        Command::Wizard => {
            let session = WizardSession::with_event_log(open_event_log(&cli, &config), client_info());
            info!("Wizard session {}", session.id());

            let mut repl =
                WizardRepl::new(session).with_format(requested_format.unwrap_or(OutputFormat::Full));
            let mut lines = EditorLineSource::new()?;
            repl.run(&mut lines, &mut std::io::stdout())?;
        }
        Command::Events { action } => {
            let Some(log) = open_jsonl(&config) else {
                bail!("No event log location available; set [events] path in the config");
            };

            match action {
                EventsCommand::Export => {
                    let records = log.export()?;
                    println!("{}", serde_json::to_string_pretty(&records)?);
                }
                EventsCommand::Clear => {
                    log.clear()?;
                    if !cli.quiet {
                        println!("Cleared {}", log.path().display());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Console logging by verbosity, plus a daily file when `[logging] dir` is set.
fn init_logging(cli: &Cli, config: Option<&FileConfig>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let mut file_error = None;
    let (file_layer, guard) = match config.and_then(|c| c.logging.dir.as_ref().map(|d| (d, c))) {
        Some((dir, config)) => match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(config.logging.file_prefix())
            .build(dir)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(format!("{}: {}", dir.display(), e));
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Could not open log directory {}", e);
    }

    guard
}

/// Print validation issues. Returns true when any of them is an error.
fn report_config_issues(config: &FileConfig) -> bool {
    let mut has_errors = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                has_errors = true;
                eprintln!("{} {}", "config error:".red().bold(), issue.message);
            }
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    has_errors
}

fn open_jsonl(config: &FileConfig) -> Option<JsonlEventLog> {
    let path = config.events.resolved_path()?;
    let params = config.events.to_event_params();
    JsonlEventLog::new(path, params.effective_max_records())
}

fn open_event_log(cli: &Cli, config: &FileConfig) -> Arc<dyn EventLog> {
    let params = config.events.to_event_params();
    if cli.no_events || !params.enabled {
        info!("Event log disabled");
        return Arc::new(NoEventLog);
    }

    match open_jsonl(config) {
        Some(log) => {
            info!("Recording events to {}", log.path().display());
            Arc::new(log)
        }
        None => {
            warn!("Event log unavailable, continuing without it");
            Arc::new(NoEventLog)
        }
    }
}

fn client_info() -> Value {
    json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
    })
}
