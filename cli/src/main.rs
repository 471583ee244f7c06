//! CLI entrypoint for council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{ContentGenerator, CouncilConfig, MeetingResult, RunMeetingUseCase};
use council_domain::{Severity, config::has_errors};
use council_infrastructure::{
    ConfigLoader, FileConfig, FsArtifactSink, GeneratorProvider, JsonlConversationLogger,
    TemplateContentGenerator, TemplateReflectionProvider, check_session_id,
};
use council_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let _log_guard = init_logging(cli.verbose, &config.logging.log_dir);
    info!("Starting council");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if has_errors(&issues) {
        let errors = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        bail!("Invalid configuration ({errors} error(s))");
    }

    let Some(agenda) = cli.agenda.clone() else {
        bail!("An agenda is required, e.g. council \"Choose our next internal product\"");
    };
    let session_id = cli
        .session_id
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().format("meeting_%Y%m%d_%H%M%S").to_string());
    check_session_id(&session_id)?;

    ConsoleFormatter::set_color(config.output.use_color());
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.parse_format().0)
        .unwrap_or_default();

    let (provider, _) = config.generator.parse_provider();
    let result = match provider {
        GeneratorProvider::Http if !cli.offline => match http_generator(&config)? {
            Some(generator) => run(Arc::new(generator), &config, &cli, &session_id, &agenda).await,
            None => {
                let generator = TemplateContentGenerator::new(config.generator.seed);
                run(Arc::new(generator), &config, &cli, &session_id, &agenda).await
            }
        },
        _ => {
            let generator = TemplateContentGenerator::new(config.generator.seed);
            run(Arc::new(generator), &config, &cli, &session_id, &agenda).await
        }
    };

    println!("{}", ConsoleFormatter.render(&result, format));

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Console log to stderr plus a daily rolling file under `log_dir`.
fn init_logging(verbose: u8, log_dir: &str) -> WorkerGuard {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let file_appender = tracing_appender::rolling::daily(log_dir, "council.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}

#[cfg(feature = "http-generator")]
fn http_generator(
    config: &FileConfig,
) -> Result<Option<council_infrastructure::HttpContentGenerator>> {
    let settings = &config.generator;
    let Some(api_key) = settings.api_key() else {
        return Ok(None);
    };
    let timeout = std::time::Duration::from_secs(config.meeting.generation_timeout_secs);
    let generator = council_infrastructure::HttpContentGenerator::new(
        &settings.base_url,
        &settings.model,
        api_key,
        timeout,
    )?
    .with_max_tokens(settings.max_tokens)
    .with_temperature(settings.temperature);
    info!("Using {} at {}", settings.model, settings.base_url);
    Ok(Some(generator))
}

#[cfg(not(feature = "http-generator"))]
fn http_generator(_config: &FileConfig) -> Result<Option<TemplateContentGenerator>> {
    warn!("Built without the http-generator feature; using the offline template generator");
    Ok(None)
}

async fn run<G: ContentGenerator + 'static>(
    generator: Arc<G>,
    config: &FileConfig,
    cli: &Cli,
    session_id: &str,
    agenda: &str,
) -> MeetingResult {
    info!("Generator: {}", generator.name());
    let council: CouncilConfig = config.to_council_config();

    let mut use_case = RunMeetingUseCase::new(generator, council)
        .with_reflections(Arc::new(TemplateReflectionProvider))
        .with_artifact_sink(Arc::new(FsArtifactSink::new(
            &config.meeting.meetings_dir,
            &config.meeting.board_dir,
        )));

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    if cli.quiet {
        use_case.execute(session_id, agenda).await
    } else {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_progress(session_id, agenda, &progress)
            .await
    }
}
