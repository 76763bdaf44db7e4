mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use maven_analyzer::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use maven_analyzer::adapters::outbound::filesystem::{
    FileSystemWriter, PomReader, Sha1Fingerprinter, StdoutPresenter,
};
use maven_analyzer::adapters::outbound::formatters::JsonFormatter;
use maven_analyzer::adapters::outbound::repository::LocalRepositoryResolver;
use maven_analyzer::analysis::domain::AnalysisResult;
use maven_analyzer::analysis::services::LocalArtifactLocator;
use maven_analyzer::application::dto::AnalysisRequest;
use maven_analyzer::application::use_cases::AnalyzeProjectUseCase;
use maven_analyzer::config::{discover_config, load_config_from_path, AnalyzerConfig};
use maven_analyzer::ports::outbound::{OutputPresenter, ProgressReporter, ResultFormatter};
use maven_analyzer::shared::error::{AnalyzerError, ExitCode};
use maven_analyzer::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(ExitCode::InvalidArguments.as_i32());
            }
        },
    };

    init_logging(args.verbose);

    match run(args) {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => process::exit(report_error(&e).as_i32()),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    // Explicit --config must exist, the project-local file is optional
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&args.directory)?,
    };

    let config = AnalyzerConfig::builder()
        .with_config_file(config_file)
        .with_definitions(args.define.clone())
        .with_local_repository(args.local_repository.clone())
        .with_output(args.output.clone())
        .with_include_optional(args.include_optional)
        .build();

    tracing::debug!(
        repository = %config.local_repository.display(),
        properties = config.system_properties.as_map().len(),
        "Configuration resolved"
    );

    let result = if args.quiet {
        analyze(&args, &config, SilentProgressReporter)?
    } else {
        analyze(&args, &config, StderrProgressReporter::new())?
    };

    let output = JsonFormatter::new().format(&result)?;

    let presenter: Box<dyn OutputPresenter> = match &config.output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    if !args.quiet {
        print_summary(&result, &config);
    }

    Ok(())
}

fn analyze<P: ProgressReporter>(
    args: &Args,
    config: &AnalyzerConfig,
    progress_reporter: P,
) -> Result<AnalysisResult> {
    let locator = LocalArtifactLocator::new(config.local_repository.clone());
    let properties = config.system_properties.as_map().clone();

    let use_case = AnalyzeProjectUseCase::new(
        PomReader::new(properties.clone()),
        LocalRepositoryResolver::new(locator.clone(), properties)
            .with_optional_dependencies(config.include_optional),
        Sha1Fingerprinter::new(),
        progress_reporter,
        locator,
    );

    use_case.execute(AnalysisRequest::new(args.directory.clone()))
}

fn print_summary(result: &AnalysisResult, config: &AnalyzerConfig) {
    eprintln!(
        "{} {} dependency(ies) of {}",
        "📦".bold(),
        result.total_dependencies().to_string().bold(),
        result.coordinate().to_string().cyan()
    );
    match &config.output {
        Some(path) => eprintln!("📝 Output written to: {}", path.display().green()),
        None => eprintln!("📝 Output written to: stdout"),
    }
}

/// Prints the error with its cause chain and returns the exit code for it
fn report_error(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<AnalyzerError>() {
        Some(analyzer_error) => {
            let category = analyzer_error.category();
            eprintln!("\n❌ {}:\n", category.label().red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            category.exit_code()
        }
        None => {
            tracing::error!("{:#}", e);
            eprintln!("\n❌ An unexpected error occurred:\n");
            eprintln!("{:#}\n", e);
            ExitCode::UnexpectedError
        }
    }
}
