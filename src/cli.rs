use clap::Parser;
use maven_analyzer::config::SystemProperties;
use std::path::PathBuf;

fn parse_definition(definition: &str) -> Result<(String, String), String> {
    SystemProperties::parse_definition(definition)
}

/// Analyze the dependencies of a Maven project and report them as JSON
#[derive(Parser, Debug)]
#[command(name = "maven-analyzer")]
#[command(version)]
#[command(
    about = "Analyze the dependency tree of a Maven project and fingerprint each artifact",
    long_about = None
)]
pub struct Args {
    /// Path to the Maven project directory containing pom.xml
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Local Maven repository (defaults to ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Define a system property used for ${...} interpolation.
    /// Can be specified multiple times: -D junit.version=5.10.0 -D skipTests
    #[arg(short = 'D', value_name = "NAME=VALUE", value_parser = parse_definition)]
    pub define: Vec<(String, String)>,

    /// Path to a config file (defaults to maven-analyzer.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include optional dependencies of transitive artifacts
    #[arg(long)]
    pub include_optional: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}
