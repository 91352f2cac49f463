use std::path::PathBuf;

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

#[derive(Debug, Parser)]
#[command(name = "schema-bridge", version)]
#[command(arg_required_else_help = true)]
/// Projects a relational datamodel into GraphQL types and relation resolvers
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Set the logging level
    #[arg(long = "log", env = "SCHEMA_BRIDGE_LOG", global = true)]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "SCHEMA_BRIDGE_LOG_STYLE", default_value_t = LogStyle::Text, global = true)]
    pub log_style: LogStyle,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Generate the schema artifact, its SDL and a Rust module from a datamodel
    Generate(GenerateArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateArgs {
    /// Path to the datamodel JSON document
    #[arg(long, short, env = "SCHEMA_BRIDGE_DATAMODEL")]
    pub datamodel: PathBuf,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "SCHEMA_BRIDGE_CONFIG", default_value = "./schema-bridge.toml")]
    pub config: PathBuf,
    /// Directory for the generated files. Takes precedence over the configuration.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn log_format<S>(&self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if atty::is(atty::Stream::Stderr) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
