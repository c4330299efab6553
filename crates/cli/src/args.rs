use clap::Parser;
use pruner_lib::log::LoggingFormat;

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "pruner")]
pub struct GlobalArgs {
    /// Backend endpoint URL serving the candidate API
    #[arg(long, env = "PRUNER_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Path to pruner configuration file (TOML format)
    #[arg(long, default_value = "pruner.toml")]
    pub config: String,

    /// Logging output format
    #[arg(long, value_enum, default_value = "standard")]
    pub logging_format: LoggingFormat,
}
