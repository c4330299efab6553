use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum LoggingFormat {
    Standard,
    Json,
}
