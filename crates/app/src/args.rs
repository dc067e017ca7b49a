use std::path::PathBuf;

pub use clap::Parser;
use url::Url;

use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roomctl", version)]
#[command(about = "Command-line bindings for the room service")]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Config file (default: ~/.roomctl/config.toml)
    #[arg(long, global = true, env = "ROOMCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostics written to stderr at this level and above
    #[arg(long, global = true, default_value = "warn", env = "ROOMCTL_LOG_LEVEL")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: crate::Command,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Service endpoint URL
    #[arg(long, global = true, env = "ROOMCTL_ENDPOINT")]
    pub endpoint: Option<Url>,

    /// Region sent with every request
    #[arg(long, global = true, env = "ROOMCTL_REGION")]
    pub region: Option<String>,

    #[arg(long, global = true, env = "ROOMCTL_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    #[arg(
        long,
        global = true,
        env = "ROOMCTL_SECRET_ACCESS_KEY",
        hide_env_values = true
    )]
    pub secret_access_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "ROOMCTL_SESSION_TOKEN",
        hide_env_values = true
    )]
    pub session_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "ROOMCTL_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// What to print: '*' for the whole response, '^Param' to echo a
    /// parameter, or the name of a response field
    #[arg(long, global = true, value_name = "EXPR")]
    pub select: Option<String>,

    /// Print the command's primary input instead of the response
    #[arg(long, global = true)]
    pub pass_thru: bool,

    /// Do not ask before changing anything
    #[arg(long, short = 'f', global = true)]
    pub force: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}
