//! Courier CLI - validate and send webhook messages from the command line.
//!
//! # Commands
//!
//! - `courier check` - Validate a message and print every violation
//! - `courier send` - Send a message to the configured webhook

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use error::CliResult;

/// Courier CLI - Webhook message tools
#[derive(Parser)]
#[command(name = "courier")]
#[command(version)]
#[command(about = "Validate and send chat webhook messages")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} courier check --content \"Hello\" --title \"Build\" --field \"Status=green\"\n  {} courier send --content \"Deployed\" --file report.txt\n",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a message without sending it
    #[command(alias = "c")]
    Check(MessageArgs),

    /// Send a message to the webhook
    #[command(alias = "s")]
    Send(SendArgs),
}

/// Message contents shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct MessageArgs {
    /// Message text
    #[arg(long)]
    pub content: Option<String>,

    /// Override the webhook username
    #[arg(long)]
    pub username: Option<String>,

    /// Override the webhook avatar
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Read the message aloud
    #[arg(long)]
    pub tts: bool,

    /// Embed title
    #[arg(long)]
    pub title: Option<String>,

    /// Embed description
    #[arg(long)]
    pub description: Option<String>,

    /// Embed color: a name (red, green, ...) or #RRGGBB
    #[arg(long)]
    pub color: Option<String>,

    /// Embed field as name=value (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Attach a file (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    #[command(flatten)]
    pub message: MessageArgs,

    /// Destination webhook URL
    #[arg(long, env = "COURIER_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Settings file (.toml, .json or .env)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// On failure, resend the message and error details as attachments
    #[arg(long)]
    pub attach_on_error: bool,
}

fn parse_field(input: &str) -> Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", input))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn success(msg: &str) {
    println!("  {} {}", "✓".green().bold(), msg.green());
}

fn warn(msg: &str) {
    println!("  {} {}", "⚠".yellow().bold(), msg.yellow());
}

fn info(msg: &str) {
    println!("  {} {}", "→".cyan(), msg);
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);

    let result: CliResult<()> = match cli.command {
        Commands::Check(args) => commands::check::run(&args, cli.verbose).await,
        Commands::Send(args) => commands::send::run(&args).await,
    };

    if let Err(e) = result {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("Status=green=ok").unwrap(),
            ("Status".to_string(), "green=ok".to_string())
        );
        assert!(parse_field("no separator").is_err());
    }

    #[test]
    fn test_send_arguments() {
        let cli = Cli::parse_from([
            "courier",
            "send",
            "--content",
            "hi",
            "--field",
            "a=b",
            "--field",
            "c=d",
            "--webhook-url",
            "https://hooks.test/1",
            "--attach-on-error",
        ]);

        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.message.content.as_deref(), Some("hi"));
                assert_eq!(args.message.fields.len(), 2);
                assert!(args.attach_on_error);
            }
            Commands::Check(_) => panic!("expected send"),
        }
    }
}
