use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use gitara::catalog;
use gitara::{render, Config, LocalModelClient, ToolCall, ToolCallProvider};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Git Assistant - convert natural language to git commands
#[derive(Debug, Parser)]
#[command(name = "gitara", version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Model name to request from the server
    #[arg(long, global = true)]
    model: Option<String>,

    /// Base URL of the OpenAI-compatible server, e.g. http://127.0.0.1:11434/v1
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask the model for a git command
    Ask {
        query: String,
        /// Also show the tool call JSON on stderr
        #[arg(long)]
        show_json: bool,
    },
    /// Render a tool call given as JSON, without asking the model
    Render { tool_call: String },
    /// Print the tool schemas sent to the model
    Tools,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.model.base_url = base_url.clone();
    }
    colored::control::set_override(config.display.color_output);
    Ok(config)
}

/// Log schema mismatches and print the rendered command.
fn emit(call: &ToolCall, show_json: bool) {
    for warning in catalog::check(call) {
        warn!("{}", warning);
    }
    if show_json {
        eprintln!("{}", format!("# Tool call: {}", call).cyan());
    }
    println!("{}", render(call));
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Ask { query, show_json } => {
            let config = load_config(&cli)?;
            debug!(?config, "resolved config");
            let client = LocalModelClient::new(&config.model)?;
            let call = client.invoke(query).await?;
            emit(&call, *show_json);
        }
        Command::Render { tool_call } => {
            let call = ToolCall::parse(tool_call)
                .with_context(|| format!("Could not parse tool call from '{}'", tool_call))?;
            emit(&call, false);
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&catalog::tool_specs())?);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}
