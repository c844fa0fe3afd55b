use anyhow::{Context, Result};
use botapi_bridge::client::{BotApi, BotClient};
use botapi_bridge::config::Config;
use botapi_bridge::files::FileReference;
use botapi_bridge::route;
use botapi_bridge::types::ChatId;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio_retry::{strategy::FixedInterval, RetryIf};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "botapi-bridge")]
#[command(about = "Call Bot API methods with typed, validated parameters")]
struct CliArgs {
    /// Extra attempts after a failed call, two seconds apart.
    #[arg(long, default_value_t = 0)]
    retries: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the bot's own user.
    GetMe,
    /// Send a text message.
    SendMessage {
        #[arg(long, value_parser = parse_chat_id)]
        chat_id: ChatId,
        #[arg(long)]
        text: String,
        /// Keyboard as JSON.
        #[arg(long)]
        reply_markup: Option<String>,
    },
    /// Send an album of two to ten media items.
    SendMediaGroup {
        #[arg(long, value_parser = parse_chat_id)]
        chat_id: ChatId,
        /// List of InputMedia objects as JSON.
        #[arg(long)]
        media: String,
        /// Local file for an `attach://NAME` source, as NAME=PATH.
        #[arg(long = "file", value_parser = parse_file_arg)]
        files: Vec<(String, PathBuf)>,
    },
}

fn parse_chat_id(input: &str) -> std::result::Result<ChatId, String> {
    match input.parse::<i64>() {
        Ok(id) => Ok(ChatId::Id(id)),
        Err(_) if input.starts_with('@') && input.len() > 1 => Ok(ChatId::from(input)),
        Err(_) => Err(format!(
            "Invalid chat id '{}'. Expected an integer or @username",
            input
        )),
    }
}

fn parse_file_arg(input: &str) -> std::result::Result<(String, PathBuf), String> {
    match input.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("Invalid file '{}'. Expected NAME=PATH", input)),
    }
}

fn load_files(files: &[(String, PathBuf)]) -> Result<HashMap<String, FileReference>> {
    files
        .iter()
        .map(|(name, path)| {
            let file = FileReference::from_path(path, None, None)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok((name.clone(), file))
        })
        .collect()
}

async fn run(
    api: &dyn BotApi,
    command: &Command,
    files: &HashMap<String, FileReference>,
) -> botapi_bridge::Result<Value> {
    match command {
        Command::GetMe => route::get_me(api).await,
        Command::SendMessage {
            chat_id,
            text,
            reply_markup,
        } => route::send_message(api, chat_id.clone(), text, reply_markup.as_deref()).await,
        Command::SendMediaGroup { chat_id, media, .. } => {
            route::send_media_group(api, chat_id.clone(), media, files).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botapi_bridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = BotClient::from_config(&config);

    let files = match &args.command {
        Command::SendMediaGroup { files, .. } => load_files(files)?,
        _ => HashMap::new(),
    };

    info!("Starting botapi-bridge against {}", client.base_url());

    let strategy = FixedInterval::from_millis(2000).take(args.retries);
    let outcome = RetryIf::spawn(
        strategy,
        || async {
            run(&client, &args.command, &files).await.map_err(|e| {
                warn!("Call failed: {}", e);
                e
            })
        },
        // A rejected payload fails the same way every time.
        |e: &botapi_bridge::Error| !e.is_validation(),
    )
    .await;

    let (status, envelope) = route::respond(outcome);
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if status != 200 {
        error!("Call failed with status {}", status);
        std::process::exit(1);
    }
    Ok(())
}
