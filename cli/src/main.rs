mod args;
mod render;
mod shell;

use anyhow::{anyhow, Context, Result};
use blog_core::{DraftField, DraftScope, PostClient, PostId, PostListController, ReqwestTransport};
use clap::Parser;
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let config = cli.client_config().context("Invalid client configuration")?;
    debug!(base_url = %config.base_url, "Configuration loaded");

    let transport = ReqwestTransport::new(&config).context("Failed to create HTTP client")?;
    let mut controller = PostListController::new(PostClient::new(&config), transport);

    match cli.command.unwrap_or(Command::Shell) {
        Command::List => {
            controller.load_all().await?;
            print!("{}", render::post_list(controller.posts()));
        }
        Command::Create { title, content } => {
            controller.update_draft_field(DraftScope::New, DraftField::Title, title);
            controller.update_draft_field(DraftScope::New, DraftField::Content, content);
            let post = controller.submit_new_post().await?;
            print!("{}", render::post(&post));
        }
        Command::Update { id, title, content } => {
            let id = PostId::new(id);
            controller.load_all().await?;
            let post = controller
                .state()
                .find(&id)
                .cloned()
                .ok_or_else(|| anyhow!("no post with id {id}"))?;
            controller.begin_edit(&post);
            if let Some(title) = title {
                controller.update_draft_field(DraftScope::Edit, DraftField::Title, title);
            }
            if let Some(content) = content {
                controller.update_draft_field(DraftScope::Edit, DraftField::Content, content);
            }
            controller.submit_edited_post().await?;
            if let Some(post) = controller.state().find(&id) {
                print!("{}", render::post(post));
            }
        }
        Command::Delete { id } => {
            let id = PostId::new(id);
            controller.load_all().await?;
            controller.delete_post(&id).await?;
            print!("{}", render::post_list(controller.posts()));
        }
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell::run(&mut controller, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // Logs go to stderr; stdout carries command output.
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
