use std::time::Duration;

use blog_core::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "List, write, edit and delete blog posts")]
pub struct Cli {
    /// Base URL of the posts API.
    #[arg(long, env = "BLOG_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Give up on a request after this many seconds. Unset means wait forever.
    #[arg(long, env = "BLOG_API_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every post.
    List,
    /// Publish a new post.
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Edit an existing post. Fields not given keep their current value.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post.
    Delete { id: String },
    /// Interactive session (the default).
    Shell,
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::new(&self.base_url)?;
        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}
