mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOptions, handle_serve};

use crate::config::BookshelfConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    /// The file the config was read from, if any
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load `explicit` when given, otherwise search upward from the working
    /// directory and fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let config = BookshelfConfig::load(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                Ok(Self {
                    config,
                    config_path: Some(path.to_path_buf()),
                })
            }
            None => {
                let cwd = std::env::current_dir()?;
                let (config, config_path) =
                    BookshelfConfig::discover(&cwd).context("Failed to load config")?;
                Ok(Self {
                    config,
                    config_path,
                })
            }
        }
    }
}
