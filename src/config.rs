use crate::error::{BookshelfError, Result};
use crate::model::ReferencePolicy;
use crate::storage::Library;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Load the sample books and authors at startup
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub references: ReferencePolicy,
}

fn default_seed() -> bool {
    true
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            references: ReferencePolicy::default(),
        }
    }
}

impl LibrarySettings {
    pub fn build_library(&self) -> Library {
        let library = if self.seed {
            Library::seeded()
        } else {
            Library::empty()
        };
        library.policy(self.references)
    }
}

impl BookshelfConfig {
    /// Load the config found by searching upward from `start_path`, or the
    /// defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BookshelfError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
