pub mod beacon;
pub mod config;
pub mod render;

use clap::Args;
use folio_config::FileStore;
use std::path::PathBuf;
use url::Url;

/// Where the active configuration is resolved from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// URL of a remote `site-config.json`
    #[arg(long, env = "FOLIO_REMOTE_URL")]
    pub remote: Option<Url>,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    /// Directory holding the persisted configuration
    #[arg(long, env = "FOLIO_STATE_DIR")]
    pub state_dir: Option<PathBuf>,
}

impl StateArgs {
    pub fn file_store(&self) -> anyhow::Result<FileStore> {
        match &self.state_dir {
            Some(dir) => Ok(FileStore::new(dir)),
            None => FileStore::in_default_dir(),
        }
    }
}
