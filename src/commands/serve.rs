use crate::libs::config::Config;
use crate::server;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Flags override `config.json` and `SHIFTBOOK_*` variables.
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Address to listen on")]
    host: Option<String>,
    #[arg(long, short, help = "Port to listen on")]
    port: Option<u16>,
    #[arg(long, help = "SQLite database file")]
    db: Option<PathBuf>,
    #[arg(long, help = "Directory with the front-end files")]
    static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = self.db {
            config.database.path = Some(db);
        }
        if let Some(static_dir) = self.static_dir {
            config.server.static_dir = static_dir;
        }
        config
    }
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = args.apply(Config::read()?.with_env());
    server::serve(&config).await
}
