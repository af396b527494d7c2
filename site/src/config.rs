use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, ensure};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Trunk output, must contain `index.html`.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which returns `None` for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let host = lookup("PORTFOLIO_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse()
            .context("PORTFOLIO_HOST is not an IP address")?;

        let port = match lookup("PORTFOLIO_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORTFOLIO_PORT {raw:?} is not a port number"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = lookup("PORTFOLIO_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let assets_dir = lookup("PORTFOLIO_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets"));

        Ok(Self { host, port, dist_dir, assets_dir })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Fails if the bundle hasn't been built yet.
    pub fn check_dist(&self) -> anyhow::Result<()> {
        ensure!(
            self.index_file().is_file(),
            "{} not found, build the ui with `trunk build` first",
            self.index_file().display()
        );
        Ok(())
    }
}
