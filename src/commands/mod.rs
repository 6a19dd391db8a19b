//! CLI commands for tramnet

pub mod check;
pub mod export;
pub mod lines;
pub mod query;
pub mod route;
pub mod stops;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;
use tramnet_core::config::{NetworkConfig, NetworkSource};
use tramnet_core::error::{Result, TramError};
use tramnet_core::network::{NetworkSnapshot, TransitNetwork};

use crate::cli::{Cli, Commands};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// `--config` if given, otherwise `tramnet.toml` in the working directory.
    /// Command-line flags override file values.
    pub fn config(&self) -> Result<NetworkConfig> {
        let mut config = match &self.cli.config {
            Some(path) => NetworkConfig::load(&self.resolve(path))?,
            None => NetworkConfig::discover(&self.root)?,
        };
        config.strict |= self.cli.strict;
        Ok(config)
    }

    /// Where the snapshot comes from: `--network`, then the config file.
    pub fn source(&self, config: &NetworkConfig) -> Result<NetworkSource> {
        if let Some(path) = &self.cli.network {
            return Ok(NetworkSource::Path(self.resolve(path)));
        }
        let base = self
            .cli
            .config
            .as_deref()
            .map(|path| self.resolve(path))
            .and_then(|path| path.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| self.root.clone());
        config.source(&base).ok_or_else(|| {
            TramError::invalid_value(
                "network",
                "no snapshot given (use --network or set `network` in tramnet.toml)",
            )
        })
    }

    pub fn load_snapshot(&self, config: &NetworkConfig) -> Result<NetworkSnapshot> {
        match self.source(config)? {
            NetworkSource::Path(path) => NetworkSnapshot::load(&path),
            NetworkSource::Snapshot(snapshot) => Ok(snapshot),
        }
    }

    pub fn load_network(&self) -> Result<(TransitNetwork, NetworkConfig)> {
        let config = self.config()?;
        let network = TransitNetwork::from_source(&self.source(&config)?, &config)?;
        debug!(elapsed = ?self.start.elapsed(), "load_network");
        Ok((network, config))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Query { text } => query::execute(ctx, &text.join(" ")),
            Commands::Stops => stops::execute(ctx),
            Commands::Lines => lines::execute(ctx),
            Commands::Route { from, to, by } => route::execute(ctx, from, to, *by),
            Commands::Check { max_km } => check::execute(ctx, *max_km),
            Commands::Export { path } => export::execute(ctx, path),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("tramnet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Query a tram network snapshot.");
        println!();
        println!("Run `tramnet --help` for usage information.");
        Ok(())
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
