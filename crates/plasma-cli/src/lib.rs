//! Plasma CLI Library
//!
//! Boots the host in a working directory with the conventions plugin and
//! reports what it sees.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use plasma_core::{
    normalize_id, ConventionsConfig, ConventionsPlugin, HostApp, PhysicalFileSystem,
    PluginRegistry,
};

#[derive(Debug, Parser)]
#[command(name = "plasma", version, about = "Inspect Plasma project action conventions")]
pub struct Cli {
    /// Working directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub wd: Option<PathBuf>,

    /// YAML file with conventions settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not register src/ and the composed src/ as discovery roots
    #[arg(long, global = true)]
    pub no_roots: bool,

    /// Keep default action ids instead of stripping src. prefixes
    #[arg(long, global = true)]
    pub no_normalize: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List discovery roots
    Roots,
    /// List discovered actions as `id<TAB>path`
    Actions,
    /// Normalize action ids
    Normalize {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl Cli {
    /// Config file settings with command-line overrides applied.
    pub fn conventions_config(&self) -> Result<ConventionsConfig> {
        let mut config = match &self.config {
            Some(path) => ConventionsConfig::load(path)?,
            None => ConventionsConfig::default(),
        };
        if self.no_roots {
            config.register_roots = false;
        }
        if self.no_normalize {
            config.normalize_ids = false;
        }
        Ok(config)
    }

    fn working_directory(&self) -> Result<PathBuf> {
        let wd = match &self.wd {
            Some(wd) => wd.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        std::fs::canonicalize(&wd).with_context(|| format!("Invalid working directory {:?}", wd))
    }
}

/// Start the host with the conventions plugin installed.
pub fn boot(cli: &Cli) -> Result<HostApp> {
    let wd = cli.working_directory()?;
    let config = cli.conventions_config()?;

    let mut app = HostApp::new(wd, Arc::new(PhysicalFileSystem));
    let mut registry = PluginRegistry::new();
    registry.register(ConventionsPlugin::new(config));
    registry.init_all(&mut app)?;

    info!("Host started with {} extra roots", app.registered_roots().len());
    Ok(app)
}

/// Execute the command and return its output.
pub fn run(cli: &Cli) -> Result<String> {
    let mut out = String::new();

    match &cli.command {
        Command::Normalize { ids } => {
            for id in ids {
                writeln!(out, "{}", normalize_id(id))?;
            }
        }
        Command::Roots => {
            let app = boot(cli)?;
            for root in app.discovery_roots() {
                writeln!(out, "{} -> {}", root.fs_root.display(), root.base.display())?;
            }
        }
        Command::Actions => {
            let app = boot(cli)?;
            for (id, action) in app.discover() {
                writeln!(out, "{}\t{}", id, action.abs_path().display())?;
            }
        }
    }

    Ok(out)
}
