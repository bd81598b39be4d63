// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line and environment configuration.
//!
//! The deployment platform sets `WEBSITE_HOSTNAME`. Its presence selects
//! production mode, which requires a database file. Without it the server
//! runs in development mode and falls back to an in-memory database.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Environment variable whose presence selects production mode.
pub const PRODUCTION_MARKER_VAR: &str = "WEBSITE_HOSTNAME";

/// Free Food University Server - HTTP API for campus food-sharing events
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided in development, uses in-memory database.
    #[arg(short, long, env = "FREEFOOD_DATABASE")]
    pub database: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, env = "FREEFOOD_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind the server to
    #[arg(short, long, env = "FREEFOOD_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Ensure a stats row exists for this college (repeatable)
    #[arg(long = "seed-college", value_name = "NAME")]
    pub seed_college: Vec<String>,
}

/// The runtime environment the server was started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub mode: RunMode,
    pub database: DatabaseLocation,
    pub addr: SocketAddr,
    pub seed_colleges: Vec<String>,
}

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Production mode was selected without a database file.
    DatabaseRequired,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseRequired => write!(
                f,
                "A database path is required in production ({PRODUCTION_MARKER_VAR} is set); \
                 pass --database or set FREEFOOD_DATABASE"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Resolves the configuration from parsed arguments and the value of
    /// `WEBSITE_HOSTNAME`, if set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DatabaseRequired` in production without a database path.
    pub fn resolve(args: Args, website_hostname: Option<&str>) -> Result<Self, ConfigError> {
        let mode: RunMode = if website_hostname.is_some() {
            RunMode::Production
        } else {
            RunMode::Development
        };

        let database: DatabaseLocation = match (mode, args.database) {
            (_, Some(path)) => DatabaseLocation::File(path),
            (RunMode::Development, None) => DatabaseLocation::InMemory,
            (RunMode::Production, None) => return Err(ConfigError::DatabaseRequired),
        };

        Ok(Self {
            mode,
            database,
            addr: SocketAddr::new(args.bind, args.port),
            seed_colleges: args.seed_college,
        })
    }

    /// Resolves the configuration from parsed arguments and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DatabaseRequired` in production without a database path.
    pub fn from_env(args: Args) -> Result<Self, ConfigError> {
        let website_hostname: Option<String> = std::env::var(PRODUCTION_MARKER_VAR).ok();
        Self::resolve(args, website_hostname.as_deref())
    }
}
