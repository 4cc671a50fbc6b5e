//! Server configuration.

use clap::Parser;
use std::path::PathBuf;

/// Default host address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Command-line arguments for the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "schools-api")]
#[command(about = "Paginated schools collection service")]
#[command(version)]
pub struct Args {
    /// Host address to bind to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// File with one school name per line to load at startup.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's')]
    pub silent: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
            debug: false,
            silent: false,
        }
    }
}

/// Server configuration derived from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Seed file loaded into the store at startup.
    pub seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            seed: args.seed,
        }
    }
}

impl Config {
    /// Returns the bind address for the service.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
