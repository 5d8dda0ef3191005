use clap::Parser;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
    /// Directory holding one file per note
    pub const CACHE_DIR: &str = "NOTES_CACHE_DIR";
}

/// Startup flags. Every value is required; each flag falls back to its
/// environment variable (a `.env` file is loaded before parsing).
///
/// `-h` is taken by `--host`, so help is only reachable as `--help`.
#[derive(Parser, Debug)]
#[command(name = "notes-backend")]
#[command(about = "Plain-text notes over HTTP, one file per note", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// Server host
    #[arg(short = 'h', long, env = env_vars::HOST)]
    host: String,

    /// Server port
    #[arg(short, long, env = env_vars::PORT)]
    port: u16,

    /// Notes directory (created on startup if missing)
    #[arg(short, long, env = env_vars::CACHE_DIR)]
    cache: PathBuf,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notes_dir: PathBuf,
}

impl Config {
    /// Build the config from command-line flags and environment.
    /// Exits with a usage message when a required value is missing.
    pub fn parse() -> Self {
        Args::parse().into()
    }

    /// Address tuple accepted by `HttpServer::bind`
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            notes_dir: args.cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from([
            "notes-backend",
            "-h",
            "127.0.0.1",
            "-p",
            "3000",
            "-c",
            "/tmp/notes",
        ])
        .unwrap();
        let config = Config::from(args);

        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 3000));
        assert_eq!(config.notes_dir, PathBuf::from("/tmp/notes"));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "notes-backend",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--cache",
            "./notes",
        ])
        .unwrap();
        let config = Config::from(args);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Args::try_parse_from([
            "notes-backend",
            "--host",
            "0.0.0.0",
            "--port",
            "not-a-port",
            "--cache",
            "./notes",
        ]);
        assert!(result.is_err());
    }
}
