// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Points awarded for every correct answer.
pub const SCORE_PER_CORRECT: i64 = 10;

const DEFAULT_DATABASE_URL: &str = "sqlite://quiz_data.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Directory that spreadsheet exports accumulate in. Created on demand.
    pub export_dir: PathBuf,
    /// Optional JSON file replacing the built-in quiz catalog.
    pub quiz_file: Option<PathBuf>,
    pub rust_log: String,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    eprintln!("Ignoring invalid BIND_ADDR {:?}: {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let export_dir = env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("exports"));

        let quiz_file = env::var("QUIZ_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            database_url,
            bind_addr,
            export_dir,
            quiz_file,
            rust_log,
            log_dir,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: default_bind_addr(),
            export_dir: PathBuf::from("exports"),
            quiz_file: None,
            rust_log: "info".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}
