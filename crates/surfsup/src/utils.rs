use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use surfsup_core::{find_config_file, load_config, ConfigSource, DEFAULT_DB_PATH, DEFAULT_PORT};
use time::{format_description::well_known::Iso8601, OffsetDateTime};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Surfsup - read-only climate API over the Hawaii weather station dataset"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $SURFSUP_CONFIG, ./surfsup.toml,
    /// $XDG_CONFIG_HOME/surfsup/surfsup.toml, /etc/surfsup/surfsup.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "SURFSUP_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, env = "SURFSUP_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SURFSUP_PORT")]
    pub port: Option<String>,

    /// SQLite file holding the measurement and station tables
    #[arg(short, long, env = "SURFSUP_DB_PATH")]
    #[serde(alias = "database")]
    pub db_path: Option<String>,
}

impl Cli {
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
    }

    pub fn db_path(&self) -> String {
        self.db_path
            .clone()
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    }

    /// Fill unset fields from `file`; values already present win.
    pub fn merge(self, file: Cli) -> Cli {
        Cli {
            config: self.config,
            level: self.level.or(file.level),
            domain: self.domain.or(file.domain),
            port: self.port.or(file.port),
            db_path: self.db_path.or(file.db_path),
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("SURFSUP_CONFIG", "surfsup.toml")
    };

    // logger isn't installed yet, so this goes to stderr directly
    let file_config: Cli = match load_config(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ignoring config file {}: {}", source, e);
            Cli::default()
        }
    };

    // CLI args override file config (env vars are handled by clap)
    cli_args.merge(file_config)
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = OffsetDateTime::now_utc()
                .format(&Iso8601::DEFAULT)
                .unwrap_or_default();
            out.finish(format_args!(
                "[{} {}] {}: {}",
                timestamp,
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
