use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_PATH: &str = "/etc/formpost/formpost.toml";
const ENV_PREFIX: &str = "FORMPOST";

/// Formpost configuration, merged from an optional TOML file and any
/// environment variables prefixed with FORMPOST_ (environment wins).
///
/// Missing SMTP credentials or recipient is a startup error, never a
/// per-request one.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SMTP relay host
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    pub smtp_user: String,
    pub smtp_pass: String,

    /// Envelope sender; defaults to `smtp_user` when unset
    #[serde(default)]
    pub sender: String,

    /// Where relayed submissions are delivered
    pub recipient: String,

    /// Resume upload spool directory
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// CORS origin allow-list; empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Checks that the configured addresses parse, so a
    /// misconfiguration fails at startup instead of surfacing as a
    /// per-request error.
    pub fn validate(&self) -> Result<(), Error> {
        for addr in [&self.sender, &self.recipient] {
            if addr.parse::<lettre::message::Mailbox>().is_err() {
                return Err(Error::Config(format!("invalid address: {}", addr)));
            }
        }

        Ok(())
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_http_port() -> u16 {
    8000
}

/// Loads config from the filesystem and merges it with the
/// environment. An explicit path must exist; the default path is
/// optional so env-only deployments work.
pub fn load(path: Option<&str>) -> Result<Config, Error> {
    let builder = match path {
        Some(p) => config::Config::builder().add_source(config::File::with_name(p)),
        None => config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_PATH).required(false)),
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("allowed_origins"),
        )
        .build()?;

    let mut config: Config = settings.try_deserialize()?;

    if config.sender.is_empty() {
        config.sender = config.smtp_user.clone();
    }

    config.validate()?;

    Ok(config)
}
