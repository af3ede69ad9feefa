use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;
use crate::domain::member::{default_members, Member};

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub mock: MockSettings,
    /// Roster served by the member directory and used for assignees
    #[serde(default = "default_members")]
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the served pool comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PoolSource {
    /// Seeded random generation
    #[default]
    Generated,
    /// The fixed fixture pool
    Fixtures,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MockSettings {
    /// RNG seed; a random one is drawn (and logged) when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub source: PoolSource,
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    #[serde(default = "default_min_audit_logs")]
    pub min_audit_logs: usize,
    #[serde(default = "default_max_audit_logs")]
    pub max_audit_logs: usize,
}

fn default_min_questions() -> usize {
    50
}

fn default_max_questions() -> usize {
    100
}

fn default_min_audit_logs() -> usize {
    1
}

fn default_max_audit_logs() -> usize {
    5
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            seed: None,
            source: PoolSource::default(),
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
            min_audit_logs: default_min_audit_logs(),
            max_audit_logs: default_max_audit_logs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            mock: MockSettings::default(),
            members: default_members(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `themis.{toml,yaml,json}` from `root`, if present.
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("themis");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(seed) = cli.seed {
            self.mock.seed = Some(seed);
        }
        if let Some(source) = cli.source {
            self.mock.source = source;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
