use clap::Parser;
use std::path::PathBuf;

use crate::config::PoolSource;

/// Themis - mock backend for compliance questionnaires
#[derive(Parser, Debug, Clone)]
#[command(name = "themis", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "THEMIS_CONFIG", default_value = "themis.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "THEMIS_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "THEMIS_PORT")]
    pub port: Option<u16>,

    /// Seed for the pool and audit trail generators
    #[arg(long, env = "THEMIS_SEED")]
    pub seed: Option<u64>,

    /// Where the served questionnaire pool comes from
    #[arg(long, env = "THEMIS_SOURCE", value_enum)]
    pub source: Option<PoolSource>,
}
