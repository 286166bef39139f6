use es_recon::ReconConfig;
use esrecon_core::{Endpoint, Scheme};
use tracing::Level;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Endpoint,
    pub recon: ReconConfig,
    pub color: bool,
    pub log_level: Level,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Settings {
            endpoint: Endpoint::new(Scheme::from_ssl(cli.ssl), cli.ip.clone(), cli.port),
            recon: ReconConfig { top_indices: cli.top, docs_per_index: cli.docs },
            color: !cli.no_color,
            log_level: log_level(cli.verbose),
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
