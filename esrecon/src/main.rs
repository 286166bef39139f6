use anyhow::Result;
use clap::Parser;
use es_recon::{EsClient, RunOutcome};
use std::io::Write;
use std::process::ExitCode;

mod config;

#[derive(Debug, Parser)]
#[command(name = "esrecon", version, about = "Elasticsearch Cluster Reporter & Access Tester")]
pub struct Cli {
    /// Target IP address or hostname (e.g., 192.168.1.100)
    #[arg(long)]
    pub ip: String,
    /// Port number (e.g., 9200)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,
    /// Use HTTPS instead of HTTP (certificates are not verified)
    #[arg(long, default_value_t = false)]
    pub ssl: bool,
    /// Number of indices to sample documents from
    #[arg(long, default_value_t = 5)]
    pub top: usize,
    /// Documents to sample per index
    #[arg(long, default_value_t = 5)]
    pub docs: usize,
    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = config::Settings::from_cli(&cli);

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(settings.color)
        .init();
    if !settings.color {
        colored::control::set_override(false);
    }

    let version = env!("CARGO_PKG_VERSION");
    let core = esrecon_core::version();
    tracing::info!(version, core, "esrecon starting");

    let client = EsClient::new(settings.endpoint.clone())?;
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut rng = rand::thread_rng();
    let outcome = rt.block_on(es_recon::run(&client, &settings.recon, &mut rng, &mut out))?;
    out.flush()?;

    tracing::debug!(?outcome, "finished");
    Ok(match outcome {
        RunOutcome::Completed => ExitCode::SUCCESS,
        RunOutcome::NoIndices => ExitCode::from(1),
    })
}
