//! Console rendering. Every function here is pure and returns the text to
//! print; color codes are emitted according to the process-wide
//! `colored::control` state.

use colored::{Color, Colorize};
use esrecon_core::Endpoint;
use std::fmt::Display;

use crate::error::ReconError;
use crate::models::{ClusterHealth, ClusterStats, DocumentSample, HealthStatus, IndexDescriptor};
use crate::probe::ProbeOutcome;

const NA: &str = "N/A";
const RULE_WIDTH: usize = 75;

pub fn status_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Green => Color::Green,
        HealthStatus::Yellow => Color::Yellow,
        HealthStatus::Red => Color::Red,
        HealthStatus::Unknown => Color::White,
    }
}

fn or_na<T: Display>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| NA.to_string())
}

fn labeled(label: &str, value: impl Display) -> String {
    format!("{}{}", format!("{:<18}: ", label).white(), value)
}

pub fn connecting(endpoint: &Endpoint) -> String {
    format!("[*] Connecting to Elasticsearch at {}...\n", endpoint).cyan().to_string()
}

/// Red `[!]` line for a failed operation.
pub fn diagnostic(operation: &str, err: &ReconError) -> String {
    format!("[!] Error {}: {}", operation, err).red().to_string()
}

pub fn probe_outcome(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Created { index } => {
            format!("\n{}", format!("[+] Successfully created index: {}", index).green())
        }
        ProbeOutcome::Rejected { status, body, .. } => format!(
            "[-] Could not create index (might be read-only): {} - {}",
            status.as_u16(),
            body
        )
        .yellow()
        .to_string(),
        ProbeOutcome::Failed { error, .. } => diagnostic("creating index", error),
    }
}

pub fn no_indices() -> String {
    "[!] No indices found or unable to connect.".red().to_string()
}

pub fn cluster_overview(health: &ClusterHealth, stats: &ClusterStats) -> String {
    let status_text = health
        .status
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| NA.to_string());
    let status_col = status_color(health.health_status());
    let lines = [
        format!("\n{}", "====== Cluster Overview ======".cyan()),
        labeled("Cluster Name", or_na(health.cluster_name.as_deref()).bright_white()),
        labeled("Status", status_text.color(status_col)),
        labeled("Number of Nodes", or_na(health.number_of_nodes.as_deref()).bright_white()),
        labeled("Number of Indices", or_na(stats.index_count()).bright_white()),
        labeled("Total Docs", or_na(stats.doc_count()).bright_white()),
        labeled("Total Size", format!("{:.2} MB", stats.store_size_mib()).bright_white()),
    ];
    lines.join("\n")
}

pub fn index_row(idx: &IndexDescriptor) -> String {
    let name = idx.index.as_deref().unwrap_or("");
    let docs = idx.docs_count.as_deref().unwrap_or("0");
    let size = idx.store_size.as_deref().unwrap_or("0");
    let status = idx.health.as_deref().unwrap_or("unknown").to_uppercase();
    let color = status_color(HealthStatus::parse(&status));
    format!(
        "{}{}",
        format!("{:40} {:>10} {:>10} ", name, docs, size).bright_white(),
        format!("{:>10}", status).color(color)
    )
}

pub fn index_table(indices: &[IndexDescriptor]) -> String {
    let mut lines = vec![
        format!("\n{}", "====== All Indices ======".magenta()),
        format!("{:40} {:>10} {:>10} {:>10}", "Index Name", "Docs", "Size (MB)", "Status")
            .yellow()
            .to_string(),
        "-".repeat(RULE_WIDTH),
    ];
    lines.extend(indices.iter().map(index_row));
    lines.join("\n")
}

pub fn sample_dump_header(top: usize) -> String {
    format!("\n{}", format!("====== Top {} Indices Sample Dump ======", top).cyan())
}

pub fn index_section(index: Option<&str>) -> String {
    format!("\n{}", format!("--- Index: {} ---", index.unwrap_or(NA)).bright_blue())
}

/// Numbered document entry; `n` starts at 1.
pub fn document(n: usize, sample: &DocumentSample) -> String {
    let payload = sample.payload();
    let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!("{}\n{}", format!("\nDocument {}:", n).bright_green(), body)
}
