use crate::cli::Cli;
use crate::netutils::{parse_port_range, resolve_target, reverse_lookup};
use crate::probes::{default_probe, Probe};
use crate::service::{ServiceTable, WellKnownServices};
use crate::types::{ScanError, ScanOutcome, ScanReport};
use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Orchestrate a whole scan from CLI arguments and print the result.
pub async fn run(cli: Cli) -> Result<()> {
    let (start, end) = parse_port_range(&cli.ports)?;
    let timeout = Duration::from_millis(cli.connect_timeout_ms);
    let probe = default_probe();

    let ip = resolve_target(&cli.target).await?;
    let open = get_open_ports(probe.as_ref(), ip, start, end, timeout).await;

    if cli.json {
        let report = ScanReport {
            target: cli.target.clone(),
            ip: ip.to_string(),
            open_ports: open,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.verbose {
        let display = reverse_lookup(ip).await.unwrap_or_else(|| ip.to_string());
        println!(
            "{}",
            render_report(&display, &ip.to_string(), &open, &WellKnownServices)
        );
    } else {
        println!("{}", format!("Open ports on {}", ip).bold());
        for port in &open {
            println!("  {}", port.to_string().green());
        }
    }

    Ok(())
}

/// The core operation: resolve, probe the range, shape the result.
///
/// Returns a bare ascending port list, or the rendered report when
/// `verbose` is set. Only resolution can fail; per-port connect
/// failures are absorbed as "not open".
pub async fn scan(
    target: &str,
    port_range: (u16, u16),
    verbose: bool,
    timeout: Duration,
    probe: &dyn Probe,
    services: &dyn ServiceTable,
) -> Result<ScanOutcome, ScanError> {
    let ip = resolve_target(target).await?;
    let open = get_open_ports(probe, ip, port_range.0, port_range.1, timeout).await;

    if !verbose {
        return Ok(ScanOutcome::Ports(open));
    }

    let display = reverse_lookup(ip).await.unwrap_or_else(|| ip.to_string());
    Ok(ScanOutcome::Report(render_report(
        &display,
        &ip.to_string(),
        &open,
        services,
    )))
}

/// Probe every port in `[start, end]` strictly one after another, each
/// attempt bounded by `timeout`. Worst-case wall clock is therefore
/// `(end - start + 1) * timeout`. A reversed range scans nothing.
pub async fn get_open_ports<P: Probe + ?Sized>(
    probe: &P,
    ip: IpAddr,
    start: u16,
    end: u16,
    timeout: Duration,
) -> Vec<u16> {
    let mut open = Vec::new();
    if start > end {
        return open;
    }

    let pb = ProgressBar::new(u64::from(end - start) + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    for port in start..=end {
        let addr = SocketAddr::new(ip, port);
        if probe.is_open(addr, timeout).await {
            debug!(port, probe = probe.name(), "port open");
            open.push(port);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    open
}

/// Render the verbose report. `display` is the reverse-resolved hostname
/// (or the address itself when reverse lookup failed, in which case the
/// parenthesised form is skipped).
pub fn render_report(
    display: &str,
    addr: &str,
    open_ports: &[u16],
    services: &dyn ServiceTable,
) -> String {
    let mut out = if display != addr {
        format!("Open ports for {} ({})\nPORT     SERVICE", display, addr)
    } else {
        format!("Open ports for {}\nPORT     SERVICE", addr)
    };
    for &port in open_ports {
        let service = services.lookup(port).unwrap_or("unknown");
        out.push_str(&format!("\n{:<9}{}", port, service));
    }
    out
}
