use crate::types::ScanError;
use anyhow::Result;
use std::net::IpAddr;
use tokio::net::lookup_host;
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Parse "440-445" or a single "443" into an inclusive (start, end) pair.
/// A reversed pair (start > end) is kept as-is and simply scans nothing.
pub fn parse_port_range(spec: &str) -> Result<(u16, u16)> {
    let spec = spec.trim();
    if let Some((a, b)) = spec.split_once('-') {
        let start: u16 = a.trim().parse()?;
        let end: u16 = b.trim().parse()?;
        Ok((start, end))
    } else {
        let port: u16 = spec.parse()?;
        Ok((port, port))
    }
}

/// Forward-resolve a target to a single address, preferring IPv4.
///
/// An IP literal short-circuits DNS. On resolution failure the error is
/// classified by whether the input could have been a hostname at all:
/// anything containing a letter gets `InvalidHostname`, the rest is
/// treated as a malformed IP literal.
pub async fn resolve_target(target: &str) -> Result<IpAddr, ScanError> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(ip);
    }

    match lookup_host((target, 0u16)).await {
        Ok(addrs) => {
            let mut ips = addrs.map(|sa| sa.ip());
            let mut fallback = None;
            for ip in &mut ips {
                if ip.is_ipv4() {
                    debug!(%ip, target, "resolved target");
                    return Ok(ip);
                }
                fallback.get_or_insert(ip);
            }
            match fallback {
                Some(ip) => {
                    debug!(%ip, target, "resolved target (no IPv4 address)");
                    Ok(ip)
                }
                None => Err(classify_resolution_failure(target)),
            }
        }
        Err(_) => Err(classify_resolution_failure(target)),
    }
}

fn classify_resolution_failure(target: &str) -> ScanError {
    if target.chars().any(|c| c.is_ascii_alphabetic()) {
        ScanError::InvalidHostname
    } else {
        ScanError::InvalidAddress
    }
}

/// Reverse-resolve an address to a display hostname. Failure is not an
/// error; callers fall back to showing the address itself.
pub async fn reverse_lookup(ip: IpAddr) -> Option<String> {
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
    match resolver.reverse_lookup(ip).await {
        Ok(response) => response
            .iter()
            .next()
            .map(|name| name.to_utf8().trim_end_matches('.').to_string()),
        Err(e) => {
            debug!(%ip, error = %e, "reverse lookup failed, falling back to address");
            None
        }
    }
}
