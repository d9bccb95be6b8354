use serde::Serialize;
use thiserror::Error;

/// Only target resolution can fail a scan; everything after it degrades
/// instead of erroring. The display strings match the original tool's
/// output so callers checking the error text keep working.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Forward resolution failed and the target looks like a name.
    #[error("Error: Invalid hostname")]
    InvalidHostname,
    /// Forward resolution failed and the target looks like a malformed IP.
    #[error("Error: Invalid IP address")]
    InvalidAddress,
}

/// What a scan hands back: a bare port list, or the rendered report
/// when verbose output was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Ports(Vec<u16>),
    Report(String),
}

#[derive(Debug, Serialize, Clone)]
pub struct ScanReport {
    pub target: String,
    pub ip: String,
    pub open_ports: Vec<u16>,
}
