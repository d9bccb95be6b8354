// tests/netutils_unit.rs
use portlite_scan::netutils::{parse_port_range, resolve_target};
use portlite_scan::types::ScanError;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn parse_range_and_single_port() {
    assert_eq!(parse_port_range("440-445").unwrap(), (440, 445));
    assert_eq!(parse_port_range("443").unwrap(), (443, 443));
    assert_eq!(parse_port_range(" 20 - 25 ").unwrap(), (20, 25));
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_port_range("http").is_err());
    assert!(parse_port_range("1-99999").is_err());
    assert!(parse_port_range("").is_err());
}

#[test]
fn parse_keeps_reversed_range() {
    // a reversed range is not an error; the scan loop just probes nothing
    assert_eq!(parse_port_range("445-440").unwrap(), (445, 440));
}

#[tokio::test]
async fn ip_literal_resolves_without_dns() {
    let ip = resolve_target("127.0.0.1").await.unwrap();
    assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
}

#[tokio::test]
async fn unresolvable_name_is_invalid_hostname() {
    // .invalid is reserved (RFC 2606) and can never resolve
    let err = resolve_target("scanner-test.invalid").await.unwrap_err();
    assert_eq!(err, ScanError::InvalidHostname);
    assert_eq!(err.to_string(), "Error: Invalid hostname");
}

#[tokio::test]
async fn malformed_ip_is_invalid_address() {
    let err = resolve_target("999.999.999.999").await.unwrap_err();
    assert_eq!(err, ScanError::InvalidAddress);
    assert_eq!(err.to_string(), "Error: Invalid IP address");
}
