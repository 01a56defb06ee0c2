//! Address helpers for reaching the control plane.

use anyhow::{Context, Result};
use std::net::{IpAddr, ToSocketAddrs, UdpSocket};

/// Split a `host:port` string and resolve it to a concrete address.
/// Hostnames are resolved; the first address wins.
pub fn addr_parts(address: &str) -> Result<(IpAddr, u16)> {
    let mut addrs = address
        .to_socket_addrs()
        .with_context(|| format!("invalid address {address:?}"))?;
    let addr = addrs
        .next()
        .with_context(|| format!("address {address:?} resolved to nothing"))?;
    Ok((addr.ip(), addr.port()))
}

/// Decompose an endpoint URL into `(scheme, host, port)`.
///
/// The port falls back to the scheme's well-known default; a scheme without
/// one (and no explicit port) is an error rather than a guess.
pub fn endpoint_parts(endpoint: &str) -> Result<(String, String, u16)> {
    let parsed = url::Url::parse(endpoint).with_context(|| format!("invalid endpoint: {endpoint}"))?;

    let scheme = parsed.scheme().to_string();
    let host = parsed
        .host_str()
        .with_context(|| format!("endpoint missing host: {endpoint}"))?
        .to_string();
    let port = parsed
        .port_or_known_default()
        .with_context(|| format!("endpoint missing port and scheme has no default: {endpoint}"))?;

    Ok((scheme, host, port))
}

/// Best-effort externally-routable address of this host.
///
/// Binds a UDP socket and connects it toward a public address; the OS picks
/// the outbound interface and `local_addr` reveals it. No datagram is sent.
pub fn external_ip() -> Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").context("bind probe socket")?;
    socket
        .connect("8.8.8.8:53")
        .context("no route to a public network")?;
    let ip = socket.local_addr().context("probe socket has no address")?.ip();
    if ip.is_loopback() {
        anyhow::bail!("host has no non-loopback address");
    }
    Ok(ip)
}
