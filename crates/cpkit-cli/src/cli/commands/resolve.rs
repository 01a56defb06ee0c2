//! Resolve command: split and resolve a host:port address.

use anyhow::Result;
use cpkit_core::netutil;

pub fn run_resolve(address: &str) -> Result<()> {
    let (ip, port) = netutil::addr_parts(address)?;
    println!("{ip} {port}");
    Ok(())
}
