//! Info command: runtime facts plus external IP as JSON.

use anyhow::Result;
use cpkit_core::{netutil, runtime};
use serde_json::json;

pub fn run_info() -> Result<()> {
    let stats = runtime::runtime_stats();
    // External IP is best-effort; offline hosts still get their stats.
    let external_ip = match netutil::external_ip() {
        Ok(ip) => Some(ip.to_string()),
        Err(err) => {
            tracing::debug!("external ip discovery failed: {err:#}");
            None
        }
    };

    let out = json!({
        "runtime": stats,
        "external_ip": external_ip,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
