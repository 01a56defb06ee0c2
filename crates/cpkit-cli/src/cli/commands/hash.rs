//! Hash command: digest a string under a named algorithm.

use anyhow::Result;
use cpkit_core::hash;

/// Compute and print the digest. Unknown algorithm names surface the typed
/// error and a nonzero exit.
pub fn run_hash(input: &str, algorithm: &str) -> Result<()> {
    let digest = hash::digest_named(input, algorithm)?;
    println!("{digest}");
    Ok(())
}
