//! Token command: print a fresh random token.

use anyhow::Result;
use cpkit_core::hash;

pub fn run_token() -> Result<()> {
    let token = hash::random_token()?;
    println!("{token}");
    Ok(())
}
