//! Retry classification for transport failures.
//!
//! This module only answers "is this failure safe to re-attempt?". Attempt
//! counting, backoff timing, and retry budgets belong to the caller's retry
//! loop, which consumes the boolean produced here.

mod classify;
mod failure;

pub use classify::is_retryable;
pub use failure::{NetFailure, NetOp};
