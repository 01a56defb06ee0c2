//! Classify transport failures as retry-safe or not.

use super::failure::{NetFailure, NetOp};
use std::io;

/// Decide whether the failed operation may be safely re-attempted.
///
/// Flat rule table, first match wins:
/// 1. timeout → retry
/// 2. dial → no retry (connection attempts are the caller's backoff problem)
/// 3. read → retry (read failures on an established connection are assumed
///    transient)
/// 4. connection refused → retry
/// 5. anything else → no retry
///
/// Write failures intentionally fall through to rules 4–5: writes are not
/// assumed idempotent.
pub fn is_retryable(failure: &NetFailure) -> bool {
    if failure.timed_out {
        return true;
    }
    match failure.op {
        NetOp::Dial => false,
        NetOp::Read => true,
        NetOp::Write | NetOp::Other => connection_refused(failure.source.as_ref()),
    }
}

fn connection_refused(err: Option<&io::Error>) -> bool {
    let Some(err) = err else {
        return false;
    };
    if err.kind() == io::ErrorKind::ConnectionRefused {
        return true;
    }
    #[cfg(unix)]
    if err.raw_os_error() == Some(libc::ECONNREFUSED) {
        return true;
    }
    false
}
