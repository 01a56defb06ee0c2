//! Transport failure model consumed by retry classification.

use std::fmt;
use std::io;

/// Which operation on the connection failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetOp {
    /// Establishing the connection.
    Dial,
    /// Reading from an established connection.
    Read,
    /// Writing to an established connection.
    Write,
    #[default]
    Other,
}

impl NetOp {
    pub fn as_str(self) -> &'static str {
        match self {
            NetOp::Dial => "dial",
            NetOp::Read => "read",
            NetOp::Write => "write",
            NetOp::Other => "other",
        }
    }
}

/// A failed network operation as observed by the store client.
///
/// Carries the three facts classification looks at: whether the operation
/// timed out, which operation it was, and the OS-level error when one was
/// captured.
#[derive(Debug)]
pub struct NetFailure {
    /// Operation exceeded its deadline.
    pub timed_out: bool,
    /// Operation that failed.
    pub op: NetOp,
    /// Underlying OS error, if any.
    pub source: Option<io::Error>,
}

impl NetFailure {
    /// A deadline-exceeded failure on the given operation.
    pub fn timeout(op: NetOp) -> Self {
        Self {
            timed_out: true,
            op,
            source: None,
        }
    }

    /// Wrap an I/O error observed during `op`. The timeout flag is derived
    /// from the error kind.
    pub fn from_io(op: NetOp, err: io::Error) -> Self {
        Self {
            timed_out: err.kind() == io::ErrorKind::TimedOut,
            op,
            source: Some(err),
        }
    }

    /// A failure with no captured OS error (e.g. a closed channel).
    pub fn bare(op: NetOp) -> Self {
        Self {
            timed_out: false,
            op,
            source: None,
        }
    }
}

impl fmt::Display for NetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.op.as_str())?;
        if self.timed_out {
            write!(f, " (timeout)")?;
        }
        if let Some(e) = &self.source {
            write!(f, ": {}", e)?;
        }
        Ok(())
    }
}

impl std::error::Error for NetFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
