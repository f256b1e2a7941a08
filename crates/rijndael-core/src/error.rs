//! Error type shared by the whole crate.

use core::fmt;

use thiserror::Error;

/// Which caller-supplied buffer a length error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    /// The plaintext or ciphertext block.
    Block,
    /// The cipher key.
    Key,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::Block => f.write_str("block"),
            Buffer::Key => f.write_str("key"),
        }
    }
}

/// Errors surfaced by the cipher facade and the self-test.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A block or key buffer had the wrong length.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// The offending buffer.
        what: Buffer,
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// Table or key-schedule construction produced inconsistent data.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
    /// A built-in known-answer vector did not reproduce.
    #[error("known-answer vector `{vector}` did not reproduce")]
    KnownAnswerMismatch {
        /// Name of the failing vector.
        vector: &'static str,
    },
}

/// Crate result alias.
pub type Result<T> = core::result::Result<T, Error>;
