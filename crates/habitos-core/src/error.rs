//! Error types for store mutations.

/// Errors surfaced by [`crate::ProgressStore`] mutations. The store performs
/// no I/O; every variant is a caller-precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// A block was started while another was still running.
    #[error("an execution block is already active")]
    BlockAlreadyActive,

    /// A block was stopped while none was running.
    #[error("no execution block is active")]
    NoActiveBlock,
}
