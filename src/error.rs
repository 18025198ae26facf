//! Fatal interpreter failures.

use thiserror::Error;

/// Errors that abort a Brainfuck run.
///
/// All variants are fatal: execution either never starts (unbalanced loops)
/// or halts immediately with the tape left in its last valid state. A failed
/// or exhausted input read is deliberately *not* represented here; the input
/// command leaves the cell unchanged and execution continues.
#[derive(Debug, Error)]
pub enum BrainfuckError {
    /// Loop brackets never close, or close more than they open.
    #[error("unbalanced loops: check the source code")]
    UnbalancedLoops,

    /// The cursor would move past the last tape cell.
    #[error("memory overflow at instruction {ip} (cursor={cursor})")]
    MemoryOverflow { ip: usize, cursor: usize },

    /// The cursor would move below the first tape cell.
    #[error("memory underflow at instruction {ip} (cursor={cursor})")]
    MemoryUnderflow { ip: usize, cursor: usize },
}
