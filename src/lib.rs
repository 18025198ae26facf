//! An optimizing Brainfuck interpreter.
//!
//! The crate runs Brainfuck source through a fixed pipeline: comment
//! filtering, a peephole optimization pass (clear-cell idiom recognition and
//! run-length collapsing), loop-jump resolution, and a fetch-decode-execute
//! loop over a 60,000-cell tape of wrapping byte cells.
//!
//! Features and behaviors:
//! - Strict cursor bounds: moving left of cell 0 or right past the last cell
//!   is a fatal error.
//! - `[-]` and `[+]` execute as a single clear-cell instruction; runs of
//!   `><+-` execute as single parameterized instructions.
//! - Loop balance is validated when a run is requested, before any
//!   instruction executes.
//! - Input `,` reads a single byte; on EOF or read failure the current cell
//!   is left unchanged and execution continues.
//! - Output `.` writes the raw cell byte to the sink.
//! - Any input source and output sink implementing the std I/O traits can be
//!   bound in place of stdin/stdout.
//!
//! Quick start:
//!
//! ```
//! use bfopt::Brainfuck;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let mut output = Vec::new();
//! let mut bf = Brainfuck::with_io(code, &[][..], &mut output).expect("program is not empty");
//! bf.run().expect("program should run");
//! assert_eq!(output, b"Hello World!\n");
//! ```

pub mod error;
pub mod filter;
pub mod interpreter;
pub mod loops;
pub mod optimizer;
pub mod token;

pub use error::BrainfuckError;
pub use interpreter::{Brainfuck, TAPE_LEN};
