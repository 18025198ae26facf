//! The execution context and the fetch-decode-execute loop.

use std::io::{self, Read, Write};

use crate::error::BrainfuckError;
use crate::{filter, loops, optimizer, token};

/// Number of cells on the memory tape.
pub const TAPE_LEN: usize = 60_000;

/// An optimizing Brainfuck interpreter.
///
/// One interpreter owns its optimized instruction stream, a 60,000-cell
/// memory tape initialized to zero, a cursor into that tape, and the byte
/// input source and output sink the program talks to. Interpreters share
/// nothing; independent programs can run on separate threads without any
/// synchronization.
///
/// Construction filters and optimizes the source. Loop balance is only
/// validated when [`run`](Brainfuck::run) is called.
pub struct Brainfuck<I, O> {
    code: Vec<u8>,
    memory: Vec<u8>,
    pointer: usize,
    input: I,
    output: O,
}

impl Brainfuck<io::Stdin, io::Stdout> {
    /// Create an interpreter bound to the process's stdin and stdout.
    ///
    /// Returns `None` when `source` is empty or all-whitespace: there is
    /// nothing to run. A non-empty source always constructs, even if it
    /// contains no Brainfuck commands at all.
    pub fn new(source: &str) -> Option<Self> {
        Self::with_io(source, io::stdin(), io::stdout())
    }
}

impl<I: Read, O: Write> Brainfuck<I, O> {
    /// Create an interpreter bound to the given byte source and sink.
    ///
    /// Same construction contract as [`new`](Brainfuck::new); in-memory
    /// buffers work (`&[u8]` as input, `&mut Vec<u8>` as output).
    pub fn with_io(source: &str, input: I, output: O) -> Option<Self> {
        if source.trim().is_empty() {
            return None;
        }
        let mut code = filter::keep_commands(source);
        optimizer::optimize(&mut code);
        Some(Self {
            code,
            memory: vec![0; TAPE_LEN],
            pointer: 0,
            input,
            output,
        })
    }

    /// The optimized instruction stream this interpreter executes.
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Validate loop balance, then execute to completion.
    ///
    /// Fails with [`BrainfuckError::UnbalancedLoops`] before any instruction
    /// runs, or with a memory bounds error mid-run; the tape keeps its last
    /// valid state on abort.
    pub fn run(&mut self) -> Result<(), BrainfuckError> {
        let jumps = loops::resolve(&self.code)?;
        self.execute(&jumps)
    }

    fn execute(&mut self, jumps: &[usize]) -> Result<(), BrainfuckError> {
        let mut pc = 0;
        while pc < self.code.len() {
            match self.code[pc] {
                b'+' => {
                    let cell = &mut self.memory[self.pointer];
                    *cell = cell.wrapping_add(1);
                }
                token::ADD => {
                    let n = token::count(self.code[pc + 1]);
                    let cell = &mut self.memory[self.pointer];
                    *cell = cell.wrapping_add(n);
                    pc += 1;
                }
                b'-' => {
                    let cell = &mut self.memory[self.pointer];
                    *cell = cell.wrapping_sub(1);
                }
                token::SUB => {
                    let n = token::count(self.code[pc + 1]);
                    let cell = &mut self.memory[self.pointer];
                    *cell = cell.wrapping_sub(n);
                    pc += 1;
                }
                b'>' => {
                    if self.pointer >= TAPE_LEN - 1 {
                        return Err(BrainfuckError::MemoryOverflow {
                            ip: pc,
                            cursor: self.pointer,
                        });
                    }
                    self.pointer += 1;
                }
                token::FWD => {
                    let n = token::count(self.code[pc + 1]) as usize;
                    if self.pointer + n > TAPE_LEN - 1 {
                        return Err(BrainfuckError::MemoryOverflow {
                            ip: pc,
                            cursor: self.pointer,
                        });
                    }
                    self.pointer += n;
                    pc += 1;
                }
                b'<' => {
                    if self.pointer == 0 {
                        return Err(BrainfuckError::MemoryUnderflow {
                            ip: pc,
                            cursor: self.pointer,
                        });
                    }
                    self.pointer -= 1;
                }
                token::BACK => {
                    let n = token::count(self.code[pc + 1]) as usize;
                    if self.pointer < n {
                        return Err(BrainfuckError::MemoryUnderflow {
                            ip: pc,
                            cursor: self.pointer,
                        });
                    }
                    self.pointer -= n;
                    pc += 1;
                }
                b'[' => {
                    if self.memory[self.pointer] == 0 {
                        pc = jumps[pc];
                    }
                }
                b']' => {
                    if self.memory[self.pointer] != 0 {
                        pc = jumps[pc];
                    }
                }
                token::CLEAR => {
                    self.memory[self.pointer] = 0;
                }
                b'.' => {
                    // Sink failures are not surfaced; matches the original's
                    // never-throwing output stream.
                    let _ = self.output.write_all(&[self.memory[self.pointer]]);
                }
                b',' => {
                    let mut buf = [0u8; 1];
                    match self.input.read(&mut buf) {
                        // EOF and read failures leave the cell unchanged.
                        Ok(n) if n > 0 => self.memory[self.pointer] = buf[0],
                        _ => {}
                    }
                }
                // Count bytes are consumed together with their command.
                _ => {}
            }
            pc += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(source: &str) -> Brainfuck<io::Empty, io::Sink> {
        Brainfuck::with_io(source, io::empty(), io::sink()).expect("non-empty source")
    }

    #[test]
    fn empty_and_whitespace_sources_do_not_construct() {
        assert!(Brainfuck::new("").is_none());
        assert!(Brainfuck::new(" \t\r\n  ").is_none());
    }

    #[test]
    fn comment_only_source_constructs_and_runs_as_a_no_op() {
        let mut bf = quiet("hello world");
        assert!(bf.code().is_empty());
        assert!(bf.run().is_ok());
    }

    #[test]
    fn wrapping_addition() {
        // 256 increments collapse into packed pairs and wrap back to zero.
        let mut bf = quiet(&"+".repeat(256));
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 0);
    }

    #[test]
    fn wrapping_subtraction() {
        let mut bf = quiet("-");
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 255);
    }

    #[test]
    fn packed_arithmetic_matches_its_count() {
        let mut bf = quiet("+++++++");
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 7);
    }

    #[test]
    fn clear_cell_zeroes_whatever_is_there() {
        let mut bf = quiet("+++++[-]");
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 0);
    }

    #[test]
    fn cursor_can_reach_the_last_cell() {
        let mut bf = quiet(&">".repeat(TAPE_LEN - 1));
        assert!(bf.run().is_ok());
        assert_eq!(bf.pointer, TAPE_LEN - 1);
    }

    #[test]
    fn moving_past_the_last_cell_overflows() {
        let mut bf = quiet(&">".repeat(TAPE_LEN));
        assert!(matches!(
            bf.run(),
            Err(BrainfuckError::MemoryOverflow { .. })
        ));
    }

    #[test]
    fn single_step_overflow_at_the_edge() {
        // The `+` splits the run, so the final `>` stays primitive and the
        // one-step bounds check is the one that fires.
        let source = format!("{}+>", ">".repeat(TAPE_LEN - 1));
        let mut bf = quiet(&source);
        assert!(matches!(
            bf.run(),
            Err(BrainfuckError::MemoryOverflow { .. })
        ));
        assert_eq!(bf.pointer, TAPE_LEN - 1);
    }

    #[test]
    fn moving_left_from_zero_underflows() {
        let mut bf = quiet("<");
        assert!(matches!(
            bf.run(),
            Err(BrainfuckError::MemoryUnderflow { .. })
        ));
    }

    #[test]
    fn packed_move_underflows_when_the_count_is_too_large() {
        // Three right, four left: the packed b4 must refuse from cursor 3.
        let mut bf = quiet(">>><<<<");
        assert!(matches!(
            bf.run(),
            Err(BrainfuckError::MemoryUnderflow { .. })
        ));
        assert_eq!(bf.pointer, 3);
    }

    #[test]
    fn unbalanced_loops_fail_before_execution() {
        let mut bf = quiet("+++[");
        assert!(matches!(bf.run(), Err(BrainfuckError::UnbalancedLoops)));
        // Validation happens first; no instruction ran.
        assert_eq!(bf.memory[0], 0);
    }

    #[test]
    fn input_reads_one_byte_into_the_cell() {
        let mut out = Vec::new();
        let mut bf = Brainfuck::with_io(",.", &b"A"[..], &mut out).unwrap();
        bf.run().unwrap();
        assert_eq!(out, b"A");
    }

    #[test]
    fn input_at_eof_leaves_the_cell_unchanged() {
        let mut bf = Brainfuck::with_io("+++++,", io::empty(), io::sink()).unwrap();
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 5);
    }

    #[test]
    fn output_writes_the_raw_cell_byte() {
        let mut out = Vec::new();
        let source = format!("{}.", "+".repeat(200));
        let mut bf = Brainfuck::with_io(&source, io::empty(), &mut out).unwrap();
        bf.run().unwrap();
        assert_eq!(out, [200]);
    }

    #[test]
    fn loops_skip_and_repeat_on_the_cell_value() {
        // `[>+<-]` moves the cell's value one cell to the right.
        let mut bf = quiet("+++[>+<-]");
        bf.run().unwrap();
        assert_eq!(bf.memory[0], 0);
        assert_eq!(bf.memory[1], 3);
    }
}
