//! Vocabulary of the instruction stream.
//!
//! The optimizer rewrites the filtered source into a byte stream mixing the
//! eight Brainfuck commands with a handful of synthetic commands. Four of the
//! Brainfuck commands have a packed two-byte form: the packed command byte
//! followed by a count byte carrying the repetition.

/// Set the current cell to zero (replaces the `[-]` / `[+]` idiom).
pub const CLEAR: u8 = b'Z';

/// Packed increment: `i` followed by a count byte.
pub const ADD: u8 = b'i';
/// Packed decrement: `d` followed by a count byte.
pub const SUB: u8 = b'd';
/// Packed move-right: `f` followed by a count byte.
pub const FWD: u8 = b'f';
/// Packed move-left: `b` followed by a count byte.
pub const BACK: u8 = b'b';

/// Largest repetition a single count byte can carry.
///
/// Counts are encoded as `b'0' + n`. With the cap, the highest count byte is
/// `b'X'` (88), below `b'['` (91) and `b']'` (93), so a count byte can never
/// be mistaken for a loop bracket.
pub const MAX_RUN: usize = 40;

const COUNT_BASE: u8 = b'0';

/// Encode a repetition count into its count byte. Valid for `2..=MAX_RUN`.
pub fn count_byte(n: usize) -> u8 {
    debug_assert!((2..=MAX_RUN).contains(&n));
    COUNT_BASE + n as u8
}

/// Decode a count byte back into the repetition it carries.
pub fn count(b: u8) -> u8 {
    b - COUNT_BASE
}

/// Packed form of a command, if it has one.
pub fn packed(cmd: u8) -> Option<u8> {
    match cmd {
        b'>' => Some(FWD),
        b'<' => Some(BACK),
        b'+' => Some(ADD),
        b'-' => Some(SUB),
        _ => None,
    }
}

/// Is this byte the command half of a packed pair?
pub fn is_packed(cmd: u8) -> bool {
    matches!(cmd, FWD | BACK | ADD | SUB)
}
