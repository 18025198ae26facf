//! Source filtering: everything that is not one of the eight Brainfuck
//! commands is a comment.

/// Keep only Brainfuck command characters, preserving their order.
pub fn keep_commands(source: &str) -> Vec<u8> {
    source
        .bytes()
        .filter(|b| matches!(b, b'>' | b'<' | b'+' | b'-' | b'.' | b',' | b'[' | b']'))
        .collect()
}
