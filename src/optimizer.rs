//! Peephole optimization of the filtered instruction stream.
//!
//! Two ordered rewrite phases, both semantics-preserving:
//!
//! 1. Clear-cell idiom recognition: `[-]` and `[+]` both spin the current
//!    cell to zero under wraparound arithmetic, whatever its starting value,
//!    so either sequence becomes the single [`token::CLEAR`] command.
//! 2. Run-length collapsing: a maximal run of two or more identical `>` `<`
//!    `+` `-` commands becomes one packed pair per [`token::MAX_RUN`]
//!    repetitions, with a remainder of exactly one left as a primitive.
//!
//! Example: `>++++[>++++++<-]>-[[<+++++>>+<-]>-]<<[<]>>>>--.` collapses to
//! `>i4[>i6<-]>-[[<i5f2+<-]>-]b2[<]f4d2.`

use crate::token;

/// Rewrite `code` into a shorter, equivalent instruction stream.
pub fn optimize(code: &mut Vec<u8>) {
    fold_clear_idiom(code);
    collapse_runs(code);
}

/// Replace every literal `[-]` or `[+]` with the clear-cell command.
fn fold_clear_idiom(code: &mut Vec<u8>) {
    let mut out = Vec::with_capacity(code.len());
    let mut i = 0;
    while i < code.len() {
        if code[i] == b'[' && i + 2 < code.len() && matches!(code[i + 1], b'-' | b'+') && code[i + 2] == b']' {
            out.push(token::CLEAR);
            i += 3;
        } else {
            out.push(code[i]);
            i += 1;
        }
    }
    *code = out;
}

/// Collapse maximal runs of identical movement/arithmetic commands into
/// packed pairs, at most [`token::MAX_RUN`] repetitions per pair.
fn collapse_runs(code: &mut Vec<u8>) {
    let mut out = Vec::with_capacity(code.len());
    let mut i = 0;
    while i < code.len() {
        let cmd = code[i];

        // A packed pair is atomic: its count byte is never rescanned, so
        // feeding already-optimized code through here changes nothing.
        if token::is_packed(cmd) && i + 1 < code.len() {
            out.push(cmd);
            out.push(code[i + 1]);
            i += 2;
            continue;
        }

        let Some(packed) = token::packed(cmd) else {
            out.push(cmd);
            i += 1;
            continue;
        };

        let mut run = 1;
        while i + run < code.len() && code[i + run] == cmd {
            run += 1;
        }
        i += run;

        if run == 1 {
            out.push(cmd);
            continue;
        }
        while run >= 2 {
            let n = run.min(token::MAX_RUN);
            out.push(packed);
            out.push(token::count_byte(n));
            run -= n;
        }
        if run == 1 {
            out.push(cmd);
        }
    }
    *code = out;
}
