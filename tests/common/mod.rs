#![allow(dead_code)]

use rill_syntax::{Stmt, format, parse, parse_source, tokenize};

pub fn roundtrip(input: &str) {
    let tokens = tokenize(input).expect("tokenize failed");
    let program = parse(&tokens).expect("parse failed");
    let output = format(&program);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a program, parse the rendering back, assert the
/// statement count survives and a second rendering is byte-identical.
pub fn assert_render_fidelity(program: &[Stmt]) {
    let formatted = format(program);
    let reparsed = parse_source(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        program.len(),
        reparsed.len(),
        "statement count mismatch\n--- formatted ---\n{formatted}"
    );
    let reformatted = format(&reparsed);
    assert_eq!(
        formatted, reformatted,
        "unstable rendering:\n--- first ---\n{formatted}\n--- second ---\n{reformatted}"
    );
}
