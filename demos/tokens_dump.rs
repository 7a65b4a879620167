//! Tokenize a Rill program and print the token stream.

fn main() {
    let source = "\
fn add int(int a, int b) {
\treturn a + b
}

int total = add(1, 2.5)
print(\"total\", total)
";

    let tokens = rill_syntax::tokenize(source).expect("tokenize failed");

    println!("{} token(s):", tokens.len());
    for token in &tokens {
        println!(
            "  {}:{}\t{}\t{:?}",
            token.span.line, token.span.column, token.kind, token.lexeme
        );
    }
}
