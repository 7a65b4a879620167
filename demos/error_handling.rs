//! Demonstrate error handling for invalid Rill input.

fn main() {
    // Unterminated string literal
    match rill_syntax::parse_source("print(\"unclosed)\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(rill_syntax::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
        Err(rill_syntax::Error::Parse(e)) => {
            println!("Parse error: {e}");
        }
    }

    println!();

    // Assignment to something that is not a variable
    match rill_syntax::parse_source("1 = x\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(rill_syntax::Error::Lex(e)) => {
            println!("Lex error: {e}");
        }
        Err(rill_syntax::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
    }

    println!();

    // Unclosed block
    match rill_syntax::parse_source("while x {\n\tx = x + 1\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(e) => println!("Error: {e}"),
    }
}
