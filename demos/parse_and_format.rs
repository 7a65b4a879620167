//! Parse a Rill program and re-format it canonically.

use rill_syntax::Stmt;

fn main() {
    let input = "\
fn fib int(int n) {
if n<2 { return n }
return fib(n-1)+fib(n-2)
}
int result=fib(10)
print(result)
";

    let program = rill_syntax::parse_source(input).expect("parse failed");

    println!("Top-level statements: {}", program.len());
    for stmt in &program {
        match stmt {
            Stmt::Function { name, params, .. } => {
                println!("  Function: {name} ({} parameter(s))", params.len());
            }
            Stmt::VarDecl { ty, name, .. } => {
                println!("  Variable: {ty} {name}");
            }
            _ => println!("  Statement"),
        }
    }

    let output = rill_syntax::format(&program);
    println!("\nFormatted output:\n{output}");
}
