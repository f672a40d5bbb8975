//! Interactive driver for the expression engine.
//!
//! Reads expressions from a file argument, piped stdin, or an interactive prompt. Three forms of
//! input are understood:
//!
//! - `<expr>` — parse and simplify; print the value if every variable is bound, otherwise print
//!   the simplified expression.
//! - `<name> = <expr>` — evaluate the right-hand side and bind it as a variable for later lines.
//! - `diff <var> <expr>` — print the simplified derivative of the expression with respect to
//!   `var`, and its value if it is fully bound.

use deriva::{parse, Ctxt, Differentiate, Eval, Simplify};
use deriva_error::Category;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs::File,
    io::{self, BufReader, IsTerminal, Read},
};

/// Dispatches a single line of input against the context.
fn process_input(input: &str, ctxt: &mut Ctxt) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }

    if let Some((name, value)) = input.split_once('=') {
        assign(name.trim(), value.trim(), ctxt);
    } else if let Some(rest) = input.strip_prefix("diff ") {
        differentiate(rest.trim(), ctxt);
    } else {
        evaluate(input, ctxt);
    }
}

/// Returns true if `name` can be used as a variable name.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false)
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Handles `<name> = <expr>`: evaluates the right-hand side and binds it.
fn assign(name: &str, value: &str, ctxt: &mut Ctxt) {
    if !is_identifier(name) {
        eprintln!("cannot assign to `{}`", name);
        return;
    }

    match parse(value).and_then(|expr| expr.eval(ctxt)) {
        Ok(v) => {
            ctxt.add_var(name, v);
            println!("{} = {}", name, v);
        },
        Err(err) => err.report_to_stderr("input", value),
    }
}

/// Handles `diff <var> <expr>`: prints the simplified derivative, and its value when every
/// variable in it is bound.
fn differentiate(rest: &str, ctxt: &Ctxt) {
    let Some((var, expr_src)) = rest.split_once(char::is_whitespace) else {
        eprintln!("usage: diff <variable> <expression>");
        return;
    };
    let expr_src = expr_src.trim();

    match parse(expr_src).and_then(|expr| expr.differentiate(var)) {
        Ok(derivative) => {
            let derivative = derivative.simplify();
            println!("{}", derivative);
            if let Ok(value) = derivative.eval(ctxt) {
                println!("= {}", value);
            }
        },
        Err(err) => err.report_to_stderr("input", expr_src),
    }
}

/// Handles a bare expression: prints its value, or its simplified form when a name in it is
/// unbound.
fn evaluate(input: &str, ctxt: &Ctxt) {
    match parse(input) {
        Ok(expr) => match expr.eval(ctxt) {
            Ok(value) => println!("{}", value),
            Err(err) if err.kind.category() == Category::Lookup => println!("{}", expr),
            Err(err) => err.report_to_stderr("input", input),
        },
        Err(err) => err.report_to_stderr("input", input),
    }
}

/// Processes each line of a complete source text in order, sharing one context.
fn run_source(input: &str) {
    let mut ctxt = Ctxt::new();
    for line in input.lines() {
        process_input(line, &mut ctxt);
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        run_source(&input);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        run_source(&input);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();
        let mut ctxt = Ctxt::new();

        fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            process_input(&input, ctxt);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut ctxt) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
