use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shunter::evaluate;

/// An interactive shunting-yard calculator: numbers, `+ - * / ^`, the
/// postfix factorial, parentheses, sqrt and trigonometry, and the
/// constants `e` and `pi`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression and exit instead of starting the prompt.
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expr) = args.expr {
        match evaluate(&expr) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = repl() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Prompt, evaluate, print, repeat. Results go to stdout and everything
/// else to stderr, so the session stays pipeable. Evaluation errors are
/// never fatal; end of input and Ctrl-C both end the session cleanly.
fn repl() -> rustyline::Result<()> {
    eprintln!("shunter {}", env!("CARGO_PKG_VERSION"));
    eprintln!("type an expression, Ctrl-D to quit");

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                match evaluate(line) {
                    Ok(value) => println!("{}", value),
                    Err(err) => eprintln!("{}", err),
                }
            }
            Err(ReadlineError::Eof) => {
                eprintln!("caught EOF");
                break;
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("interrupted");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
