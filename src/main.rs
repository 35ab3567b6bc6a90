use std::fs;
use std::io;

use clap::Parser;
use monkey::{
    get_result,
    interpreter::lexer::{Lexer, TokenKind},
    repl,
};

/// monkey is a tree-walking interpreter for the Monkey programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// The script to run. Without it, an interactive session starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start(io::stdin().lock(), io::stdout()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                &contents
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    if args.tokens {
        print_tokens(&script);
        return;
    }

    match get_result(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}

fn print_tokens(source: &str) {
    let mut lexer = Lexer::new(source);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        println!("{token}");
    }
}
