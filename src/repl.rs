use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::{
    error::ParseErrorList,
    interpreter::{
        environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::Parser,
    },
};

const PROMPT: &str = ">> ";

/// Runs the interactive loop until the input stream ends.
///
/// Each line is scanned, parsed, and evaluated against one environment that
/// persists for the whole session, so bindings from earlier lines stay
/// visible. A line with syntax errors is reported and not evaluated; a
/// runtime error is reported and the session continues.
///
/// # Errors
/// Returns an error only when reading from `reader` or writing to `writer`
/// fails.
pub fn start<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> std::io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));
    let mut line = String::new();

    loop {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            let errors = ParseErrorList::new(parser.errors().to_vec());
            write!(writer, "{errors}")?;
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => writeln!(writer, "{value}")?,
            Err(error) => writeln!(writer, "runtime error: {error}")?,
        }
    }
}
