//! Operator-precedence parser for the Infix expression language.
//!
//! The parser turns a flat string of single-character tokens into an
//! `infix_ast` expression tree with a single left-to-right scan over two
//! explicit stacks. See [`parser::parse_expression`] for the entry point.

pub mod parser;

pub use parser::{parse_expression, ParseError};

#[cfg(test)]
mod tests {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            Builder::new()
                .filter_level(LevelFilter::Debug)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .init();
        });
    }
}

// Integration tests are in the tests/ directory
