pub mod ast;
mod lexer;
mod parser;
pub mod terms;

use crate::error::RollError;

pub use terms::{has_dice, terms, DiceTerm, Term};

/// Parses an arithmetic-only string (dice already substituted).
pub(crate) fn parse(s: &str) -> Result<ast::Node, RollError> {
    parser::Parser::new(s).parse()
}
