// Statement sources

pub mod mysql;

use crate::ast::Statement;
use crate::error::ParseError;

/// Yields parsed statements one at a time
pub trait StatementSource {
    /// Next statement, `Ok(None)` at end of input
    fn next_statement(&mut self) -> Result<Option<Statement>, ParseError>;
}

/// Already-parsed statements, handy when the AST is built by hand
impl StatementSource for std::vec::IntoIter<Statement> {
    fn next_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        Ok(self.next())
    }
}
