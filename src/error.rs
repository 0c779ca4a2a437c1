// Error types

use thiserror::Error;

/// Errors raised while tokenizing or parsing the MySQL script
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Tokenize error: {message}")]
    Tokenize { message: String },

    /// `statement` is the 1-based position of the statement in the script
    #[error("Parse error in statement {statement}: {message}")]
    Syntax { statement: usize, message: String },

    #[error("Parse error in statement {statement}: DROP TABLE missing table name")]
    MissingTableName { statement: usize },

    /// `CREATE TABLE ... LIKE` and `CREATE TABLE ... AS SELECT` carry no column list
    #[error("Parse error in statement {statement}: CREATE TABLE {table} has no column definitions")]
    NoColumns { statement: usize, table: String },
}

impl ParseError {
    pub fn syntax(statement: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            statement,
            message: message.into(),
        }
    }
}

impl From<sqlparser::tokenizer::TokenizerError> for ParseError {
    fn from(err: sqlparser::tokenizer::TokenizerError) -> Self {
        ParseError::Tokenize {
            message: err.to_string(),
        }
    }
}

/// Errors raised while building Oracle DDL from a parsed statement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    #[error("Emit error: no Oracle mapping for MySQL type '{type_name}' (column '{column}')")]
    UnmappedType { column: String, type_name: String },

    #[error("Emit error: invalid length/scale literal '{literal}' (column '{column}')")]
    InvalidLength { column: String, literal: String },
}

/// Top-level transpiler errors
#[derive(Debug, Error)]
pub enum TranspileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_error_wraps_source_message() {
        let err: TranspileError = EmitError::UnmappedType {
            column: "geo".to_string(),
            type_name: "geometry".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Emit error: no Oracle mapping for MySQL type 'geometry' (column 'geo')"
        );
    }

    #[test]
    fn test_syntax_error_reports_statement_index() {
        let err = ParseError::syntax(3, "Expected: ), found: EOF");
        assert_eq!(
            err.to_string(),
            "Parse error in statement 3: Expected: ), found: EOF"
        );
    }

    #[test]
    fn test_no_columns_names_table() {
        let err = ParseError::NoColumns {
            statement: 1,
            table: "copy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error in statement 1: CREATE TABLE copy has no column definitions"
        );
    }
}
