// MySQL statement stream
//
// The script is tokenized once and cut into statements at top-level `;`.
// Only CREATE TABLE and DROP TABLE are handed to sqlparser; everything else
// is reported as unsupported without being parsed. Table options are cut off
// before parsing and kept as raw text.
// MySQL-only column syntax that sqlparser rejects is rewritten first.

use sqlparser::ast::{ColumnDef, ColumnOption, ObjectType, TableConstraint};
use sqlparser::dialect::MySqlDialect;
use sqlparser::keywords::Keyword;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::{Token, Tokenizer, Word};

use super::StatementSource;
use crate::ast::{
    ColumnDefinition, ColumnType, CreateTable, DropTable, IndexDefinition, IndexKind, Statement,
    TableSpec,
};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementKind {
    CreateTable,
    DropTable,
    Other,
}

/// Reads a MySQL script one statement at a time
pub struct MySqlStatementStream {
    segments: std::vec::IntoIter<Vec<Token>>,
    position: usize,
}

impl MySqlStatementStream {
    pub fn new(sql: &str) -> Result<Self, ParseError> {
        let dialect = MySqlDialect {};
        let tokens = Tokenizer::new(&dialect, sql).tokenize()?;

        Ok(Self {
            segments: split_statements(tokens).into_iter(),
            position: 0,
        })
    }
}

impl StatementSource for MySqlStatementStream {
    fn next_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let Some(segment) = self.segments.next() else {
            return Ok(None);
        };
        self.position += 1;

        self.convert_segment(segment).map(Some)
    }
}

// Conversion helpers
impl MySqlStatementStream {
    fn convert_segment(&self, segment: Vec<Token>) -> Result<Statement, ParseError> {
        match classify(&segment) {
            StatementKind::Other => Ok(Statement::Unsupported(describe(&segment))),
            StatementKind::DropTable => {
                let stmt = self.parse_tokens(segment)?;
                self.convert_statement(stmt, String::new())
            }
            StatementKind::CreateTable => {
                let (body, options) = split_table_options(segment);
                let stmt = self.parse_tokens(normalize_table_body(body))?;
                self.convert_statement(stmt, options)
            }
        }
    }

    /// Parse exactly one statement from `tokens`
    fn parse_tokens(&self, tokens: Vec<Token>) -> Result<sqlparser::ast::Statement, ParseError> {
        let dialect = MySqlDialect {};
        let mut parser = Parser::new(&dialect).with_tokens(tokens);

        let stmt = parser
            .parse_statement()
            .map_err(|e| ParseError::syntax(self.position, e.to_string()))?;

        let next = parser.peek_token();
        if next.token != Token::EOF {
            return Err(ParseError::syntax(
                self.position,
                format!("Expected: end of statement, found: {}", next.token),
            ));
        }

        Ok(stmt)
    }

    fn convert_statement(
        &self,
        stmt: sqlparser::ast::Statement,
        options: String,
    ) -> Result<Statement, ParseError> {
        use sqlparser::ast::Statement as SpStatement;

        match stmt {
            SpStatement::CreateTable(create) => self.convert_create_table(create, options),
            SpStatement::Drop {
                object_type: ObjectType::Table,
                if_exists,
                names,
                ..
            } => {
                if names.is_empty() {
                    return Err(ParseError::MissingTableName {
                        statement: self.position,
                    });
                }
                Ok(Statement::Drop(DropTable {
                    names: names.iter().map(|n| strip_backticks(&n.to_string())).collect(),
                    if_exists,
                }))
            }
            other => Ok(Statement::Unsupported(other.to_string())),
        }
    }

    fn convert_create_table(
        &self,
        create: sqlparser::ast::CreateTable,
        options: String,
    ) -> Result<Statement, ParseError> {
        let name = strip_backticks(&create.name.to_string());

        // CREATE TABLE ... LIKE / AS SELECT
        if create.columns.is_empty() {
            return Err(ParseError::NoColumns {
                statement: self.position,
                table: name,
            });
        }

        let mut columns = Vec::new();
        let mut inline_indexes = Vec::new();
        for col_def in &create.columns {
            columns.push(self.convert_column(col_def, &mut inline_indexes));
        }

        let mut indexes: Vec<IndexDefinition> = create
            .constraints
            .iter()
            .filter_map(|c| self.convert_constraint(c))
            .collect();
        indexes.extend(inline_indexes);

        Ok(Statement::Create(CreateTable {
            name,
            spec: TableSpec {
                columns,
                indexes,
                options,
            },
        }))
    }

    /// Column-level PRIMARY KEY / UNIQUE are pushed onto `inline_indexes`
    fn convert_column(
        &self,
        col: &ColumnDef,
        inline_indexes: &mut Vec<IndexDefinition>,
    ) -> ColumnDefinition {
        let name = strip_backticks(&col.name.value);
        let mut column_type = parse_column_type(&col.data_type.to_string());

        for option in &col.options {
            match &option.option {
                ColumnOption::NotNull => column_type.not_null = true,
                ColumnOption::Null => column_type.not_null = false,
                ColumnOption::Comment(comment) => column_type.comment = Some(comment.clone()),
                ColumnOption::Unique { is_primary, .. } => {
                    let kind = if *is_primary {
                        // MySQL makes primary key columns NOT NULL implicitly
                        column_type.not_null = true;
                        IndexKind::Primary
                    } else {
                        IndexKind::Unique
                    };
                    inline_indexes.push(IndexDefinition {
                        kind,
                        name: name.clone(),
                        columns: vec![name.clone()],
                    });
                }
                _ => {}
            }
        }

        ColumnDefinition { name, column_type }
    }

    /// Only keys survive; FOREIGN KEY, CHECK and FULLTEXT are dropped
    fn convert_constraint(&self, constraint: &TableConstraint) -> Option<IndexDefinition> {
        match constraint {
            TableConstraint::PrimaryKey { columns, .. } => Some(IndexDefinition {
                kind: IndexKind::Primary,
                name: String::new(),
                columns: column_names(columns),
            }),
            TableConstraint::Unique {
                name,
                index_name,
                columns,
                ..
            } => {
                let columns = column_names(columns);
                Some(IndexDefinition {
                    kind: IndexKind::Unique,
                    name: index_or_default(index_name.as_ref().or(name.as_ref()), &columns),
                    columns,
                })
            }
            TableConstraint::Index { name, columns, .. } => {
                let columns = column_names(columns);
                Some(IndexDefinition {
                    kind: IndexKind::Plain,
                    name: index_or_default(name.as_ref(), &columns),
                    columns,
                })
            }
            other => {
                tracing::debug!(constraint = %other, "skipping table constraint");
                None
            }
        }
    }
}

fn is_significant(token: &Token) -> bool {
    !matches!(token, Token::Whitespace(_) | Token::EOF)
}

/// Cut the token stream at top-level semicolons, dropping empty statements
fn split_statements(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        match token {
            Token::SemiColon => {
                let segment = std::mem::take(&mut current);
                if segment.iter().any(is_significant) {
                    segments.push(segment);
                }
            }
            Token::EOF => {}
            other => current.push(other),
        }
    }
    if current.iter().any(is_significant) {
        segments.push(current);
    }

    segments
}

fn classify(segment: &[Token]) -> StatementKind {
    let mut keywords = segment
        .iter()
        .filter(|t| is_significant(t))
        .map(|t| match t {
            Token::Word(word) if word.quote_style.is_none() => word.keyword,
            _ => Keyword::NoKeyword,
        });

    match (keywords.next(), keywords.next(), keywords.next()) {
        (Some(Keyword::CREATE), Some(Keyword::TABLE), _)
        | (Some(Keyword::CREATE), Some(Keyword::TEMPORARY), Some(Keyword::TABLE)) => {
            StatementKind::CreateTable
        }
        (Some(Keyword::DROP), Some(Keyword::TABLE), _)
        | (Some(Keyword::DROP), Some(Keyword::TEMPORARY), Some(Keyword::TABLE)) => {
            StatementKind::DropTable
        }
        _ => StatementKind::Other,
    }
}

/// Short label for an unsupported statement, e.g. `SET`, `INSERT INTO`
fn describe(segment: &[Token]) -> String {
    segment
        .iter()
        .filter(|t| is_significant(t))
        .take(2)
        .map(|t| t.to_string().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `CREATE TABLE t (...) ENGINE=... COMMENT='...'` after the closing
/// parenthesis of the body. Returns the statement tokens and the trimmed
/// options text.
fn split_table_options(mut segment: Vec<Token>) -> (Vec<Token>, String) {
    let mut depth = 0usize;
    let mut body_end = None;

    for (i, token) in segment.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    body_end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    match body_end {
        Some(end) => {
            let tail = segment.split_off(end + 1);
            let options: String = tail.iter().map(source_text).collect();
            (segment, options.trim().to_string())
        }
        None => (segment, String::new()),
    }
}

/// Token text with string literals quoted the way MySQL would write them
fn source_text(token: &Token) -> String {
    match token {
        Token::SingleQuotedString(s) => format!("'{}'", s.replace('\'', "''")),
        Token::DoubleQuotedString(s) => format!("\"{}\"", s.replace('"', "\"\"")),
        other => other.to_string(),
    }
}

/// Rewrite the table body so sqlparser accepts it:
/// `FLOAT(M,D)` and `REAL(M,D)` become custom types, numeric attributes
/// (`UNSIGNED`, `SIGNED`, `ZEROFILL`) are dropped, and key prefix lengths
/// such as `name(191)` are removed from key column lists.
fn normalize_table_body(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;
    let mut item_start = false;
    let mut key_item = false;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let first_of_item = item_start && is_significant(token);
        if first_of_item {
            item_start = false;
            key_item = is_key_clause(token);
        }

        match token {
            Token::LParen if key_item && depth >= 2 => {
                if let Some(end) = prefix_length_end(&tokens, i) {
                    i = end + 1;
                    continue;
                }
                depth += 1;
            }
            Token::LParen => {
                depth += 1;
                item_start = depth == 1;
            }
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Comma if depth == 1 => item_start = true,
            Token::Word(word)
                if depth == 1 && !key_item && !first_of_item && word.quote_style.is_none() =>
            {
                if is_numeric_attribute(word) {
                    i += 1;
                    continue;
                }
                if matches!(word.keyword, Keyword::FLOAT | Keyword::REAL)
                    && next_is_lparen(&tokens, i + 1)
                {
                    out.push(Token::Word(Word {
                        keyword: Keyword::NoKeyword,
                        ..word.clone()
                    }));
                    i += 1;
                    continue;
                }
            }
            _ => {}
        }

        out.push(token.clone());
        i += 1;
    }

    out
}

fn is_key_clause(token: &Token) -> bool {
    matches!(
        token,
        Token::Word(word) if word.quote_style.is_none() && matches!(
            word.keyword,
            Keyword::PRIMARY
                | Keyword::UNIQUE
                | Keyword::KEY
                | Keyword::INDEX
                | Keyword::FULLTEXT
                | Keyword::SPATIAL
                | Keyword::CONSTRAINT
        )
    )
}

fn is_numeric_attribute(word: &Word) -> bool {
    ["UNSIGNED", "SIGNED", "ZEROFILL"]
        .iter()
        .any(|attr| word.value.eq_ignore_ascii_case(attr))
}

fn next_is_lparen(tokens: &[Token], from: usize) -> bool {
    matches!(tokens[from..].iter().find(|t| is_significant(t)), Some(Token::LParen))
}

/// `( <number> )` opening at `open`; returns the index of the `)`
fn prefix_length_end(tokens: &[Token], open: usize) -> Option<usize> {
    let mut rest = tokens
        .iter()
        .enumerate()
        .skip(open + 1)
        .filter(|(_, t)| is_significant(t));

    match (rest.next(), rest.next()) {
        (Some((_, Token::Number(..))), Some((end, Token::RParen))) => Some(end),
        _ => None,
    }
}

/// Split a rendered data type such as `DECIMAL(10,2)`, `INT(11) UNSIGNED` or
/// `ENUM('a','b')` into its parts
pub(crate) fn parse_column_type(text: &str) -> ColumnType {
    let (head, args) = match (text.find('('), text.rfind(')')) {
        (Some(open), Some(close)) if close > open => (
            format!("{} {}", &text[..open], &text[close + 1..]),
            Some(&text[open + 1..close]),
        ),
        _ => (text.to_string(), None),
    };

    let words: Vec<String> = head
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .filter(|w| !matches!(w.as_str(), "unsigned" | "signed" | "zerofill"))
        .collect();
    let name = match words.join(" ").as_str() {
        "double precision" => "double".to_string(),
        "character varying" | "char varying" => "varchar".to_string(),
        other => other.to_string(),
    };

    let mut column_type = ColumnType::new(name);
    match args {
        Some(args) if column_type.name == "enum" || column_type.name == "set" => {
            column_type.enum_values = split_quoted_values(args);
        }
        Some(args) => {
            let mut parts = args.splitn(2, ',').map(|p| p.trim().to_string());
            column_type.length = parts.next().filter(|p| !p.is_empty());
            column_type.scale = parts.next().filter(|p| !p.is_empty());
        }
        None => {}
    }

    column_type
}

/// `'a', 'it''s'` → [a, it's]
fn split_quoted_values(args: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut chars = args.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' && c != '"' {
            continue;
        }
        let quote = c;
        let mut value = String::new();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    value.push(escaped);
                }
            } else if c == quote {
                if chars.peek() == Some(&quote) {
                    chars.next();
                    value.push(quote);
                } else {
                    break;
                }
            } else {
                value.push(c);
            }
        }
        values.push(value);
    }

    values
}

fn column_names<T: std::fmt::Display>(columns: &[T]) -> Vec<String> {
    columns
        .iter()
        .map(|c| strip_backticks(&c.to_string()))
        .collect()
}

/// MySQL names an anonymous index after its first column
fn index_or_default(name: Option<&sqlparser::ast::Ident>, columns: &[String]) -> String {
    match name {
        Some(ident) => strip_backticks(&ident.value),
        None => columns.first().cloned().unwrap_or_default(),
    }
}

/// Strip backticks from identifiers
/// e.g., `users` → users, `db`.`users` → db.users
fn strip_backticks(name: &str) -> String {
    name.trim().replace('`', "")
}
