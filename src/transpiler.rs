// Main SqlTranspiler

use crate::ast::Statement;
use crate::emitter::{DropTranslator, TableTranslator, TranslationState};
use crate::error::TranspileError;
use crate::parser::mysql::MySqlStatementStream;
use crate::parser::StatementSource;
use crate::render::Container;

/// Translates MySQL CREATE TABLE / DROP TABLE scripts into Oracle DDL.
///
/// Holds no state between calls; everything a run needs lives inside
/// [`SqlTranspiler::translate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlTranspiler;

impl SqlTranspiler {
    pub fn new() -> Self {
        Self
    }

    /// Convert a whole MySQL script
    pub fn convert(&self, sql: &str) -> Result<String, TranspileError> {
        let mut stream = MySqlStatementStream::new(sql)?;
        self.translate(&mut stream)
    }

    /// Pull statements from `source` until it is exhausted and render the script
    pub fn translate<S: StatementSource>(&self, source: &mut S) -> Result<String, TranspileError> {
        let mut state = TranslationState::new();
        let mut container = Container::with_separator("\n", true);
        let mut skipped = 0usize;

        while let Some(stmt) = source.next_statement()? {
            match stmt {
                Statement::Drop(drop) if drop.if_exists => {
                    container.append(DropTranslator::new(&drop));
                }
                Statement::Drop(drop) => {
                    tracing::debug!(tables = ?drop.names, "skipping DROP TABLE without IF EXISTS");
                    skipped += 1;
                }
                Statement::Create(create) => {
                    container.append(TableTranslator::new(&create, &mut state)?);
                }
                Statement::Unsupported(kind) => {
                    tracing::debug!(statement = %kind, "skipping unsupported statement");
                    skipped += 1;
                }
            }
        }

        tracing::info!(translated = container.len(), skipped, "translation finished");
        Ok(container.render())
    }
}

/// Shorthand for `SqlTranspiler::new().convert(sql)`
pub fn to_oracle(sql: &str) -> Result<String, TranspileError> {
    SqlTranspiler::new().convert(sql)
}
