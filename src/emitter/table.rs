// CREATE TABLE
//
// Output order is fixed: table, indexes, table comment, column comments.

use super::column::{ColumnCommentTranslator, ColumnTranslator};
use super::index::IndexTranslator;
use super::{quote_literal, TranslationState};
use crate::ast::CreateTable;
use crate::error::EmitError;
use crate::keywords::quote_identifier;
use crate::options::TableOptions;
use crate::render::{Container, Element};

pub struct TableTranslator {
    name: String,
    columns: Container,
    column_comments: Container,
    indexes: Container,
    comment: Option<String>,
}

impl TableTranslator {
    pub fn new(create: &CreateTable, state: &mut TranslationState) -> Result<Self, EmitError> {
        let mut columns = Container::with_separator(",\n", true);
        let mut column_comments = Container::with_separator("\n", true);
        let mut indexes = Container::with_separator("\n", true);

        for column in &create.spec.columns {
            columns.append(ColumnTranslator::new(column, state)?);
            if let Some(comment) = &column.column_type.comment {
                column_comments.append(ColumnCommentTranslator::new(
                    &create.name,
                    &column.name,
                    comment,
                ));
            }
        }

        for index in &create.spec.indexes {
            indexes.append(IndexTranslator::new(&create.name, index));
        }

        let comment = TableOptions::parse(&create.spec.options)
            .comment()
            .map(str::to_string);

        tracing::trace!(
            table = %create.name,
            columns = columns.len(),
            indexes = indexes.len(),
            "translated table"
        );

        Ok(Self {
            name: create.name.clone(),
            columns,
            column_comments,
            indexes,
            comment,
        })
    }
}

impl Element for TableTranslator {
    fn format(&self) -> String {
        let name = quote_identifier(&self.name);
        let mut parts = vec![format!(
            "CREATE TABLE {} (\n{}\n);",
            name,
            self.columns.render()
        )];

        if !self.indexes.is_empty() {
            parts.push(self.indexes.render());
        }
        if let Some(comment) = &self.comment {
            parts.push(format!("COMMENT ON TABLE {} IS {};", name, quote_literal(comment)));
        }
        if !self.column_comments.is_empty() {
            parts.push(self.column_comments.render());
        }

        parts.join("\n")
    }
}
