// PRIMARY KEY / UNIQUE KEY / KEY → ALTER TABLE and CREATE INDEX
//
// Oracle scopes constraint and index names per schema, so every generated
// name carries the table name.

use crate::ast::{IndexDefinition, IndexKind};
use crate::keywords::quote_identifier;
use crate::render::Element;

pub const PRIMARY_KEY_PREFIX: &str = "pk_";
pub const UNIQUE_INDEX_PREFIX: &str = "unq_";
pub const PLAIN_INDEX_PREFIX: &str = "idx_";

#[derive(Debug, Clone)]
pub struct IndexTranslator {
    table: String,
    index: IndexDefinition,
}

impl IndexTranslator {
    pub fn new(table: &str, index: &IndexDefinition) -> Self {
        Self {
            table: table.to_string(),
            index: index.clone(),
        }
    }

    /// `pk_<table>_<col1>_<col2>...`, or `<prefix><table>_<name>` for other indexes
    pub fn index_name(&self) -> String {
        match self.index.kind {
            IndexKind::Primary => {
                let mut parts = vec![self.table.as_str()];
                parts.extend(self.index.columns.iter().map(String::as_str));
                format!("{}{}", PRIMARY_KEY_PREFIX, parts.join("_"))
            }
            IndexKind::Unique => format!("{}{}_{}", UNIQUE_INDEX_PREFIX, self.table, self.index.name),
            IndexKind::Plain => format!("{}{}_{}", PLAIN_INDEX_PREFIX, self.table, self.index.name),
        }
    }

    fn column_list(&self) -> String {
        let cols: Vec<String> = self
            .index
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect();
        cols.join(", ")
    }
}

impl Element for IndexTranslator {
    fn format(&self) -> String {
        let table = quote_identifier(&self.table);
        let name = self.index_name();
        let cols = self.column_list();

        match self.index.kind {
            IndexKind::Primary => format!(
                "ALTER TABLE {} ADD CONSTRAINT {} PRIMARY KEY ({});",
                table, name, cols
            ),
            IndexKind::Unique => format!("CREATE UNIQUE INDEX {} ON {}({});", name, table, cols),
            IndexKind::Plain => format!("CREATE INDEX {} ON {}({});", name, table, cols),
        }
    }
}
