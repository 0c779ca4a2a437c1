// Oracle DDL translators

pub mod column;
pub mod datatype;
pub mod drop;
pub mod index;
pub mod table;

pub use column::{ColumnCommentTranslator, ColumnTranslator};
pub use drop::DropTranslator;
pub use index::IndexTranslator;
pub use table::TableTranslator;

/// State shared by every statement of one translation run.
///
/// Created fresh by each `SqlTranspiler::convert` call and passed down
/// explicitly, so separate runs never see each other's state.
#[derive(Debug, Default)]
pub struct TranslationState {
    json_constraint_named: bool,
}

impl TranslationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: for the first JSON column of the run
    pub fn claim_json_constraint(&mut self) -> bool {
        !std::mem::replace(&mut self.json_constraint_named, true)
    }
}

/// Single-quoted SQL string literal
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
