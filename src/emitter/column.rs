// Column definitions and column comments

use super::datatype::{map_column_type, TargetType, TypeCheck};
use super::{quote_literal, TranslationState};
use crate::ast::ColumnDefinition;
use crate::error::EmitError;
use crate::keywords::quote_identifier;
use crate::render::Element;

/// Name of the check constraint put on the first JSON column of a script
pub const JSON_CONSTRAINT_NAME: &str = "ensure_json";

/// One entry of the CREATE TABLE column list
#[derive(Debug, Clone)]
pub struct ColumnTranslator {
    name: String,
    target: TargetType,
    not_null: bool,
    /// This column carries the named JSON constraint
    named_json_check: bool,
}

impl ColumnTranslator {
    pub fn new(column: &ColumnDefinition, state: &mut TranslationState) -> Result<Self, EmitError> {
        let target = map_column_type(&column.name, &column.column_type)?;
        let named_json_check =
            matches!(target.check, Some(TypeCheck::Json)) && state.claim_json_constraint();

        Ok(Self {
            name: quote_identifier(&column.name),
            target,
            not_null: column.column_type.not_null,
            named_json_check,
        })
    }

    fn format_check(&self, check: &TypeCheck) -> String {
        match check {
            TypeCheck::Json if self.named_json_check => format!(
                " CONSTRAINT {} CHECK ({} IS JSON)",
                JSON_CONSTRAINT_NAME, self.name
            ),
            TypeCheck::Json => format!(" CHECK ({} IS JSON)", self.name),
            TypeCheck::Values(values) => {
                let values: Vec<String> = values.iter().map(|v| quote_literal(v)).collect();
                format!(" CHECK ({} IN ({}))", self.name, values.join(", "))
            }
        }
    }
}

impl Element for ColumnTranslator {
    fn format(&self) -> String {
        let mut sql = format!("  {} {}", self.name, self.target.text);

        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(check) = &self.target.check {
            sql.push_str(&self.format_check(check));
        }

        sql
    }
}

/// `COMMENT ON COLUMN` for a column with an inline comment
#[derive(Debug, Clone)]
pub struct ColumnCommentTranslator {
    table: String,
    column: String,
    comment: String,
}

impl ColumnCommentTranslator {
    pub fn new(table: &str, column: &str, comment: &str) -> Self {
        Self {
            table: quote_identifier(table),
            column: quote_identifier(column),
            comment: comment.to_string(),
        }
    }
}

impl Element for ColumnCommentTranslator {
    fn format(&self) -> String {
        format!(
            "COMMENT ON COLUMN {}.{} IS {};",
            self.table,
            self.column,
            quote_literal(&self.comment)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ColumnType;

    fn column(name: &str, ty: ColumnType) -> ColumnDefinition {
        ColumnDefinition {
            name: name.to_string(),
            column_type: ty,
        }
    }

    fn render(col: &ColumnDefinition, state: &mut TranslationState) -> String {
        ColumnTranslator::new(col, state).unwrap().format()
    }

    #[test]
    fn test_not_null_column() {
        let ty = ColumnType {
            length: Some("8".to_string()),
            not_null: true,
            ..ColumnType::new("varchar")
        };
        let mut state = TranslationState::new();
        assert_eq!(render(&column("uuid", ty), &mut state), "  uuid varchar2(8) NOT NULL");
    }

    #[test]
    fn test_nullable_column_has_no_null_token() {
        let mut state = TranslationState::new();
        let sql = render(&column("desc", ColumnType::new("longtext")), &mut state);
        assert_eq!(sql, "  \"desc\" text");
        assert!(!sql.contains("NULL"));
    }

    #[test]
    fn test_enum_check_uses_quoted_name() {
        let ty = ColumnType {
            enum_values: vec!["a1".to_string(), "it's".to_string()],
            not_null: true,
            ..ColumnType::new("enum")
        };
        let mut state = TranslationState::new();
        assert_eq!(
            render(&column("number", ty), &mut state),
            "  \"number\" varchar2(4) NOT NULL CHECK (\"number\" IN ('a1', 'it''s'))"
        );
    }

    #[test]
    fn test_json_constraint_named_once_per_state() {
        let mut state = TranslationState::new();
        let first = render(&column("meta", ColumnType::new("json")), &mut state);
        let second = render(&column("extra", ColumnType::new("json")), &mut state);

        assert_eq!(first, "  meta clob CONSTRAINT ensure_json CHECK (meta IS JSON)");
        assert_eq!(second, "  extra clob CHECK (extra IS JSON)");

        let mut fresh = TranslationState::new();
        let again = render(&column("meta", ColumnType::new("json")), &mut fresh);
        assert_eq!(again, first);
    }

    #[test]
    fn test_non_json_column_does_not_claim_constraint() {
        let mut state = TranslationState::new();
        render(&column("id", ColumnType::new("int")), &mut state);
        let json = render(&column("doc", ColumnType::new("json")), &mut state);
        assert!(json.contains("CONSTRAINT ensure_json"));
    }

    #[test]
    fn test_unmapped_type_propagates() {
        let mut state = TranslationState::new();
        let err = ColumnTranslator::new(&column("pt", ColumnType::new("point")), &mut state)
            .unwrap_err();
        assert!(matches!(err, EmitError::UnmappedType { .. }));
    }

    #[test]
    fn test_column_comment() {
        let comment = ColumnCommentTranslator::new("draft", "number", "编号");
        assert_eq!(
            comment.format(),
            "COMMENT ON COLUMN draft.\"number\" IS '编号';"
        );
    }

    #[test]
    fn test_column_comment_escapes_quotes() {
        let comment = ColumnCommentTranslator::new("user", "name", "owner's name");
        assert_eq!(
            comment.format(),
            "COMMENT ON COLUMN \"user\".name IS 'owner''s name';"
        );
    }
}
