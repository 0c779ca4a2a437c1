// DROP TABLE IF EXISTS
//
// Oracle has no IF EXISTS on DROP TABLE, so the drop runs inside an
// anonymous block that swallows the "table does not exist" failure.

use crate::ast::DropTable;
use crate::keywords::quote_identifier;
use crate::render::Element;

#[derive(Debug, Clone)]
pub struct DropTranslator {
    drop: DropTable,
}

impl DropTranslator {
    pub fn new(drop: &DropTable) -> Self {
        Self { drop: drop.clone() }
    }
}

impl Element for DropTranslator {
    /// Empty for a drop without IF EXISTS
    fn format(&self) -> String {
        if !self.drop.if_exists {
            return String::new();
        }

        let blocks: Vec<String> = self
            .drop
            .names
            .iter()
            .map(|name| {
                // the name sits inside a string literal
                let name = quote_identifier(name).replace('\'', "''");
                format!(
                    "BEGIN\n   EXECUTE IMMEDIATE 'DROP TABLE {}';\nEXCEPTION\n   WHEN OTHERS THEN NULL;\nEND;",
                    name
                )
            })
            .collect();

        blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drop(names: &[&str], if_exists: bool) -> DropTranslator {
        DropTranslator::new(&DropTable {
            names: names.iter().map(|n| n.to_string()).collect(),
            if_exists,
        })
    }

    #[test]
    fn test_drop_if_exists() {
        assert_eq!(
            drop(&["draft"], true).format(),
            "BEGIN\n   EXECUTE IMMEDIATE 'DROP TABLE draft';\nEXCEPTION\n   WHEN OTHERS THEN NULL;\nEND;"
        );
    }

    #[test]
    fn test_unconditional_drop_is_empty() {
        assert_eq!(drop(&["draft"], false).format(), "");
    }

    #[test]
    fn test_drop_several_tables() {
        let sql = drop(&["a", "user"], true).format();
        assert_eq!(sql.matches("BEGIN").count(), 2);
        assert!(sql.contains("'DROP TABLE a'"));
        assert!(sql.contains("'DROP TABLE \"user\"'"));
    }
}
