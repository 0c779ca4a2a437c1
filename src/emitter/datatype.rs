// MySQL → Oracle column type mapping

use crate::ast::ColumnType;
use crate::error::EmitError;

/// How the length suffix of a target type is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// `(N)` from the declared length, nothing if undeclared
    Declared,
    /// Always this length
    Fixed(u64),
    /// `(length,scale)`, `(length,0)`, or nothing
    Precision,
    /// Width of the longest ENUM/SET value, plus an `IN (...)` check
    Values,
    /// No suffix, plus an `IS JSON` check
    Json,
    /// No suffix
    Unsized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub source: &'static str,
    pub target: &'static str,
    pub sizing: Sizing,
}

const fn map(source: &'static str, target: &'static str, sizing: Sizing) -> TypeMapping {
    TypeMapping {
        source,
        target,
        sizing,
    }
}

/// Every MySQL type name accepted by the parser, with its Oracle counterpart
pub const TYPE_MAPPINGS: &[TypeMapping] = &[
    // Strings and binary strings
    map("varchar", "varchar2", Sizing::Declared),
    map("char", "char", Sizing::Declared),
    map("character", "char", Sizing::Declared),
    map("varbinary", "longvarbinary", Sizing::Declared),
    map("binary", "binary", Sizing::Declared),
    // Integers
    map("int", "int", Sizing::Declared),
    map("integer", "int", Sizing::Declared),
    map("bigint", "bigint", Sizing::Declared),
    map("bit", "bit", Sizing::Declared),
    map("tinyint", "int", Sizing::Declared),
    map("smallint", "smallint", Sizing::Declared),
    map("mediumint", "int", Sizing::Declared),
    map("year", "int", Sizing::Unsized),
    // Fixed and floating point
    map("decimal", "decimal", Sizing::Precision),
    map("dec", "dec", Sizing::Precision),
    map("numeric", "decimal", Sizing::Precision),
    map("float", "float", Sizing::Precision),
    map("double", "double", Sizing::Precision),
    map("real", "double", Sizing::Precision),
    // Text
    map("tinytext", "varchar2", Sizing::Fixed(255)),
    map("text", "clob", Sizing::Unsized),
    map("mediumtext", "text", Sizing::Unsized),
    map("longtext", "text", Sizing::Unsized),
    // Blobs
    map("tinyblob", "blob", Sizing::Fixed(255)),
    map("blob", "blob", Sizing::Fixed(255)),
    map("mediumblob", "blob", Sizing::Fixed(16_777_215)),
    map("longblob", "blob", Sizing::Fixed(i32::MAX as u64)),
    // Boolean
    map("bool", "boolean", Sizing::Unsized),
    map("boolean", "boolean", Sizing::Unsized),
    // Temporal
    map("date", "datetime", Sizing::Unsized),
    map("datetime", "datetime", Sizing::Unsized),
    map("timestamp", "timestamp", Sizing::Unsized),
    map("time", "time", Sizing::Unsized),
    // Structured
    map("json", "clob", Sizing::Json),
    map("enum", "varchar2", Sizing::Values),
    map("set", "varchar2", Sizing::Values),
];

/// Find the mapping for a MySQL type name (case-insensitive)
pub fn lookup(source: &str) -> Option<&'static TypeMapping> {
    TYPE_MAPPINGS
        .iter()
        .find(|m| m.source.eq_ignore_ascii_case(source))
}

/// Check constraint implied by the column type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeCheck {
    Json,
    Values(Vec<String>),
}

/// Oracle type text for one column, e.g. `varchar2(8)`
#[derive(Debug, Clone, PartialEq)]
pub struct TargetType {
    pub text: String,
    pub check: Option<TypeCheck>,
}

/// Map a MySQL column type to its Oracle type
pub fn map_column_type(column: &str, ty: &ColumnType) -> Result<TargetType, EmitError> {
    let mapping = lookup(&ty.name).ok_or_else(|| EmitError::UnmappedType {
        column: column.to_string(),
        type_name: ty.name.clone(),
    })?;

    let mut text = mapping.target.to_string();
    let mut check = None;

    match mapping.sizing {
        Sizing::Declared => {
            if let Some(length) = &ty.length {
                text.push_str(&format!("({})", parse_literal(column, length)?));
            }
        }
        Sizing::Fixed(length) => {
            text.push_str(&format!("({})", length));
        }
        Sizing::Precision => match (&ty.length, &ty.scale) {
            (Some(length), Some(scale)) => {
                let length = parse_literal(column, length)?;
                let scale = parse_literal(column, scale)?;
                text.push_str(&format!("({},{})", length, scale));
            }
            (Some(length), None) => {
                text.push_str(&format!("({},0)", parse_literal(column, length)?));
            }
            _ => {}
        },
        Sizing::Values => {
            let width = ty
                .enum_values
                .iter()
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(0)
                .max(1);
            text.push_str(&format!("({})", width));
            check = Some(TypeCheck::Values(ty.enum_values.clone()));
        }
        Sizing::Json => check = Some(TypeCheck::Json),
        Sizing::Unsized => {}
    }

    Ok(TargetType { text, check })
}

/// Parse an integer literal the way MySQL writes lengths: decimal, or
/// `0x` / `0o` / `0b` prefixed
fn parse_literal(column: &str, literal: &str) -> Result<u64, EmitError> {
    let trimmed = literal.trim();
    let lower = trimmed.to_ascii_lowercase();

    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u64::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        trimmed.parse::<u64>()
    };

    parsed.map_err(|_| EmitError::InvalidLength {
        column: column.to_string(),
        literal: literal.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(name: &str, length: Option<&str>, scale: Option<&str>) -> ColumnType {
        ColumnType {
            length: length.map(str::to_string),
            scale: scale.map(str::to_string),
            ..ColumnType::new(name)
        }
    }

    fn text_of(ty: &ColumnType) -> String {
        map_column_type("c", ty).unwrap().text
    }

    #[test]
    fn test_every_parsed_mysql_type_is_mapped() {
        use crate::ast::Statement;
        use crate::parser::mysql::MySqlStatementStream;
        use crate::parser::StatementSource;

        let types = [
            "TINYINT(1) UNSIGNED",
            "SMALLINT(6)",
            "MEDIUMINT(9) UNSIGNED ZEROFILL",
            "INT(11)",
            "INTEGER",
            "BIGINT(20) UNSIGNED",
            "BIT(1)",
            "YEAR",
            "DECIMAL(10,2)",
            "DEC(5,1)",
            "NUMERIC(8,3)",
            "FLOAT",
            "FLOAT(10,2)",
            "DOUBLE",
            "DOUBLE(16,4)",
            "DOUBLE PRECISION",
            "REAL",
            "CHAR(4)",
            "CHARACTER(2)",
            "VARCHAR(64)",
            "CHARACTER VARYING(32)",
            "BINARY(16)",
            "VARBINARY(255)",
            "TINYTEXT",
            "TEXT",
            "MEDIUMTEXT",
            "LONGTEXT",
            "TINYBLOB",
            "BLOB",
            "MEDIUMBLOB",
            "LONGBLOB",
            "BOOL",
            "BOOLEAN",
            "DATE",
            "DATETIME(6)",
            "TIMESTAMP",
            "TIME",
            "JSON",
            "ENUM('a','b')",
            "SET('x','y')",
        ];
        let columns: Vec<String> = types
            .iter()
            .enumerate()
            .map(|(i, ty)| format!("c{} {}", i, ty))
            .collect();
        let sql = format!("CREATE TABLE all_types ({});", columns.join(", "));

        let mut stream = MySqlStatementStream::new(&sql).unwrap();
        let create = match stream.next_statement().unwrap() {
            Some(Statement::Create(create)) => create,
            other => panic!("expected CREATE TABLE, got {:?}", other),
        };
        assert_eq!(create.spec.columns.len(), types.len());

        for (col, source) in create.spec.columns.iter().zip(types) {
            if let Err(err) = map_column_type(&col.name, &col.column_type) {
                panic!("{} ({:?}) is not mapped: {}", source, col.column_type, err);
            }
        }
    }

    #[test]
    fn test_mapping_sources_are_unique() {
        for (i, a) in TYPE_MAPPINGS.iter().enumerate() {
            for b in &TYPE_MAPPINGS[i + 1..] {
                assert_ne!(a.source, b.source, "duplicate mapping");
            }
        }
    }

    #[test]
    fn test_declared_length() {
        assert_eq!(text_of(&sized("varchar", Some("128"), None)), "varchar2(128)");
        assert_eq!(text_of(&sized("int", Some("11"), None)), "int(11)");
        assert_eq!(text_of(&sized("tinyint", Some("4"), None)), "int(4)");
        assert_eq!(text_of(&sized("bigint", None, None)), "bigint");
        assert_eq!(text_of(&sized("char", Some("0x10"), None)), "char(16)");
        assert_eq!(text_of(&sized("varbinary", Some("255"), None)), "longvarbinary(255)");
    }

    #[test]
    fn test_fixed_blob_lengths() {
        assert_eq!(text_of(&sized("blob", None, None)), "blob(255)");
        assert_eq!(text_of(&sized("tinyblob", Some("10"), None)), "blob(255)");
        assert_eq!(text_of(&sized("mediumblob", None, None)), "blob(16777215)");
        assert_eq!(text_of(&sized("longblob", None, None)), "blob(2147483647)");
    }

    #[test]
    fn test_precision() {
        assert_eq!(text_of(&sized("decimal", Some("10"), Some("2"))), "decimal(10,2)");
        assert_eq!(text_of(&sized("dec", Some("8"), None)), "dec(8,0)");
        assert_eq!(text_of(&sized("double", None, None)), "double");
        assert_eq!(text_of(&sized("float", Some("7"), Some("3"))), "float(7,3)");
    }

    #[test]
    fn test_unsized_types() {
        assert_eq!(text_of(&sized("text", None, None)), "clob");
        assert_eq!(text_of(&sized("longtext", None, None)), "text");
        assert_eq!(text_of(&sized("BOOL", None, None)), "boolean");
        assert_eq!(text_of(&sized("date", None, None)), "datetime");
    }

    #[test]
    fn test_enum_values_width_and_check() {
        let ty = ColumnType {
            enum_values: vec!["a1".to_string(), "pending".to_string()],
            ..ColumnType::new("enum")
        };
        let target = map_column_type("state", &ty).unwrap();
        assert_eq!(target.text, "varchar2(7)");
        assert_eq!(
            target.check,
            Some(TypeCheck::Values(vec!["a1".to_string(), "pending".to_string()]))
        );
    }

    #[test]
    fn test_enum_width_counts_chars() {
        let ty = ColumnType {
            enum_values: vec!["草稿".to_string()],
            ..ColumnType::new("set")
        };
        assert_eq!(text_of(&ty), "varchar2(2)");
    }

    #[test]
    fn test_json_check() {
        let target = map_column_type("doc", &ColumnType::new("json")).unwrap();
        assert_eq!(target.text, "clob");
        assert_eq!(target.check, Some(TypeCheck::Json));
    }

    #[test]
    fn test_unmapped_type_is_error() {
        let err = map_column_type("shape", &ColumnType::new("geometry")).unwrap_err();
        assert_eq!(
            err,
            EmitError::UnmappedType {
                column: "shape".to_string(),
                type_name: "geometry".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_length_is_error() {
        let err = map_column_type("name", &sized("varchar", Some("12a"), None)).unwrap_err();
        assert!(matches!(err, EmitError::InvalidLength { ref literal, .. } if literal == "12a"));

        let err = map_column_type("amount", &sized("decimal", Some("10"), Some("x"))).unwrap_err();
        assert!(matches!(err, EmitError::InvalidLength { .. }));
    }
}
