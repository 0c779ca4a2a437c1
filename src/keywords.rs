// Oracle reserved words

/// Words Oracle refuses as unquoted identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "access", "add", "all", "alter", "and", "any", "as", "asc", "audit", "between", "by",
    "char", "check", "cluster", "column", "column_value", "comment", "compress", "connect",
    "create", "current", "date", "decimal", "default", "delete", "desc", "distinct", "drop",
    "else", "exclusive", "exists", "file", "float", "for", "from", "grant", "group", "having",
    "identified", "immediate", "in", "increment", "index", "initial", "insert", "integer",
    "intersect", "into", "is", "level", "like", "lock", "long", "maxextents", "minus",
    "mlslabel", "mode", "modify", "nested_table_id", "noaudit", "nocompress", "not", "nowait",
    "null", "number", "of", "offline", "on", "online", "option", "or", "order", "pctfree",
    "prior", "public", "raw", "rename", "resource", "revoke", "row", "rowid", "rownum", "rows",
    "select", "session", "set", "share", "size", "smallint", "start", "successful", "synonym",
    "sysdate", "table", "then", "to", "trigger", "uid", "union", "unique", "update", "user",
    "validate", "values", "varchar", "varchar2", "view", "whenever", "where", "with",
];

/// Is `ident` a reserved word in Oracle? Case-insensitive.
pub fn is_reserved(ident: &str) -> bool {
    let lower = ident.to_ascii_lowercase();
    RESERVED_WORDS.binary_search(&lower.as_str()).is_ok()
}

/// Wrap `ident` in double quotes if it is reserved, otherwise return it as is.
pub fn quote_identifier(ident: &str) -> String {
    if is_reserved(ident) {
        format!("\"{}\"", ident.replace('"', "\"\""))
    } else {
        ident.to_string()
    }
}
