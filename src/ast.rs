// Parsed statement types consumed by the emitter
//
// These hold only what the translators need, so the emitter never sees
// sqlparser node shapes directly.

/// One statement read from the MySQL script
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Drop(DropTable),
    Create(CreateTable),
    /// Anything else (SET, INSERT, CREATE VIEW, ...). Carries a short label for logging.
    Unsupported(String),
}

/// DROP TABLE [IF EXISTS] a, b, ...
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub names: Vec<String>,
    pub if_exists: bool,
}

/// CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub spec: TableSpec,
}

/// Body of a CREATE TABLE
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSpec {
    pub columns: Vec<ColumnDefinition>,
    pub indexes: Vec<IndexDefinition>,
    /// Raw table options text, e.g. `ENGINE=InnoDB DEFAULT CHARSET=utf8 COMMENT='x'`
    pub options: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ColumnType,
}

/// Column type as declared in MySQL
///
/// `length` and `scale` keep the literal text so a malformed value is
/// reported by the emitter together with the column it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnType {
    /// Lower-case MySQL type name, e.g. `varchar`, `longtext`, `enum`
    pub name: String,
    pub length: Option<String>,
    pub scale: Option<String>,
    /// Values of ENUM / SET, unquoted
    pub enum_values: Vec<String>,
    pub not_null: bool,
    pub comment: Option<String>,
}

impl ColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Primary,
    Unique,
    Plain,
}

/// PRIMARY KEY, UNIQUE KEY or KEY inside a CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDefinition {
    pub kind: IndexKind,
    /// Only meaningful for Unique and Plain
    pub name: String,
    pub columns: Vec<String>,
}
