//! The closed set of PostgreSQL object kinds that accept `COMMENT ON`

use std::fmt;
use std::str::FromStr;

use crate::error::CommentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Aggregate,
    Cast,
    Collation,
    Conversion,
    Database,
    Domain,
    EventTrigger,
    Extension,
    ForeignDataWrapper,
    ForeignTable,
    Function,
    Index,
    LargeObject,
    MaterializedView,
    Operator,
    OperatorClass,
    OperatorFamily,
    ProceduralLanguage,
    Language,
    Role,
    Schema,
    Sequence,
    Server,
    Table,
    Tablespace,
    TextSearchConfiguration,
    TextSearchDictionary,
    TextSearchParser,
    TextSearchTemplate,
    Type,
    View,
    // Contained in a table
    Column,
    Constraint,
    Rule,
    Trigger,
}

impl ObjectType {
    /// Object kinds addressed by a single name.
    pub const STANDALONE: [ObjectType; 31] = [
        ObjectType::Aggregate,
        ObjectType::Cast,
        ObjectType::Collation,
        ObjectType::Conversion,
        ObjectType::Database,
        ObjectType::Domain,
        ObjectType::EventTrigger,
        ObjectType::Extension,
        ObjectType::ForeignDataWrapper,
        ObjectType::ForeignTable,
        ObjectType::Function,
        ObjectType::Index,
        ObjectType::LargeObject,
        ObjectType::MaterializedView,
        ObjectType::Operator,
        ObjectType::OperatorClass,
        ObjectType::OperatorFamily,
        ObjectType::ProceduralLanguage,
        ObjectType::Language,
        ObjectType::Role,
        ObjectType::Schema,
        ObjectType::Sequence,
        ObjectType::Server,
        ObjectType::Table,
        ObjectType::Tablespace,
        ObjectType::TextSearchConfiguration,
        ObjectType::TextSearchDictionary,
        ObjectType::TextSearchParser,
        ObjectType::TextSearchTemplate,
        ObjectType::Type,
        ObjectType::View,
    ];

    /// Object kinds that can only be named relative to their owning table.
    pub const CONTAINED: [ObjectType; 4] = [
        ObjectType::Column,
        ObjectType::Constraint,
        ObjectType::Rule,
        ObjectType::Trigger,
    ];

    /// The keyword PostgreSQL expects after `COMMENT ON`.
    pub fn as_sql(&self) -> &'static str {
        match self {
            ObjectType::Aggregate => "AGGREGATE",
            ObjectType::Cast => "CAST",
            ObjectType::Collation => "COLLATION",
            ObjectType::Conversion => "CONVERSION",
            ObjectType::Database => "DATABASE",
            ObjectType::Domain => "DOMAIN",
            ObjectType::EventTrigger => "EVENT TRIGGER",
            ObjectType::Extension => "EXTENSION",
            ObjectType::ForeignDataWrapper => "FOREIGN DATA WRAPPER",
            ObjectType::ForeignTable => "FOREIGN TABLE",
            ObjectType::Function => "FUNCTION",
            ObjectType::Index => "INDEX",
            ObjectType::LargeObject => "LARGE OBJECT",
            ObjectType::MaterializedView => "MATERIALIZED VIEW",
            ObjectType::Operator => "OPERATOR",
            ObjectType::OperatorClass => "OPERATOR CLASS",
            ObjectType::OperatorFamily => "OPERATOR FAMILY",
            ObjectType::ProceduralLanguage => "PROCEDURAL LANGUAGE",
            ObjectType::Language => "LANGUAGE",
            ObjectType::Role => "ROLE",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Server => "SERVER",
            ObjectType::Table => "TABLE",
            ObjectType::Tablespace => "TABLESPACE",
            ObjectType::TextSearchConfiguration => "TEXT SEARCH CONFIGURATION",
            ObjectType::TextSearchDictionary => "TEXT SEARCH DICTIONARY",
            ObjectType::TextSearchParser => "TEXT SEARCH PARSER",
            ObjectType::TextSearchTemplate => "TEXT SEARCH TEMPLATE",
            ObjectType::Type => "TYPE",
            ObjectType::View => "VIEW",
            ObjectType::Column => "COLUMN",
            ObjectType::Constraint => "CONSTRAINT",
            ObjectType::Rule => "RULE",
            ObjectType::Trigger => "TRIGGER",
        }
    }

    pub fn is_contained(&self) -> bool {
        Self::CONTAINED.contains(self)
    }

    /// Every recognised kind, standalone kinds first.
    pub fn all() -> impl Iterator<Item = ObjectType> {
        Self::STANDALONE.into_iter().chain(Self::CONTAINED)
    }

    /// Uppercase, underscores to spaces, surrounding whitespace trimmed.
    pub fn canonicalize(tag: &str) -> String {
        tag.trim().to_uppercase().replace('_', " ").trim().to_string()
    }
}

impl FromStr for ObjectType {
    type Err = CommentError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let canonical = Self::canonicalize(tag);
        Self::all()
            .find(|t| t.as_sql() == canonical)
            .ok_or_else(|| CommentError::UnrecognizedType(tag.to_string()))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = CommentError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
