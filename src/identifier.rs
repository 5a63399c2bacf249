//! Object identifiers: names that get quoted, and raw SQL that is used verbatim

use std::fmt;

use crate::render::quote_ident;

/// Separator joining a table and a contained object in a single token (`table__column`).
pub const PAIR_SEPARATOR: &str = "__";

/// A database object name.
///
/// `Name` is always run through identifier quoting. `Raw` is assumed to be
/// already-valid SQL (for example a function signature) and is emitted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Name(String),
    Raw(String),
}

impl Identifier {
    pub fn name(name: impl Into<String>) -> Self {
        Identifier::Name(name.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Identifier::Raw(sql.into())
    }

    /// The unquoted text of the identifier
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Name(s) | Identifier::Raw(s) => s,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Identifier::Raw(_))
    }

    pub fn to_sql(&self) -> String {
        match self {
            Identifier::Name(name) => quote_ident(name),
            Identifier::Raw(sql) => sql.clone(),
        }
    }

    /// Append `suffix` to this identifier.
    ///
    /// The result stays a quoted name if either side is a name, so a raw table
    /// with a conventional suffix is still escaped as a whole.
    pub fn with_suffix(&self, suffix: &Identifier) -> Identifier {
        let joined = format!("{}{}", self.as_str(), suffix.as_str());
        if self.is_raw() && suffix.is_raw() {
            Identifier::Raw(joined)
        } else {
            Identifier::Name(joined)
        }
    }

    /// Split a `table__object` name into its two halves.
    ///
    /// Only quoted names are split; raw SQL is never second-guessed.
    pub fn split_pair(&self) -> Option<(Identifier, Identifier)> {
        match self {
            Identifier::Name(name) => name
                .split_once(PAIR_SEPARATOR)
                .map(|(table, object)| (Identifier::name(table), Identifier::name(object))),
            Identifier::Raw(_) => None,
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<&String> for Identifier {
    fn from(name: &String) -> Self {
        Identifier::Name(name.clone())
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// What a comment is attached to: one identifier, or a table plus an object inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    Single(Identifier),
    Pair { table: Identifier, object: Identifier },
}

impl ObjectRef {
    pub fn pair(table: impl Into<Identifier>, object: impl Into<Identifier>) -> Self {
        ObjectRef::Pair {
            table: table.into(),
            object: object.into(),
        }
    }
}

impl From<Identifier> for ObjectRef {
    fn from(id: Identifier) -> Self {
        ObjectRef::Single(id)
    }
}

impl From<&Identifier> for ObjectRef {
    fn from(id: &Identifier) -> Self {
        ObjectRef::Single(id.clone())
    }
}

impl From<&str> for ObjectRef {
    fn from(name: &str) -> Self {
        ObjectRef::Single(name.into())
    }
}

impl From<String> for ObjectRef {
    fn from(name: String) -> Self {
        ObjectRef::Single(name.into())
    }
}

impl<T: Into<Identifier>, O: Into<Identifier>> From<(T, O)> for ObjectRef {
    fn from((table, object): (T, O)) -> Self {
        ObjectRef::pair(table, object)
    }
}
