use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a column (e.g., column-todo)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    pub const PREFIX: &'static str = "column-";

    /// Generates a fresh column id, unique for the lifetime of the board
    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Builds a well-known column id from its slug (e.g., "todo" -> column-todo)
    pub fn from_slug(slug: &str) -> Self {
        Self(format!("{}{}", Self::PREFIX, slug))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::TavleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > Self::PREFIX.len() && s.starts_with(Self::PREFIX) {
            Ok(Self(s.to_string()))
        } else {
            Err(crate::error::TavleError::InvalidIdentifier(s.to_string()))
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an entry (e.g., entry-101)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub const PREFIX: &'static str = "entry-";

    /// Generates a fresh entry id, unique for the lifetime of the board
    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Builds a well-known entry id from its slug (e.g., "101" -> entry-101)
    pub fn from_slug(slug: &str) -> Self {
        Self(format!("{}{}", Self::PREFIX, slug))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntryId {
    type Err = crate::error::TavleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > Self::PREFIX.len() && s.starts_with(Self::PREFIX) {
            Ok(Self(s.to_string()))
        } else {
            Err(crate::error::TavleError::InvalidIdentifier(s.to_string()))
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draggable identifier, classified once at drag start.
///
/// Column and entry ids live in disjoint namespaces, so the kind is decided
/// here and carried through the rest of the gesture instead of re-parsing
/// prefixes at every signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Column(ColumnId),
    Entry(EntryId),
}

impl DragTarget {
    /// Classifies a raw identifier by its namespace prefix.
    ///
    /// Returns `None` for ids matching neither namespace; such gestures are
    /// ignored by the coordinator.
    pub fn classify(raw: &str) -> Option<DragTarget> {
        if let Ok(id) = raw.parse::<ColumnId>() {
            return Some(DragTarget::Column(id));
        }
        if let Ok(id) = raw.parse::<EntryId>() {
            return Some(DragTarget::Entry(id));
        }
        None
    }
}
