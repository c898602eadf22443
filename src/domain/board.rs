use crate::domain::entry::Entry;
use crate::domain::id::{ColumnId, EntryId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named, ordered list of entries; insertion order is the render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub items: Vec<Arc<Entry>>,
}

impl Column {
    /// Creates an empty column with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    fn entry_position(&self, entry_id: &EntryId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *entry_id)
    }
}

/// Board snapshot: an ordered list of columns, left to right.
///
/// Columns and entries sit behind `Arc` so every operation yields a new
/// snapshot that shares untouched sub-trees; a rendering layer can detect
/// change with `Arc::ptr_eq` instead of deep comparison. Operations never
/// mutate a shared value in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub columns: Vec<Arc<Column>>,
}

/// Removes the element at `from` and reinserts it at `to`, shifting the
/// elements in between by one (list splice, not a swap).
fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let moved = items.remove(from);
    items.insert(to, moved);
}

impl Board {
    /// Creates an empty board
    pub fn new(id: u64) -> Self {
        Self {
            id,
            columns: Vec::new(),
        }
    }

    fn with_columns(&self, columns: Vec<Arc<Column>>) -> Board {
        Board {
            id: self.id,
            columns,
        }
    }

    /// Rebuilds the matching column through `f`; no-op when the id is absent
    fn map_column(&self, column_id: &ColumnId, f: impl FnOnce(&mut Column)) -> Board {
        match self.column_index(column_id) {
            Some(index) => {
                let mut columns = self.columns.clone();
                let mut column = Column::clone(&columns[index]);
                f(&mut column);
                columns[index] = Arc::new(column);
                self.with_columns(columns)
            }
            None => self.clone(),
        }
    }

    /// Rebuilds one entry in place; no-op when column or entry is absent
    fn map_entry(
        &self,
        column_id: &ColumnId,
        entry_id: &EntryId,
        f: impl FnOnce(&mut Entry),
    ) -> Board {
        let Some(column_pos) = self.column_index(column_id) else {
            return self.clone();
        };
        let Some(entry_pos) = self.columns[column_pos].entry_position(entry_id) else {
            return self.clone();
        };

        let mut columns = self.columns.clone();
        let mut column = Column::clone(&columns[column_pos]);
        let mut entry = Entry::clone(&column.items[entry_pos]);
        f(&mut entry);
        column.items[entry_pos] = Arc::new(entry);
        columns[column_pos] = Arc::new(column);
        self.with_columns(columns)
    }

    /// Appends a new empty column with a freshly generated id
    pub fn add_column(&self, title: impl Into<String>) -> Board {
        let mut columns = self.columns.clone();
        columns.push(Arc::new(Column::new(title)));
        self.with_columns(columns)
    }

    /// Removes a column together with every entry it owns; no-op when absent
    pub fn remove_column(&self, column_id: &ColumnId) -> Board {
        let columns = self
            .columns
            .iter()
            .filter(|column| column.id != *column_id)
            .cloned()
            .collect();
        self.with_columns(columns)
    }

    /// Replaces a column's title; no-op when absent.
    ///
    /// The board imposes no length limit; callers validate titles before
    /// committing them.
    pub fn update_column_title(&self, column_id: &ColumnId, title: impl Into<String>) -> Board {
        let title = title.into();
        self.map_column(column_id, |column| column.title = title)
    }

    /// Appends an entry to the end of a column's item list; no-op when the
    /// column is absent
    pub fn add_entry(&self, column_id: &ColumnId, entry: Entry) -> Board {
        self.map_column(column_id, |column| column.items.push(Arc::new(entry)))
    }

    /// Removes an entry from a column; no-op when either is absent
    pub fn remove_entry(&self, column_id: &ColumnId, entry_id: &EntryId) -> Board {
        self.map_column(column_id, |column| {
            column.items.retain(|item| item.id != *entry_id)
        })
    }

    /// Replaces an entry's description, preserving its position and status
    pub fn edit_entry(
        &self,
        column_id: &ColumnId,
        entry_id: &EntryId,
        description: impl Into<String>,
    ) -> Board {
        let description = description.into();
        self.map_entry(column_id, entry_id, |entry| entry.description = description)
    }

    /// Replaces an entry's completion flag, preserving its position
    pub fn set_entry_status(
        &self,
        column_id: &ColumnId,
        entry_id: &EntryId,
        status: bool,
    ) -> Board {
        self.map_entry(column_id, entry_id, |entry| entry.status = status)
    }

    /// Sets every entry in the column to the given status in one update
    pub fn mark_all(&self, column_id: &ColumnId, status: bool) -> Board {
        self.map_column(column_id, |column| {
            column.items = column
                .items
                .iter()
                .map(|item| {
                    if item.status == status {
                        Arc::clone(item)
                    } else {
                        Arc::new(Entry::clone(item).with_status(status))
                    }
                })
                .collect();
        })
    }

    /// Splice-moves the column at `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range; callers resolve indices
    /// through [`Board::column_index`] first.
    pub fn move_column(&self, from: usize, to: usize) -> Board {
        let mut columns = self.columns.clone();
        splice_move(&mut columns, from, to);
        self.with_columns(columns)
    }

    /// Splice-moves an entry within one column's item list; no-op when the
    /// column is absent.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range for that column's items;
    /// callers resolve indices through [`Board::entry_index`] first.
    pub fn reorder_entries(&self, column_id: &ColumnId, from: usize, to: usize) -> Board {
        self.map_column(column_id, |column| {
            splice_move(&mut column.items, from, to)
        })
    }

    /// Moves an entry out of one column and appends it to the end of
    /// another; no-op when either column is absent or the entry is not in
    /// the source column
    pub fn move_entry_between(
        &self,
        from: &ColumnId,
        to: &ColumnId,
        entry_id: &EntryId,
    ) -> Board {
        let Some(source_pos) = self.column_index(from) else {
            return self.clone();
        };
        let Some(dest_pos) = self.column_index(to) else {
            return self.clone();
        };
        let Some(entry_pos) = self.columns[source_pos].entry_position(entry_id) else {
            return self.clone();
        };

        let mut columns = self.columns.clone();
        let mut source = Column::clone(&columns[source_pos]);
        let entry = source.items.remove(entry_pos);
        columns[source_pos] = Arc::new(source);

        let mut dest = Column::clone(&columns[dest_pos]);
        dest.items.push(entry);
        columns[dest_pos] = Arc::new(dest);

        self.with_columns(columns)
    }

    /// Position of a column in the board order
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == *column_id)
    }

    /// Borrows a column by id
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.id == *column_id)
            .map(|column| column.as_ref())
    }

    /// Id of the column currently owning an entry
    pub fn entry_column(&self, entry_id: &EntryId) -> Option<&ColumnId> {
        self.columns
            .iter()
            .find(|column| column.entry_position(entry_id).is_some())
            .map(|column| &column.id)
    }

    /// Position of an entry within a column's item list
    pub fn entry_index(&self, column_id: &ColumnId, entry_id: &EntryId) -> Option<usize> {
        self.column(column_id)?.entry_position(entry_id)
    }

    /// Total number of entries across all columns
    pub fn entry_count(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }
}

impl Default for Board {
    /// The bootstrap board used when nothing has been persisted yet
    fn default() -> Self {
        fn column(slug: &str, title: &str, items: &[(&str, &str)]) -> Arc<Column> {
            Arc::new(Column {
                id: ColumnId::from_slug(slug),
                title: title.to_string(),
                items: items
                    .iter()
                    .map(|(entry_slug, description)| {
                        Arc::new(Entry {
                            id: EntryId::from_slug(entry_slug),
                            description: description.to_string(),
                            status: false,
                        })
                    })
                    .collect(),
            })
        }

        Board {
            id: 1,
            columns: vec![
                column(
                    "todo",
                    "To Do",
                    &[
                        ("101", "Set up project structure"),
                        ("102", "Design board layout"),
                    ],
                ),
                column(
                    "in-progress",
                    "In Progress",
                    &[("201", "Implement column component")],
                ),
                column("done", "Done", &[("301", "Initialize repository")]),
            ],
        }
    }
}
