pub mod board;
pub mod entry;
pub mod id;

pub use board::{Board, Column};
pub use entry::Entry;
pub use id::{ColumnId, DragTarget, EntryId};
