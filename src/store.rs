use crate::{
    domain::{Board, ColumnId, Entry, EntryId},
    error::Result,
    storage::Persistence,
};
use tracing::{debug, warn};

/// Owns the live board snapshot and its persistence collaborator.
///
/// Each mutation applies the corresponding pure [`Board`] operation, swaps
/// in the resulting snapshot, then fires a best-effort save. The in-memory
/// board stays authoritative: a failed save is logged and the session
/// continues on the new snapshot.
pub struct BoardStore<P> {
    board: Board,
    persistence: P,
}

impl<P: Persistence> BoardStore<P> {
    /// Opens the store from persisted state, bootstrapping the default
    /// board when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Fails when a persisted snapshot exists but cannot be read or
    /// decoded; corrupt state is surfaced rather than silently replaced.
    pub async fn open(persistence: P) -> Result<Self> {
        let (board, fresh) = match persistence.load().await? {
            Some(board) => (board, false),
            None => {
                debug!("no persisted snapshot, bootstrapping default board");
                (Board::default(), true)
            }
        };

        let store = Self { board, persistence };
        if fresh {
            store.persist().await;
        }
        Ok(store)
    }

    /// Borrows the current snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clones the current snapshot (cheap; columns are shared)
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    async fn persist(&self) {
        if let Err(err) = self.persistence.save(&self.board).await {
            warn!(error = %err, "failed to persist board snapshot");
        }
    }

    async fn commit(&mut self, next: Board) {
        self.board = next;
        self.persist().await;
    }

    pub async fn add_column(&mut self, title: impl Into<String>) {
        let next = self.board.add_column(title);
        self.commit(next).await;
    }

    pub async fn remove_column(&mut self, column_id: &ColumnId) {
        let next = self.board.remove_column(column_id);
        self.commit(next).await;
    }

    pub async fn update_column_title(&mut self, column_id: &ColumnId, title: impl Into<String>) {
        let next = self.board.update_column_title(column_id, title);
        self.commit(next).await;
    }

    pub async fn add_entry(&mut self, column_id: &ColumnId, entry: Entry) {
        let next = self.board.add_entry(column_id, entry);
        self.commit(next).await;
    }

    pub async fn remove_entry(&mut self, column_id: &ColumnId, entry_id: &EntryId) {
        let next = self.board.remove_entry(column_id, entry_id);
        self.commit(next).await;
    }

    pub async fn edit_entry(
        &mut self,
        column_id: &ColumnId,
        entry_id: &EntryId,
        description: impl Into<String>,
    ) {
        let next = self.board.edit_entry(column_id, entry_id, description);
        self.commit(next).await;
    }

    pub async fn set_entry_status(
        &mut self,
        column_id: &ColumnId,
        entry_id: &EntryId,
        status: bool,
    ) {
        let next = self.board.set_entry_status(column_id, entry_id, status);
        self.commit(next).await;
    }

    pub async fn mark_all(&mut self, column_id: &ColumnId, status: bool) {
        let next = self.board.mark_all(column_id, status);
        self.commit(next).await;
    }

    /// See [`Board::move_column`] for index preconditions
    pub async fn move_column(&mut self, from: usize, to: usize) {
        let next = self.board.move_column(from, to);
        self.commit(next).await;
    }

    /// See [`Board::reorder_entries`] for index preconditions
    pub async fn reorder_entries(&mut self, column_id: &ColumnId, from: usize, to: usize) {
        let next = self.board.reorder_entries(column_id, from, to);
        self.commit(next).await;
    }

    pub async fn move_entry_between(
        &mut self,
        from: &ColumnId,
        to: &ColumnId,
        entry_id: &EntryId,
    ) {
        let next = self.board.move_entry_between(from, to, entry_id);
        self.commit(next).await;
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.board.column_index(column_id)
    }

    pub fn entry_column(&self, entry_id: &EntryId) -> Option<ColumnId> {
        self.board.entry_column(entry_id).cloned()
    }

    pub fn entry_index(&self, column_id: &ColumnId, entry_id: &EntryId) -> Option<usize> {
        self.board.entry_index(column_id, entry_id)
    }
}
