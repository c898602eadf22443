use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_store;

/// Persistence collaborator for the board snapshot.
///
/// The whole board is saved and loaded as one snapshot under a fixed key;
/// there is no per-entry persistence.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Loads the persisted snapshot, or `None` when nothing has been saved
    async fn load(&self) -> Result<Option<Board>>;

    /// Saves the full board snapshot
    async fn save(&self, board: &Board) -> Result<()>;
}
