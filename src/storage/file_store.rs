use crate::{domain::Board, error::Result, storage::Persistence};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based snapshot store: one JSON document per board
pub struct FileStore {
    root_path: PathBuf,
}

impl FileStore {
    const TAVLE_DIR: &'static str = ".tavle";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStore rooted at the given project directory
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TAVLE_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Persistence for FileStore {
    async fn load(&self) -> Result<Option<Board>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let board: Board = serde_json::from_str(&contents)?;

        Ok(Some(board))
    }

    async fn save(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnId, Entry};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_without_snapshot_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        let board = Board::default()
            .add_column("Backlog")
            .add_entry(&ColumnId::from_slug("done"), Entry::new("Review docs"));
        store.save(&board).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        let board = Board::default();
        store.save(&board).await.unwrap();

        let trimmed = board.remove_column(&ColumnId::from_slug("done"));
        store.save(&trimmed).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, trimmed);
        assert_eq!(loaded.columns.len(), 2);
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        tokio::fs::create_dir_all(temp_dir.path().join(".tavle"))
            .await
            .unwrap();
        tokio::fs::write(temp_dir.path().join(".tavle/board.json"), "not json")
            .await
            .unwrap();

        assert!(store.load().await.is_err());
    }
}
