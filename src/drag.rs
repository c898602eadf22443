use crate::{
    domain::{ColumnId, DragTarget, EntryId},
    storage::Persistence,
    store::BoardStore,
};
use tracing::debug;

/// The current drag session, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(ColumnId),
    DraggingEntry(EntryId),
}

/// Translates pointer-gesture signals into board store operations.
///
/// Signals arrive in `start -> (over)* -> end` order for one gesture.
/// Cross-column moves commit live during `over` so the dragged card
/// visibly relocates mid-gesture; reordering within a column is cheaper to
/// finalize once, at drop time, so it is deferred to `end`. A gesture that
/// ends without a drop target resets the machine but does not roll back
/// moves already committed live.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Begins a gesture for an already-classified target.
    ///
    /// No board mutation happens here; raw ids matching neither namespace
    /// never classify (see [`DragTarget::classify`]) and so never start a
    /// session.
    pub fn start(&mut self, target: DragTarget) {
        self.state = match target {
            DragTarget::Column(id) => DragState::DraggingColumn(id),
            DragTarget::Entry(id) => DragState::DraggingEntry(id),
        };
    }

    /// Reacts to the pointer hovering a candidate target mid-gesture.
    ///
    /// Only entry drags respond: hovering a different column, directly or
    /// through one of its entries, commits the cross-column move
    /// immediately. Same-column hovers and absent targets do nothing.
    pub async fn over<P: Persistence>(
        &mut self,
        store: &mut BoardStore<P>,
        target: Option<DragTarget>,
    ) {
        let DragState::DraggingEntry(active) = &self.state else {
            return;
        };
        let Some(target) = target else {
            return;
        };
        let active = active.clone();

        let Some(owner) = store.entry_column(&active) else {
            debug!(entry = %active, "active entry not on the board, ignoring hover");
            return;
        };

        let destination = match target {
            DragTarget::Column(column_id) => column_id,
            DragTarget::Entry(entry_id) => match store.entry_column(&entry_id) {
                Some(column_id) => column_id,
                None => return,
            },
        };

        if owner != destination {
            store.move_entry_between(&owner, &destination, &active).await;
        }
    }

    /// Finalizes the gesture and returns the machine to idle.
    ///
    /// Column drags splice-move the column order; entry drags commit the
    /// same-column reorder (cross-column placement was already committed
    /// live during `over`). Nothing commits unless both ids resolve to
    /// positions and those positions differ.
    pub async fn end<P: Persistence>(
        &mut self,
        store: &mut BoardStore<P>,
        target: Option<DragTarget>,
    ) {
        let state = std::mem::take(&mut self.state);
        let Some(target) = target else {
            return;
        };

        match (state, target) {
            (DragState::DraggingColumn(active), DragTarget::Column(over)) => {
                let from = store.column_index(&active);
                let to = store.column_index(&over);
                if let (Some(from), Some(to)) = (from, to) {
                    if from != to {
                        store.move_column(from, to).await;
                    }
                }
            }
            (DragState::DraggingEntry(active), DragTarget::Entry(over)) => {
                let Some(owner) = store.entry_column(&active) else {
                    return;
                };
                // Both positions are resolved within the active entry's
                // column; a target that is not a sibling commits nothing.
                let from = store.entry_index(&owner, &active);
                let to = store.entry_index(&owner, &over);
                if let (Some(from), Some(to)) = (from, to) {
                    if from != to {
                        store.reorder_entries(&owner, from, to).await;
                    }
                }
            }
            (DragState::Idle, _) => {}
            (state, target) => {
                debug!(?state, ?target, "drop target kind does not match session");
            }
        }
    }
}
