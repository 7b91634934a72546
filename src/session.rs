//! This module ties a board to the place it is persisted to

use crate::action::Action;
use crate::board::Board;
use crate::id::{IdGenerator, UuidGenerator};
use crate::item::ItemId;
use crate::layout::Layout;
use crate::reorder::MoveRequest;
use crate::store::{JsonFileStore, Store};

/// A board being edited by a user.
///
/// Every change goes through [`TaskBoard::dispatch`] (or one of its shorthands), which applies it and saves the
/// resulting board to the store. \
/// Changes that cannot be applied are ignored, and do not trigger a save.
/// Saving is best effort: a failed save is logged, and the in-memory board stays the reference.
pub struct TaskBoard<S, G>
where
    S: Store,
    G: IdGenerator,
{
    board: Board,
    store: S,
    ids: G,
}

/// A board saved to the default JSON file, with random item ids
pub type DefaultTaskBoard = TaskBoard<JsonFileStore, UuidGenerator>;

impl<S, G> TaskBoard<S, G>
where
    S: Store,
    G: IdGenerator,
{
    /// Load the board saved in `store`.
    ///
    /// An empty board following `layout` is used in case nothing has been saved yet, or the saved data cannot be read.
    pub fn open(mut store: S, ids: G, layout: &Layout) -> Self {
        let board = match store.load() {
            Ok(Some(board)) => {
                if board.layout().names().ne(layout.names()) {
                    log::info!("The saved board does not follow the requested layout. Keeping the saved one");
                }
                board
            },
            Ok(None) => Board::new(layout),
            Err(err) => {
                log::warn!("Unable to load the saved board: {}. Using an empty board", err);
                Board::new(layout)
            },
        };

        Self { board, store, ids }
    }

    /// Start from a given board, regardless of what `store` may contain.
    /// Nothing is saved until the first change
    pub fn with_board(board: Board, store: S, ids: G) -> Self {
        Self { board, store, ids }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn store(&self) -> &S     { &self.store }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply an action, and save the board if it has changed.
    ///
    /// Returns whether the board has changed
    pub fn dispatch(&mut self, action: &Action) -> bool {
        match self.board.apply(action, &mut self.ids) {
            Ok(true) => {
                self.save();
                true
            },
            Ok(false) => false,
            Err(err) => {
                log::debug!("Ignoring {:?}: {}", action, err);
                false
            },
        }
    }

    /// Add an item at the tail of a bucket, and return its id.
    ///
    /// Returns `None` (and nothing happens) if the text is blank or if there is no such bucket
    pub fn add_item(&mut self, bucket: &str, text: &str) -> Option<ItemId> {
        let action = Action::Add { bucket: bucket.to_string(), text: text.to_string() };
        if self.dispatch(&action) == false {
            return None;
        }
        // New items go at the tail of their bucket
        self.board.bucket(bucket)
            .and_then(|b| b.items().last())
            .map(|item| item.id().clone())
    }

    pub fn delete_item(&mut self, id: &ItemId) -> bool {
        self.dispatch(&Action::Delete { id: id.clone() })
    }

    pub fn toggle_done(&mut self, id: &ItemId) -> bool {
        self.dispatch(&Action::Toggle { id: id.clone() })
    }

    pub fn rename_item(&mut self, id: &ItemId, text: &str) -> bool {
        self.dispatch(&Action::Rename { id: id.clone(), text: text.to_string() })
    }

    pub fn apply_move(&mut self, request: MoveRequest) -> bool {
        self.dispatch(&Action::Move(request))
    }

    fn save(&mut self) {
        if let Err(err) = self.store.save(&self.board) {
            log::warn!("Unable to save the board: {}", err);
        }
    }
}

impl DefaultTaskBoard {
    /// Open the board saved at [`config::STORAGE_PATH`](crate::config::STORAGE_PATH).
    /// New boards follow [`config::DEFAULT_LAYOUT`](crate::config::DEFAULT_LAYOUT)
    pub fn open_default() -> Self {
        Self::open(JsonFileStore::at_default_path(), UuidGenerator, &crate::config::default_layout())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::StoreError;
    use crate::id::SequentialGenerator;
    use crate::reorder::Slot;
    use crate::store::MemoryStore;

    fn session() -> TaskBoard<MemoryStore, SequentialGenerator> {
        TaskBoard::open(MemoryStore::new(), SequentialGenerator::new(), &Layout::kanban())
    }

    #[test]
    fn every_change_is_saved() {
        let mut tb = session();
        let id = tb.add_item("todo", "Preparar informe mensual").unwrap();
        assert_eq!(tb.store().save_count(), 1);

        assert!(tb.toggle_done(&id));
        assert!(tb.rename_item(&id, "Preparar informe anual"));
        assert!(tb.apply_move(MoveRequest::to(Slot::new("todo", 0), Slot::new("delegadas", 0))));
        assert_eq!(tb.store().save_count(), 4);
        assert_eq!(tb.store().saved(), Some(tb.board()));

        assert!(tb.delete_item(&id));
        assert_eq!(tb.board().item_count(), 0);
        assert_eq!(tb.store().save_count(), 5);
    }

    #[test]
    fn ignored_changes_are_not_saved() {
        let mut tb = session();
        let id = tb.add_item("todo", "a").unwrap();

        assert_eq!(tb.add_item("todo", "   "), None);
        assert_eq!(tb.add_item("saturday", "a"), None);
        assert!(tb.toggle_done(&ItemId::from("nope")) == false);
        assert!(tb.apply_move(MoveRequest::to(Slot::new("todo", 0), Slot::new("todo", 0))) == false);
        assert!(tb.apply_move(MoveRequest::drop_outside(Slot::new("proceso", 0))) == false);

        assert_eq!(tb.store().save_count(), 1);
        assert!(tb.board().contains_item(&id));
    }

    #[test]
    fn add_item_is_an_add_action() {
        let mut by_shorthand = session();
        let mut by_action = session();

        let id = by_shorthand.add_item("proceso", "Empacar pedidos").unwrap();
        assert!(by_action.dispatch(&Action::Add { bucket: "proceso".into(), text: "Empacar pedidos".into() }));

        assert_eq!(id, ItemId::from("proceso-1"));
        assert_eq!(by_shorthand.board().bucket("proceso").unwrap().items()[0].id(), &id);
        assert_eq!(by_shorthand.board().item_count(), by_action.board().item_count());
        assert!(by_action.board().contains_item(&id));
        assert_eq!(by_shorthand.store().save_count(), by_action.store().save_count());
    }

    #[test]
    fn open_picks_saved_board() {
        let mut saved = Board::new(&Layout::single_list());
        saved.try_add("tasks", "a", &mut SequentialGenerator::new()).unwrap();

        let tb = TaskBoard::open(MemoryStore::with_board(saved.clone()), SequentialGenerator::new(), &Layout::kanban());
        assert_eq!(tb.board(), &saved);
    }

    #[test]
    fn open_survives_a_broken_store() {
        struct Broken;
        impl Store for Broken {
            fn load(&mut self) -> Result<Option<Board>, StoreError> {
                Err(StoreError::NotSingleBucket(2))
            }
            fn save(&mut self, _board: &Board) -> Result<(), StoreError> {
                Err(StoreError::NotSingleBucket(2))
            }
        }

        let mut tb = TaskBoard::open(Broken, SequentialGenerator::new(), &Layout::workweek());
        assert_eq!(tb.board(), &Board::new(&Layout::workweek()));

        // a failing save does not undo the change
        assert!(tb.add_item("monday", "a").is_some());
        assert_eq!(tb.board().item_count(), 1);
    }
}
