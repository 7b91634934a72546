//! Every user-initiated change of a board, and the reducer that applies them

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::BoardError;
use crate::id::IdGenerator;
use crate::item::ItemId;
use crate::reorder::MoveRequest;

/// A change requested by the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Append a new item at the tail of a bucket
    Add { bucket: String, text: String },
    Delete { id: ItemId },
    /// Flip the done flag of an item
    Toggle { id: ItemId },
    /// Change the text of an item
    Rename { id: ItemId, text: String },
    Move(MoveRequest),
}

impl Board {
    /// Apply an action in place.
    ///
    /// Returns whether the board has changed. On error, the board is left untouched.
    pub fn apply<G>(&mut self, action: &Action, ids: &mut G) -> Result<bool, BoardError>
    where
        G: IdGenerator + ?Sized,
    {
        match action {
            Action::Add { bucket, text } => self.try_add(bucket, text, ids).map(|_| true),
            Action::Delete { id } => self.try_delete(id).map(|_| true),
            Action::Toggle { id } => self.try_toggle(id).map(|_| true),
            Action::Rename { id, text } => self.try_rename(id, text).map(|_| true),
            Action::Move(request) => self.try_move(request),
        }
    }
}

/// Returns the board as it is after `action`.
///
/// This never fails: actions that cannot be applied (blank text, unknown item...) are logged and ignored, and the
/// returned board is then equal to `board`.
pub fn reduce<G>(board: &Board, action: &Action, ids: &mut G) -> Board
where
    G: IdGenerator + ?Sized,
{
    let mut new_board = board.clone();
    match new_board.apply(action, ids) {
        Ok(_) => new_board,
        Err(err) => {
            log::debug!("Ignoring {:?}: {}", action, err);
            board.clone()
        },
    }
}
