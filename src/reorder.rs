//! Drag-and-drop moves of items, within a bucket or across buckets
//!
//! A move takes the item found at a source [`Slot`] and either
//! * drops it at a destination slot (possibly in the same bucket), or
//! * drops it outside of any bucket, which deletes it.
//!
//! Reordering within a bucket uses remove-then-insert semantics: the destination index is an index in the list *after*
//! the item has been taken out of it. Moving `[a, b, c]` from index 0 to index 2 gives `[b, c, a]`, not a swap.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::BoardError;

/// A position on a board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub bucket: String,
    pub index: usize,
}

impl Slot {
    pub fn new<S: Into<String>>(bucket: S, index: usize) -> Self {
        Self { bucket: bucket.into(), index }
    }
}

/// The outcome of a drag gesture
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: Slot,
    /// `None` when the item has been dropped outside of any bucket
    pub destination: Option<Slot>,
}

impl MoveRequest {
    /// Move an item to another slot
    pub fn to(source: Slot, destination: Slot) -> Self {
        Self { source, destination: Some(destination) }
    }

    /// Drop an item outside of any bucket
    pub fn drop_outside(source: Slot) -> Self {
        Self { source, destination: None }
    }
}

impl Board {
    /// Apply a move in place.
    ///
    /// Returns `Ok(false)` if the move leaves the board as it was (an item dropped back where it was taken from).
    /// The request is fully checked before anything is modified, so that an invalid request never loses an item.
    ///
    /// A destination index past the end of the destination bucket means "at the tail".
    pub fn try_move(&mut self, request: &MoveRequest) -> Result<bool, BoardError> {
        let source = &request.source;
        let src = self.bucket_index(&source.bucket)?;

        let destination = match &request.destination {
            None => {
                if source.index >= self.buckets()[src].len() {
                    return Err(out_of_bounds(source));
                }
                let removed = self.buckets_mut()[src].items_mut().remove(source.index);
                log::debug!("Item {} dropped outside of the board, deleting it", removed.id());
                return Ok(true);
            },
            Some(d) => d,
        };
        let dst = self.bucket_index(&destination.bucket)?;

        if src == dst && source.index == destination.index {
            return Ok(false);
        }
        if source.index >= self.buckets()[src].len() {
            return Err(out_of_bounds(source));
        }

        let moved = self.buckets_mut()[src].items_mut().remove(source.index);
        let dst_items = self.buckets_mut()[dst].items_mut();
        let index = destination.index.min(dst_items.len());
        dst_items.insert(index, moved);
        Ok(true)
    }
}

fn out_of_bounds(slot: &Slot) -> BoardError {
    BoardError::IndexOutOfBounds {
        bucket: slot.bucket.clone(),
        index: slot.index,
    }
}

/// Returns the board as it is after `request`.
///
/// Requests that cannot be applied (unknown bucket, no item at the source index) are ignored: the returned board is
/// then equal to `board`.
pub fn apply_move(board: &Board, request: &MoveRequest) -> Board {
    let mut new_board = board.clone();
    match new_board.try_move(request) {
        Ok(_) => new_board,
        Err(err) => {
            log::debug!("Ignoring move {:?}: {}", request, err);
            board.clone()
        },
    }
}
