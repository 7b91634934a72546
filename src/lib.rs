//! This crate provides task boards: kanban columns, weekly planners, or plain to-do lists.
//!
//! A [`Board`] holds items, partitioned into named ordered buckets (a column, or a day). The set of buckets is fixed by
//! the [`Layout`](layout::Layout) the board is built from.
//!
//! Boards are changed through [`Action`](action::Action)s: adding, deleting, renaming or toggling an item, and
//! drag-and-drop [moves](reorder::MoveRequest) within a bucket or across buckets. [`action::reduce`] applies an action
//! and returns the new board, ignoring actions that make no sense (blank text, unknown item...).
//!
//! A [`TaskBoard`] combines a board with a [`Store`](store::Store), so that the board is saved (e.g. to a local JSON
//! file) after every change, and loaded back on startup.

pub mod error;
pub use error::{BoardError, ErrorKind, StoreError};
mod item;
pub use item::{CompletionStatus, Item, ItemId};
pub mod layout;
pub mod id;
pub mod board;
pub use board::Board;
pub mod reorder;
pub mod action;
pub mod store;
mod session;
pub use session::{DefaultTaskBoard, TaskBoard};

pub mod config;
pub mod utils;
