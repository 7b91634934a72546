//! This is an example of how task-board can be used.
//! This binary simply toggles all completion statuses of the items of the board saved at the default location.

use task_board::utils::print_board;
use task_board::{DefaultTaskBoard, ItemId};

fn main() {
    env_logger::init();

    let mut board = DefaultTaskBoard::open_default();
    println!("Using the board saved at {:?}", board.store().path());

    let ids: Vec<ItemId> = board.board().buckets().iter()
        .flat_map(|bucket| bucket.items())
        .map(|item| item.id().clone())
        .collect();

    let mut n_toggled = 0;
    for id in &ids {
        if board.toggle_done(id) {
            n_toggled += 1;
        }
    }

    println!("{} items toggled.", n_toggled);
    print_board(board.board());
}
