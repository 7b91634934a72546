//! This is an example of how task-board can be used.
//! It opens (or creates) a three-column board saved in a local file, moves a few items around, and prints the result.

use std::path::Path;

use task_board::id::UuidGenerator;
use task_board::layout::Layout;
use task_board::reorder::{MoveRequest, Slot};
use task_board::store::JsonFileStore;
use task_board::utils::print_board;
use task_board::TaskBoard;

const BOARD_FILE: &str = "example_board/kanban.json";

fn main() {
    env_logger::init();

    println!("This example shows a three-column board, saved into {} after every change.", BOARD_FILE);
    println!("You can also set the RUST_LOG environment variable to display more info (e.g. ignored changes).");
    println!("");

    let store = JsonFileStore::new(Path::new(BOARD_FILE));
    let mut board = TaskBoard::open(store, UuidGenerator, &Layout::kanban());

    if board.board().item_count() == 0 {
        for (bucket, text) in &[
            ("todo", "Preparar informe mensual"),
            ("todo", "Revisar inventario"),
            ("proceso", "Empacar pedidos"),
            ("delegadas", "Contacto con proveedor"),
        ] {
            board.add_item(bucket, text);
        }
    }

    println!("---- before -----");
    print_board(board.board());

    // Start working on the first task, and put the last in-progress one back on top of the to-do list
    board.apply_move(MoveRequest::to(Slot::new("todo", 0), Slot::new("proceso", 0)));
    let last_in_progress = board.board().bucket("proceso").map(|b| b.len().saturating_sub(1)).unwrap_or(0);
    board.apply_move(MoveRequest::to(Slot::new("proceso", last_in_progress), Slot::new("todo", 0)));

    // This one is ignored, there is no such column
    board.add_item("done", "Celebrar");

    println!("---- after -----");
    print_board(board.board());
}
