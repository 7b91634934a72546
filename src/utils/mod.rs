//! Some utility functions

use crate::board::Board;
use crate::item::Item;

/// A debug utility that pretty-prints a board
pub fn print_board(board: &Board) {
    print!("{}", format_board(board));
}

/// The text [`print_board`] prints
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for bucket in board.buckets() {
        out.push_str(&format!("{} ({}) [{}]\n", bucket.title(), bucket.name(), bucket.len()));
        for item in bucket.items() {
            out.push_str(&format_item(item));
            out.push('\n');
        }
    }
    out
}

pub fn print_item(item: &Item) {
    println!("{}", format_item(item));
}

fn format_item(item: &Item) -> String {
    let completion = if item.done() { "✓" } else { " " };
    format!("    {} {}\t{}", completion, item.text(), item.id())
}
