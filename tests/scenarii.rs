//! Scenarios of drag-and-drop moves, each checked against the expected content of every bucket

use task_board::action::{reduce, Action};
use task_board::id::SequentialGenerator;
use task_board::layout::Layout;
use task_board::reorder::{apply_move, MoveRequest, Slot};
use task_board::Board;
use task_board::ItemId;

pub struct MoveScenario {
    description: &'static str,
    request: MoveRequest,
    /// The ids in every bucket after the move, in layout order
    after: Vec<Vec<&'static str>>,
}

/// Populate a kanban board with the following:
/// * todo:      A(todo-1), B(todo-2), C(todo-3)
/// * proceso:   D(proceso-4)
/// * delegadas: (empty)
fn populate_board() -> Board {
    let actions = vec![
        Action::Add { bucket: "todo".into(), text: "Task A".into() },
        Action::Add { bucket: "todo".into(), text: "Task B".into() },
        Action::Add { bucket: "todo".into(), text: "Task C".into() },
        Action::Add { bucket: "proceso".into(), text: "Task D".into() },
    ];

    let mut ids = SequentialGenerator::new();
    actions.iter().fold(Board::new(&Layout::kanban()), |board, action| reduce(&board, action, &mut ids))
}

fn move_scenarii() -> Vec<MoveScenario> {
    vec![
        MoveScenario {
            description: "reorder down",
            request: MoveRequest::to(Slot::new("todo", 0), Slot::new("todo", 2)),
            after: vec![vec!["todo-2", "todo-3", "todo-1"], vec!["proceso-4"], vec![]],
        },
        MoveScenario {
            description: "reorder up",
            request: MoveRequest::to(Slot::new("todo", 2), Slot::new("todo", 1)),
            after: vec![vec!["todo-1", "todo-3", "todo-2"], vec!["proceso-4"], vec![]],
        },
        MoveScenario {
            description: "to an empty column",
            request: MoveRequest::to(Slot::new("todo", 1), Slot::new("delegadas", 0)),
            after: vec![vec!["todo-1", "todo-3"], vec!["proceso-4"], vec!["todo-2"]],
        },
        MoveScenario {
            description: "in front of an existing item",
            request: MoveRequest::to(Slot::new("todo", 2), Slot::new("proceso", 0)),
            after: vec![vec!["todo-1", "todo-2"], vec!["todo-3", "proceso-4"], vec![]],
        },
        MoveScenario {
            description: "after an existing item",
            request: MoveRequest::to(Slot::new("proceso", 0), Slot::new("todo", 3)),
            after: vec![vec!["todo-1", "todo-2", "todo-3", "proceso-4"], vec![], vec![]],
        },
        MoveScenario {
            description: "past the end of a column",
            request: MoveRequest::to(Slot::new("todo", 0), Slot::new("proceso", 10)),
            after: vec![vec!["todo-2", "todo-3"], vec!["proceso-4", "todo-1"], vec![]],
        },
        MoveScenario {
            description: "dropped back in place",
            request: MoveRequest::to(Slot::new("todo", 1), Slot::new("todo", 1)),
            after: vec![vec!["todo-1", "todo-2", "todo-3"], vec!["proceso-4"], vec![]],
        },
        MoveScenario {
            description: "dropped outside",
            request: MoveRequest::drop_outside(Slot::new("proceso", 0)),
            after: vec![vec!["todo-1", "todo-2", "todo-3"], vec![], vec![]],
        },
        MoveScenario {
            description: "from an empty column",
            request: MoveRequest::to(Slot::new("delegadas", 0), Slot::new("todo", 0)),
            after: vec![vec!["todo-1", "todo-2", "todo-3"], vec!["proceso-4"], vec![]],
        },
        MoveScenario {
            description: "to an unknown column",
            request: MoveRequest::to(Slot::new("todo", 0), Slot::new("done", 0)),
            after: vec![vec!["todo-1", "todo-2", "todo-3"], vec!["proceso-4"], vec![]],
        },
    ]
}

fn ids_per_bucket(board: &Board) -> Vec<Vec<String>> {
    board.buckets().iter()
        .map(|bucket| bucket.items().iter().map(|item| item.id().to_string()).collect())
        .collect()
}

#[test]
fn moves() {
    let board = populate_board();

    for scenario in move_scenarii() {
        let moved = apply_move(&board, &scenario.request);
        let expected: Vec<Vec<String>> = scenario.after.iter()
            .map(|ids| ids.iter().map(|id| id.to_string()).collect())
            .collect();
        assert_eq!(ids_per_bucket(&moved), expected, "scenario \"{}\"", scenario.description);

        // Moves never change an item, they only relocate it
        for bucket in moved.buckets() {
            for item in bucket.items() {
                let (_, _, original) = board.find(item.id()).unwrap();
                assert_eq!(item, original, "scenario \"{}\"", scenario.description);
            }
        }
    }
}

#[test]
fn move_then_move_back() {
    let board = populate_board();
    let id = ItemId::from("todo-2");

    let there = apply_move(&board, &MoveRequest::to(Slot::new("todo", 1), Slot::new("delegadas", 0)));
    let (bucket, index, _) = there.find(&id).unwrap();
    assert_eq!((bucket.as_str(), index), ("delegadas", 0));

    let back = apply_move(&there, &MoveRequest::to(Slot::new("delegadas", 0), Slot::new("todo", 1)));
    assert_eq!(back, board);
}

#[test]
fn a_day_of_work() {
    let mut ids = SequentialGenerator::new();
    let mut board = populate_board();

    // This generator starts over at 1, ids already on the board are skipped
    board = reduce(&board, &Action::Add { bucket: "todo".into(), text: "Task E".into() }, &mut ids);
    assert_eq!(board.item_count(), 5);
    let fresh_id = board.bucket("todo").unwrap().items().last().unwrap().id().clone();
    assert_eq!(fresh_id, ItemId::from("todo-4"));

    let steps = vec![
        Action::Move(MoveRequest::to(Slot::new("todo", 0), Slot::new("proceso", 1))),
        Action::Toggle { id: ItemId::from("proceso-4") },
        Action::Move(MoveRequest::to(Slot::new("proceso", 0), Slot::new("delegadas", 0))),
        Action::Rename { id: fresh_id.clone(), text: "Task E, rephrased".into() },
        Action::Delete { id: ItemId::from("todo-3") },
        Action::Add { bucket: "delegadas".into(), text: "".into() },
    ];
    for step in &steps {
        board = reduce(&board, step, &mut ids);
    }

    assert_eq!(ids_per_bucket(&board), vec![
        vec!["todo-2".to_string(), "todo-4".to_string()],
        vec!["todo-1".to_string()],
        vec!["proceso-4".to_string()],
    ]);
    assert!(board.find(&ItemId::from("proceso-4")).unwrap().2.done());
    assert_eq!(board.find(&fresh_id).unwrap().2.text(), "Task E, rephrased");
}
