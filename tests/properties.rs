//! Property-based tests for the win checker and the game controller.

use proptest::prelude::*;
use tictactoe::rules::{find_winning_line, find_winning_mark, is_tie};
use tictactoe::{Board, GameState, Mark, Status, TOTAL_CELLS};

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Empty), Just(Mark::X), Just(Mark::O)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_mark()).prop_map(Board::from_cells)
}

#[derive(Debug, Clone)]
enum Action {
    Click(usize),
    Jump(usize),
    ToggleSort,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..TOTAL_CELLS).prop_map(Action::Click),
        2 => (0usize..10).prop_map(Action::Jump),
        1 => Just(Action::ToggleSort),
    ]
}

/// Lines walked by coordinates rather than through the rules table
fn has_uniform_line(board: &Board, mark: Mark) -> bool {
    let at = |r: usize, c: usize| board.get(r * 3 + c);
    let rows = (0..3).any(|r| (0..3).all(|c| at(r, c) == mark));
    let cols = (0..3).any(|c| (0..3).all(|r| at(r, c) == mark));
    let diag = (0..3).all(|i| at(i, i) == mark);
    let anti = (0..3).all(|i| at(i, 2 - i) == mark);
    rows || cols || diag || anti
}

fn apply(game: &mut GameState, action: &Action) {
    match *action {
        Action::Click(cell) => {
            game.handle_cell_click(cell);
        }
        Action::Jump(target) => {
            if target < game.history_len() {
                game.jump_to(target).unwrap();
            }
        }
        Action::ToggleSort => game.toggle_sort_order(),
    }
}

fn check_history(game: &GameState) -> Result<(), TestCaseError> {
    let history = game.history();
    prop_assert_eq!(history[0].board, Board::new());
    prop_assert!(game.current_move() < game.history_len());
    prop_assert_eq!(game.locations().len(), game.history_len() - 1);

    for (i, pair) in history.windows(2).enumerate() {
        let changed = pair[1].board.diff(&pair[0].board);
        prop_assert_eq!(changed.len(), 1);
        let cell = changed[0];
        prop_assert_eq!(pair[0].board.get(cell), Mark::Empty);
        prop_assert_eq!(pair[1].board.get(cell), Mark::to_move(i));
        prop_assert_eq!(pair[1].location.map(|c| c.to_index()), Some(cell));
    }
    Ok(())
}

proptest! {
    #[test]
    fn winning_mark_matches_lines(board in arb_board()) {
        match find_winning_mark(&board) {
            Some(mark) => {
                prop_assert!(!mark.is_empty());
                prop_assert!(has_uniform_line(&board, mark));
                let line = find_winning_line(&board).unwrap();
                prop_assert!(line.iter().all(|&i| board.get(i) == mark));
            }
            None => {
                prop_assert!(!has_uniform_line(&board, Mark::X));
                prop_assert!(!has_uniform_line(&board, Mark::O));
                prop_assert!(find_winning_line(&board).is_none());
            }
        }
    }

    #[test]
    fn full_board_is_win_or_tie_never_both(
        cells in proptest::array::uniform9(prop_oneof![Just(Mark::X), Just(Mark::O)]),
    ) {
        let board = Board::from_cells(cells);
        let won = find_winning_mark(&board).is_some();
        prop_assert_eq!(is_tie(&board, TOTAL_CELLS), !won);
    }

    #[test]
    fn clicks_keep_history_consistent(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut game = GameState::default();
        for action in &actions {
            let before = game.current_board();
            let was_won = find_winning_mark(&before).is_some();
            let len_before = game.history_len();

            apply(&mut game, action);
            check_history(&game)?;

            if let Action::Click(cell) = *action {
                if was_won || !before.is_empty(cell) {
                    prop_assert_eq!(game.history_len(), len_before);
                    prop_assert_eq!(game.current_board(), before);
                } else {
                    prop_assert_eq!(game.history_len(), game.current_move() + 1);
                    prop_assert_eq!(game.current_board().diff(&before), vec![cell]);
                }
            }
        }
    }

    #[test]
    fn status_precedence(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut game = GameState::default();
        for action in &actions {
            apply(&mut game, action);
        }
        let board = game.current_board();
        match game.status() {
            Status::Winner(mark) => prop_assert_eq!(find_winning_mark(&board), Some(mark)),
            Status::Tie => {
                prop_assert!(board.is_full());
                prop_assert!(find_winning_mark(&board).is_none());
            }
            Status::NextPlayer(mark) => {
                prop_assert!(!board.is_full());
                prop_assert_eq!(mark, Mark::to_move(game.current_move()));
            }
        }
    }

    #[test]
    fn jump_is_idempotent(
        actions in proptest::collection::vec(arb_action(), 0..30),
        target in 0usize..10,
    ) {
        let mut game = GameState::default();
        for action in &actions {
            apply(&mut game, action);
        }
        let target = target % game.history_len();

        game.jump_to(target).unwrap();
        let once = (game.current_move(), game.history().to_vec(), game.move_list());
        game.jump_to(target).unwrap();
        let twice = (game.current_move(), game.history().to_vec(), game.move_list());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn double_toggle_restores_move_list(actions in proptest::collection::vec(arb_action(), 0..30)) {
        let mut game = GameState::default();
        for action in &actions {
            apply(&mut game, action);
        }
        let before = game.move_list();
        game.toggle_sort_order();
        game.toggle_sort_order();
        prop_assert_eq!(game.move_list(), before);
    }
}
