//! End-to-end games through the public `Session` API

use gomoku::board::TOTAL_CELLS;
use gomoku::rules::{check_winner, has_five_in_row};
use gomoku::session::{MOVE_LIMIT, OPPONENT, PLAYER};
use gomoku::{AIEngine, Board, GameStatus, MoveKind, Pos, Session, Stone};

/// Two-wide stripes that never line up five stones of one color
fn stripe_color(x: i32, y: i32) -> Stone {
    if (x / 2 + y) % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

#[test]
fn test_vertical_five_wins() {
    let mut session = Session::new();
    for y in 7..11 {
        assert!(session.place_stone(7, y, PLAYER).applied);
        assert!(session.place_stone(0, y - 7, OPPONENT).applied);
    }
    assert_eq!(session.status(), GameStatus::InProgress);

    let outcome = session.place_stone(7, 11, PLAYER);
    assert!(outcome.applied && outcome.won);
    assert_eq!(session.status(), GameStatus::Won(PLAYER));

    let line = session.winning_line().unwrap();
    assert_eq!(line.len(), 5);
    assert!(line.iter().all(|p| p.col == 7 && (7..=11).contains(&p.row)));
}

#[test]
fn test_five_wins_on_every_axis() {
    let lines: [[(i32, i32); 5]; 4] = [
        [(2, 4), (3, 4), (4, 4), (5, 4), (6, 4)],
        [(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)],
        [(5, 5), (6, 6), (7, 7), (8, 8), (9, 9)],
        [(14, 0), (13, 1), (12, 2), (11, 3), (10, 4)],
    ];

    for line in lines {
        let mut session = Session::new();
        // Finish the line in the middle so both halves are counted
        for &(x, y) in line.iter().filter(|&&cell| cell != line[2]) {
            assert!(!session.place_stone(x, y, OPPONENT).won);
        }
        let (x, y) = line[2];
        assert!(session.place_stone(x, y, OPPONENT).won, "line {:?}", line);
        assert_eq!(session.status(), GameStatus::Won(OPPONENT));
        assert_eq!(check_winner(session.board()), Some(OPPONENT));
    }
}

#[test]
fn test_overline_wins() {
    let mut session = Session::new();
    for x in [0, 1, 3, 4, 5] {
        session.place_stone(x, 12, PLAYER);
    }
    assert!(session.place_stone(2, 12, PLAYER).won);
    assert_eq!(session.winning_line().map(<[Pos]>::len), Some(6));
}

#[test]
fn test_capped_four_is_not_a_win() {
    let mut session = Session::new();
    session.place_stone(2, 5, OPPONENT);
    session.place_stone(7, 5, OPPONENT);
    for x in 3..7 {
        assert!(!session.place_stone(x, 5, PLAYER).won);
    }
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(!has_five_in_row(session.board(), PLAYER));
}

#[test]
fn test_finished_game_rejects_everything_until_reset() {
    let mut session = Session::new();
    for x in 0..5 {
        session.place_stone(x, 0, PLAYER);
    }
    assert!(session.status().is_over());

    let board = session.board().clone();
    assert!(!session.place_stone(10, 10, PLAYER).applied);
    assert!(session.request_hint().is_none());
    assert!(session.request_opponent_move().is_none());
    assert!(!session.undo_last_round());
    assert_eq!(session.board(), &board);

    session.reset();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.board().is_board_empty());
    assert!(session.place_stone(10, 10, PLAYER).applied);
}

#[test]
fn test_undo_restores_previous_board() {
    let mut session = Session::new();
    session.place_stone(7, 7, PLAYER);
    session.request_opponent_move().unwrap();
    let before = session.board().clone();

    session.place_stone(3, 11, PLAYER);
    let reply = session.request_opponent_move().unwrap();
    let after = session.board().clone();
    assert_eq!(session.history().len(), 4);

    assert!(session.undo_last_round());
    assert_eq!(session.board(), &before);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.moves_remaining(), MOVE_LIMIT - 2);
    assert_eq!(session.next_to_move(), PLAYER);

    // Replaying the same round lands on the same board
    session.place_stone(3, 11, PLAYER);
    session.place_stone(reply.x(), reply.y(), OPPONENT);
    assert_eq!(session.board(), &after);
}

#[test]
fn test_undo_needs_a_full_round() {
    let mut session = Session::new();
    assert!(!session.undo_last_round());
    session.place_stone(7, 7, PLAYER);
    assert!(!session.undo_last_round());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_hint_matches_the_opponent_reply() {
    let mut session = Session::new();
    for (x, y) in [(7, 7), (8, 7), (9, 7), (6, 8)] {
        session.place_stone(x, y, PLAYER);
    }
    for (x, y) in [(6, 7), (5, 5), (10, 10)] {
        session.place_stone(x, y, OPPONENT);
    }

    let board = session.board().clone();
    let hint = session.request_hint().unwrap();
    assert_eq!(session.board(), &board);
    assert_eq!(session.history().len(), 7);
    assert!(session.last_ai_result().is_none());

    assert_eq!(session.request_opponent_move(), Some(hint));
    assert_eq!(session.board().get(hint), OPPONENT);
}

#[test]
fn test_opponent_blocks_open_four() {
    let mut session = Session::new();
    for y in 4..8 {
        session.place_stone(9, y, PLAYER);
    }
    session.place_stone(0, 14, OPPONENT);
    session.place_stone(1, 14, OPPONENT);
    session.place_stone(2, 14, OPPONENT);

    let reply = session.request_opponent_move().unwrap();
    assert!(reply == Pos::from_xy(9, 3).unwrap() || reply == Pos::from_xy(9, 8).unwrap());
    assert_eq!(session.last_ai_result().map(|r| r.kind), Some(MoveKind::Defense));
}

#[test]
fn test_opponent_prefers_its_own_win() {
    let mut session = Session::new();
    for x in 4..8 {
        session.place_stone(x, 1, OPPONENT);
        session.place_stone(x, 13, PLAYER);
    }
    let reply = session.request_opponent_move().unwrap();
    assert_eq!(reply.row, 1);
    assert_eq!(session.status(), GameStatus::Won(OPPONENT));
    assert_eq!(session.last_ai_result().map(|r| r.kind), Some(MoveKind::ImmediateWin));
}

#[test]
fn test_open_diagonal_against_corner_is_preferred() {
    let mut board = Board::new();
    for i in 0..3 {
        board.place_stone(Pos::from_xy(i, i).unwrap(), Stone::White);
    }
    // (3,3) extends the run to an uncapped four; nothing else comes close
    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(&board, Stone::White);
    assert_eq!(result.best_move, Pos::from_xy(3, 3));
    assert!(result.own_score >= 10_000);
    assert_eq!(result.nodes, (TOTAL_CELLS - 3) as u64);
}

#[test]
fn test_full_board_is_a_draw() {
    let mut session = Session::new();
    let mut last = None;
    for y in 0..15 {
        for x in 0..15 {
            last = Some(session.place_stone(x, y, stripe_color(x, y)));
        }
    }

    let last = last.unwrap();
    assert!(last.applied && !last.won);
    assert_eq!(session.status(), GameStatus::Draw);
    assert!(session.board().is_full());
    assert_eq!(session.moves_remaining(), 0);
    assert!(session.request_hint().is_none());
}

#[test]
fn test_engine_stats_count_hints_and_replies() {
    let mut session = Session::new();
    session.place_stone(7, 7, PLAYER);
    session.request_hint().unwrap();
    session.request_opponent_move().unwrap();

    let stats = session.engine().stats();
    assert_eq!(stats.searches, 2);
    assert_eq!(stats.nodes, 2 * (TOTAL_CELLS - 1) as u64);
}

#[test]
fn test_self_play_finishes() {
    let mut session = Session::new();
    while !session.status().is_over() {
        let color = session.next_to_move();
        if session.play_engine_move(color).is_none() {
            break;
        }
        assert!(session.history().len() <= TOTAL_CELLS);
    }
    assert!(session.status().is_over());
}
