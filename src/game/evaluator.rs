//! Win detection for a just-placed piece.
//!
//! Only the four lines through the placed cell can have changed, so the
//! evaluator scans outward from it along each axis instead of sweeping the
//! whole board.

use serde::Serialize;

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Length of a run that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Axis direction vectors: horizontal, vertical, and the two diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal \
    (1, -1), // Diagonal /
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveVerdict {
    Win,
    Continue,
}

/// Classify the piece at `(row, col)` as placed by `player`.
///
/// `player` must be the one who just moved. Reading the state's current
/// player here is wrong once the turn has already advanced.
pub fn evaluate(board: &Board, row: usize, col: usize, player: Player) -> MoveVerdict {
    let wins = DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, row, col, player, dir) >= WIN_LENGTH);

    if wins {
        MoveVerdict::Win
    } else {
        MoveVerdict::Continue
    }
}

/// Length of the run through `(row, col)` along `dir` and its opposite,
/// counting the cell itself.
pub fn run_length(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    (dr, dc): (isize, isize),
) -> usize {
    1 + count_direction(board, row, col, player, dr, dc)
        + count_direction(board, row, col, player, -dr, -dc)
}

/// Consecutive cells matching `player` starting one step away from
/// `(row, col)`. Stops at the edge, an empty cell, or an opponent piece.
fn count_direction(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    dr: isize,
    dc: isize,
) -> usize {
    let mark = player.to_cell();
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;

    while in_bounds(r, c) && board.get(r as usize, c as usize) == mark {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}

fn in_bounds(r: isize, c: isize) -> bool {
    r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop a sequence of (column, player) pieces and return the last landing row.
    fn play(board: &mut Board, moves: &[(usize, Player)]) -> usize {
        let mut row = 0;
        for &(col, player) in moves {
            row = board.drop_piece(col, player).unwrap();
        }
        row
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(evaluate(&board, row, 3, Player::Red), MoveVerdict::Win);
    }

    #[test]
    fn test_horizontal_win_completed_in_the_middle() {
        let mut board = Board::new();
        for col in [0, 1, 3] {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        let row = board.drop_piece(2, Player::Yellow).unwrap();
        assert_eq!(evaluate(&board, row, 2, Player::Yellow), MoveVerdict::Win);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        let row = play(&mut board, &[(3, Player::Yellow); 4]);
        assert_eq!(row, 2);
        assert_eq!(evaluate(&board, row, 3, Player::Yellow), MoveVerdict::Win);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Diagonal / pattern
        let row = play(
            &mut board,
            &[
                (0, Player::Red),
                (1, Player::Yellow),
                (1, Player::Red),
                (2, Player::Yellow),
                (2, Player::Yellow),
                (2, Player::Red),
                (3, Player::Yellow),
                (3, Player::Yellow),
                (3, Player::Yellow),
                (3, Player::Red),
            ],
        );
        assert_eq!(evaluate(&board, row, 3, Player::Red), MoveVerdict::Win);
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Diagonal \ pattern
        let row = play(
            &mut board,
            &[
                (6, Player::Red),
                (5, Player::Yellow),
                (5, Player::Red),
                (4, Player::Yellow),
                (4, Player::Yellow),
                (4, Player::Red),
                (3, Player::Yellow),
                (3, Player::Yellow),
                (3, Player::Yellow),
                (3, Player::Red),
            ],
        );
        assert_eq!(evaluate(&board, row, 3, Player::Red), MoveVerdict::Win);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert_eq!(evaluate(&board, 5, 1, Player::Red), MoveVerdict::Continue);
        assert_eq!(run_length(&board, 5, 1, Player::Red, (0, 1)), 3);
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (0, Player::Red),
                (1, Player::Red),
                (2, Player::Yellow),
                (3, Player::Red),
                (4, Player::Red),
            ],
        );
        assert_eq!(evaluate(&board, 5, 4, Player::Red), MoveVerdict::Continue);
        assert_eq!(run_length(&board, 5, 3, Player::Red, (0, 1)), 2);
    }

    #[test]
    fn test_empty_gap_breaks_run() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (0, Player::Red),
                (1, Player::Red),
                (3, Player::Red),
                (4, Player::Red),
            ],
        );
        assert_eq!(evaluate(&board, 5, 4, Player::Red), MoveVerdict::Continue);
    }

    #[test]
    fn test_run_length_stops_at_edges() {
        let mut board = Board::new();
        board.drop_piece(0, Player::Red).unwrap();
        for dir in DIRECTIONS {
            assert_eq!(run_length(&board, 5, 0, Player::Red, dir), 1);
        }
    }

    #[test]
    fn test_evaluates_with_mover_mark() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        // Red completed the run; asking on behalf of the next player must not
        // report a win for the wrong mark.
        assert_eq!(evaluate(&board, 5, 3, Player::Red), MoveVerdict::Win);
        assert_eq!(evaluate(&board, 5, 3, Player::Yellow), MoveVerdict::Continue);
    }

    #[test]
    fn test_longer_run_still_wins() {
        let mut board = Board::new();
        for col in [0, 1, 2, 4, 5] {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(run_length(&board, row, 3, Player::Yellow, (0, 1)), 6);
        assert_eq!(evaluate(&board, row, 3, Player::Yellow), MoveVerdict::Win);
    }
}
