//! Function to evaluate a position.
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops;
use chess::{Color, Piece, Square, Position};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A search score in centipawns, from the perspective of the side to move
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score(i32);

const MATE_VALUE: i32 = 49_000;
const MATE_THRESHOLD: i32 = 48_000;

impl Score {
    /// Returns the greatest possible score
    pub fn infinity() -> Self {
        Score(50_000)
    }

    /// Returns the score for a draw
    pub fn draw() -> Self {
        Score(0)
    }

    /// Returns the score for checkmating in `n` plies
    pub fn mates_in(n: usize) -> Self {
        Score(MATE_VALUE - n as i32)
    }

    /// Returns the score for being checkmated in `n` plies
    pub fn mated_in(n: usize) -> Self {
        Score(-MATE_VALUE + n as i32)
    }

    /// Returns `true` if the score means a forced mate was found
    pub fn is_mate(self) -> bool {
        self.0.abs() > MATE_THRESHOLD
    }

    /// Returns the signed number of plies to the mate this score stands for, if any
    ///
    /// Positive means the side to move delivers mate; negative means it receives it.
    pub fn plies_to_mate(self) -> Option<i32> {
        if self.0 > MATE_THRESHOLD {
            Some(MATE_VALUE - self.0)
        } else if self.0 < -MATE_THRESHOLD {
            Some(-(MATE_VALUE + self.0))
        } else {
            None
        }
    }
}

impl ops::Neg for Score {
    type Output = Score;

    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl ops::Add<i32> for Score {
    type Output = Score;

    fn add(self, rhs: i32) -> Self {
        Score(self.0 + rhs)
    }
}

impl ops::Sub<i32> for Score {
    type Output = Score;

    fn sub(self, rhs: i32) -> Self {
        Score(self.0 - rhs)
    }
}

impl From<i32> for Score {
    fn from(val: i32) -> Self {
        Score(val)
    }
}

impl From<Score> for i32 {
    fn from(val: Score) -> Self {
        val.0
    }
}

const PIECE_VAL: [i32; Piece::COUNT] = [ 100, 320, 330, 500, 1000, 0 ];

// Piece-square bonuses from white's point of view; the board reads top to bottom, so the first
// row is rank 8. Black uses the same tables with the rank flipped.
const PIECE_SQUARE_VAL: [[i32; Square::COUNT]; Piece::COUNT] = [
    [ // Pawn
          0,   0,   0,   0,   0,   0,   0,   0,
         70,  70,  70,  70,  70,  70,  70,  70,
         10,  15,  20,  30,  30,  20,  15,  10,
          5,   7,  10,  20,  20,  10,   7,   5,
          4,  -5,   2,  16,  16,   0,  -5,   4,
          4,  -5,  -5,   5,   4, -10,  -5,   4,
          5,  10,  10, -25, -30,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [ // Knight
        -40, -30, -20, -20, -20, -20, -30, -40,
        -30, -10,   0,   5,   5,   0, -10, -30,
        -20,   7,  12,  15,  15,  12,   7, -20,
        -20,   5,  15,  25,  25,  15,   5, -20,
        -20,   5,  15,  20,  20,  15,   5, -20,
        -20,  10,  10,  12,  12,  10,  10, -20,
        -30, -10,   0,   5,   5,   0, -10, -30,
        -40, -30, -20, -20, -20, -20, -30, -40,
    ],
    [ // Bishop
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   0,   0,   2,   2,   0,   0,  -7,
        -10,   0,   5,   7,  10,   5,   0, -10,
        -10,   5,  13,  10,  10,  10,   5, -10,
        -10,   5,  13,  10,  10,  10,   5, -10,
        -10,  13,  10,   5,   5,  10,  13, -10,
         -7,   5,   0,   0,   0,   0,  15, -10,
        -20, -50, -50, -10, -10, -50, -10, -20,
    ],
    [ // Rook
         10,  10,  20,  40,  40,  20,  10,  10,
         20,  30,  40,  50,  50,  40,  30,  20,
         10,   5,   0,   0,   0,   0,   5,  10,
         10,   5,   0,   0,   0,   0,   5,  10,
         10,   5,   0,   0,   0,   0,   5,  10,
         10,   5,   0,   0,   0,   0,   5,  10,
        -10,   5,  10,  10,  10,  10,   5, -10,
        -20, -10,  20,  30,  30,  20, -10, -30,
    ],
    [ 0; Square::COUNT ], // Queen
    [ // King
        -70, -70, -70, -70, -70, -70, -70, -70,
        -60, -60, -60, -60, -60, -60, -60, -60,
        -50, -50, -50, -50, -50, -50, -50, -50,
        -40, -40, -40, -40, -40, -40, -40, -40,
        -30, -30, -30, -30, -30, -30, -30, -30,
        -10, -20, -20, -20, -20, -20, -20, -10,
         20,  10,   0, -10, -10,   0,  10,  20,
         20,  30,  10,   0,   0, -20,  40,  20,
    ],
];

/// Returns the value of a piece.
pub fn piece_val(piece: Piece) -> i32 {
    PIECE_VAL[piece as usize]
}

/// Evaluates the position from the perspective of the side to move.
///
/// The evaluation is deliberately simple material plus piece placement; the search treats it as
/// an opaque oracle, so it can be swapped for something stronger without touching anything
/// else.
pub fn evaluate(pos: &Position) -> Score {
    use chess::Piece::*;
    let mut score = 0;

    for &piece in &[Pawn, Knight, Bishop, Rook, Queen, King] {
        for sq in pos.occupied_by_piece(Color::White, piece) {
            score += PIECE_VAL[piece as usize];
            score += PIECE_SQUARE_VAL[piece as usize][sq as usize];
        }
        for sq in pos.occupied_by_piece(Color::Black, piece) {
            score -= PIECE_VAL[piece as usize];
            // flip the rank to read the table from black's point of view
            score -= PIECE_SQUARE_VAL[piece as usize][sq as usize ^ 56];
        }
    }

    match pos.turn() {
        Color::White => Score(score),
        Color::Black => Score(-score),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_starting_position_is_balanced() {
        assert_eq!(evaluate(&Position::new()), Score::draw());
    }

    #[test]
    fn evaluation_is_relative_to_the_side_to_move() {
        let white: Position = "k7/8/8/8/8/8/8/KQ6 w - - 0 1".parse().expect("valid fen");
        let black: Position = "k7/8/8/8/8/8/8/KQ6 b - - 0 1".parse().expect("valid fen");

        assert!(evaluate(&white) > Score::draw());
        assert_eq!(evaluate(&black), -evaluate(&white));
    }

    #[test]
    fn material_dominates_placement() {
        // a queen up beats any placement bonus
        let pos: Position = "k7/8/8/8/8/8/8/KQ6 w - - 0 1".parse().expect("valid fen");
        assert!(i32::from(evaluate(&pos)) > 800);
    }

    #[test]
    fn mate_scores_prefer_the_shorter_mate() {
        assert!(Score::mates_in(1) > Score::mates_in(3));
        assert!(Score::mated_in(1) < Score::mated_in(3));
        assert!(Score::mates_in(1) < Score::infinity());

        assert_eq!(Score::mates_in(2).plies_to_mate(), Some(2));
        assert_eq!(Score::mated_in(2).plies_to_mate(), Some(-2));
        assert_eq!(Score::draw().plies_to_mate(), None);
        assert!(Score::mates_in(5).is_mate());
        assert!(!Score::from(300).is_mate());
    }
}
