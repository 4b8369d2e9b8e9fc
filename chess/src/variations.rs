//! Module for counting and printing the number of variations from a given position
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! Counting leaf nodes of the move tree (better known as perft) is the correctness oracle for
//! the move generator and the make/unmake machinery: the totals for well-known positions are
//! community reference values, and any deviation pinpoints a generation or undo bug. The
//! [`print`](fn.print.html) variant additionally reports the subtree size under each root move,
//! which narrows a wrong total down to the responsible move in a couple of runs.
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::{MoveMode, Position};

/// Print the number of variations of the given `depth` for each legal move from `pos`
///
/// The position is left exactly as it was when the function was called.
pub fn print(pos: &mut Position, depth: usize) -> u64 {
    if depth < 1 {
        return 1;
    }

    let mut total = 0;

    let moves = pos.moves();
    for &m in &moves {
        if pos.make(m, MoveMode::AllMoves) {
            let count = count(pos, depth - 1);
            total += count;
            pos.unmake(m);
            println!("\t{:7}\t{:12}", m.to_string(), count);
        }
    }

    total
}

/// Count the number of variations of the given `depth` from `pos`
///
/// The position is left exactly as it was when the function was called.
pub fn count(pos: &mut Position, depth: usize) -> u64 {
    if depth < 1 {
        return 1;
    }

    let mut total = 0;

    let moves = pos.moves();
    for &m in &moves {
        if pos.make(m, MoveMode::AllMoves) {
            total += count(pos, depth - 1);
            pos.unmake(m);
        }
    }

    total
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_counts_from_the_starting_position() {
        let mut pos = Position::new();
        assert_eq!(count(&mut pos, 1), 20);
        assert_eq!(count(&mut pos, 2), 400);
        assert_eq!(count(&mut pos, 3), 8902);
        assert_eq!(count(&mut pos, 4), 197_281);
    }

    #[test]
    fn counting_leaves_the_position_untouched() {
        let mut pos: Position =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse().expect("valid fen");
        let before = pos.clone();

        count(&mut pos, 3);

        assert!(pos == before);
    }

    #[test]
    fn depth_zero_is_a_single_leaf() {
        let mut pos = Position::new();
        assert_eq!(count(&mut pos, 0), 1);
    }
}
