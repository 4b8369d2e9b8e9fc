//! Contains structure and data for Zobrist hash keys
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use lazy_static::lazy_static;
use crate::bitboard::magics::XorShift;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A 64-bit hash key generated from a position
///
/// The key is maintained incrementally through `make` and `unmake` and is the position
/// fingerprint a transposition table or repetition check would consume. The underlying random
/// tables are generated once from the same seeded xorshift generator as the magic search, so
/// keys are stable from run to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Zobrist(u64);

struct ZobristKeys {
    pieces: [[u64; Square::COUNT]; Color::COUNT * Piece::COUNT],
    en_passant: [u64; Square::COUNT],
    castling: [u64; 16],
    black_to_move: u64,
}

lazy_static! {
    static ref KEYS: ZobristKeys = ZobristKeys::new();
}

impl ZobristKeys {
    fn new() -> ZobristKeys {
        let mut rng = XorShift::new();
        let mut keys = ZobristKeys {
            pieces: [[0; Square::COUNT]; Color::COUNT * Piece::COUNT],
            en_passant: [0; Square::COUNT],
            castling: [0; 16],
            black_to_move: 0,
        };

        for piece in keys.pieces.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.next_u64();
            }
        }
        for key in keys.en_passant.iter_mut() {
            *key = rng.next_u64();
        }
        for key in keys.castling.iter_mut() {
            *key = rng.next_u64();
        }
        keys.black_to_move = rng.next_u64();

        keys
    }
}

impl Zobrist {
    /// Creates a new zobrist key
    pub fn new() -> Zobrist {
        Zobrist(0)
    }

    /// Toggles piece placement
    pub fn toggle_piece_placement(&mut self, c: Color, p: Piece, sq: Square) {
        self.0 ^= KEYS.pieces[piece_index(c, p)][sq as usize];
    }

    /// Toggles an en passant square
    pub fn toggle_ep_square(&mut self, sq: Square) {
        self.0 ^= KEYS.en_passant[sq as usize];
    }

    /// Toggles a set of castling flags
    pub fn toggle_castling_rights(&mut self, rights: CastlingRights) {
        self.0 ^= KEYS.castling[rights.bits() as usize];
    }

    /// Toggles whose turn it is
    pub fn toggle_turn(&mut self) {
        self.0 ^= KEYS.black_to_move;
    }
}

impl fmt::Display for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::UpperHex for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::LowerHex for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Zobrist> for u64 {
    /// Allows using the key to get a hash table index
    fn from(key: Zobrist) -> u64 {
        key.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_involutions() {
        let mut key = Zobrist::new();
        key.toggle_piece_placement(Color::White, Piece::Knight, Square::G1);
        key.toggle_ep_square(Square::E3);
        key.toggle_castling_rights(CastlingRights::all());
        key.toggle_turn();
        assert_ne!(key, Zobrist::new());

        key.toggle_turn();
        key.toggle_castling_rights(CastlingRights::all());
        key.toggle_ep_square(Square::E3);
        key.toggle_piece_placement(Color::White, Piece::Knight, Square::G1);
        assert_eq!(key, Zobrist::new());
    }

    #[test]
    fn distinct_placements_have_distinct_keys() {
        let mut a = Zobrist::new();
        a.toggle_piece_placement(Color::White, Piece::Rook, Square::A1);
        let mut b = Zobrist::new();
        b.toggle_piece_placement(Color::Black, Piece::Rook, Square::A1);
        let mut c = Zobrist::new();
        c.toggle_piece_placement(Color::White, Piece::Rook, Square::A2);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }
}
