//! Provides data and functions used to compute attacks
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use super::*;
use super::magics::*;

const NOT_FILE_A: u64 = 0xfefe_fefe_fefe_fefe;
const NOT_FILE_H: u64 = 0x7f7f_7f7f_7f7f_7f7f;
const NOT_FILE_AB: u64 = 0xfcfc_fcfc_fcfc_fcfc;
const NOT_FILE_GH: u64 = 0x3f3f_3f3f_3f3f_3f3f;

/// All of the precomputed attack tables.
///
/// The leaper tables are filled square by square from shift masks. The slider tables hold one
/// attack set per (square, blocker subset) pair, placed at the index the square's magic
/// multiplier produces, so the runtime lookup is a mask, a multiply, a shift and an array
/// access. Initialization is deterministic: the bundled magics are known to map every subset
/// without harmful collisions.
struct AttackTables {
    pawn: [[Bitboard; Square::COUNT]; Color::COUNT],
    knight: [Bitboard; Square::COUNT],
    king: [Bitboard; Square::COUNT],
    bishop_masks: [Bitboard; Square::COUNT],
    rook_masks: [Bitboard; Square::COUNT],
    bishop: Vec<[Bitboard; 512]>,
    rook: Vec<[Bitboard; 4096]>,
}

lazy_static! {
    static ref TABLES: AttackTables = AttackTables::new();
}

impl AttackTables {
    fn new() -> AttackTables {
        use std::convert::TryFrom;

        let mut tables = AttackTables {
            pawn: [[Bitboard::new(); Square::COUNT]; Color::COUNT],
            knight: [Bitboard::new(); Square::COUNT],
            king: [Bitboard::new(); Square::COUNT],
            bishop_masks: [Bitboard::new(); Square::COUNT],
            rook_masks: [Bitboard::new(); Square::COUNT],
            bishop: vec![[Bitboard::new(); 512]; Square::COUNT],
            rook: vec![[Bitboard::new(); 4096]; Square::COUNT],
        };

        for sq in 0..Square::COUNT {
            let square = Square::try_from(sq).expect("INFALLIBLE");

            tables.pawn[Color::White as usize][sq] = pawn_mask(Color::White, square);
            tables.pawn[Color::Black as usize][sq] = pawn_mask(Color::Black, square);
            tables.knight[sq] = knight_mask(square);
            tables.king[sq] = king_mask(square);

            tables.bishop_masks[sq] = bishop_mask(square);
            let bits = BISHOP_RELEVANT_BITS[sq];
            for index in 0..1usize << bits {
                let occ = set_occupancy(index, tables.bishop_masks[sq]);
                let magic_index =
                    (occ.0.wrapping_mul(BISHOP_MAGICS[sq]) >> (64 - bits)) as usize;
                tables.bishop[sq][magic_index] = bishop_attacks_slow(square, occ);
            }

            tables.rook_masks[sq] = rook_mask(square);
            let bits = ROOK_RELEVANT_BITS[sq];
            for index in 0..1usize << bits {
                let occ = set_occupancy(index, tables.rook_masks[sq]);
                let magic_index =
                    (occ.0.wrapping_mul(ROOK_MAGICS[sq]) >> (64 - bits)) as usize;
                tables.rook[sq][magic_index] = rook_attacks_slow(square, occ);
            }
        }

        tables
    }
}

fn pawn_mask(c: Color, sq: Square) -> Bitboard {
    let bb = Bitboard::from(sq).0;

    match c {
        Color::White => Bitboard(((bb >> 7) & NOT_FILE_A) | ((bb >> 9) & NOT_FILE_H)),
        Color::Black => Bitboard(((bb << 7) & NOT_FILE_H) | ((bb << 9) & NOT_FILE_A)),
    }
}

fn knight_mask(sq: Square) -> Bitboard {
    let bb = Bitboard::from(sq).0;
    let mut attacks = 0;

    attacks |= (bb >> 17) & NOT_FILE_H;
    attacks |= (bb >> 15) & NOT_FILE_A;
    attacks |= (bb >> 10) & NOT_FILE_GH;
    attacks |= (bb >> 6) & NOT_FILE_AB;
    attacks |= (bb << 17) & NOT_FILE_A;
    attacks |= (bb << 15) & NOT_FILE_H;
    attacks |= (bb << 10) & NOT_FILE_AB;
    attacks |= (bb << 6) & NOT_FILE_GH;

    Bitboard(attacks)
}

fn king_mask(sq: Square) -> Bitboard {
    let bb = Bitboard::from(sq).0;
    let mut attacks = bb >> 8 | bb << 8;

    attacks |= (bb >> 9) & NOT_FILE_H;
    attacks |= (bb >> 7) & NOT_FILE_A;
    attacks |= (bb >> 1) & NOT_FILE_H;
    attacks |= (bb << 9) & NOT_FILE_A;
    attacks |= (bb << 7) & NOT_FILE_H;
    attacks |= (bb << 1) & NOT_FILE_A;

    Bitboard(attacks)
}

/// Computes the squares attacked by a pawn of color `c` on `sq`
///
/// This is also the set of squares from which an opposing pawn would attack `sq`, which is how
/// the attack queries use it.
///
/// See the crate-level documentation for more information about
/// [other attack functions](index.html#moves-and-attacks).
#[inline]
pub fn pawn_attacks(c: Color, sq: Square) -> Bitboard {
    TABLES.pawn[c as usize][sq as usize]
}

/// Computes knight-like attacks to or from `sq`
///
/// See the crate-level documentation for more information about
/// [this function](index.html#direct-attacks-pawns-knights-and-kings) and
/// [other attack functions](index.html#moves-and-attacks).
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq as usize]
}

/// Computes king-like attacks to or from `sq`
///
/// See the crate-level documentation for more information about
/// [this function](index.html#direct-attacks-pawns-knights-and-kings) and
/// [other attack functions](index.html#moves-and-attacks).
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq as usize]
}

/// Computes bishop-like attacks to or from `sq` based on the occupied squares given by `occ`
///
/// The lookup is a single multiply, shift and table access thanks to the magic multipliers; see
/// the [`magics`](magics/index.html) module.
#[inline]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let sq = sq as usize;
    let occ = occ.0 & TABLES.bishop_masks[sq].0;
    let index = occ.wrapping_mul(BISHOP_MAGICS[sq]) >> (64 - BISHOP_RELEVANT_BITS[sq]);

    TABLES.bishop[sq][index as usize]
}

/// Computes rook-like attacks to or from `sq` based on the occupied squares given by `occ`
///
/// The lookup is a single multiply, shift and table access thanks to the magic multipliers; see
/// the [`magics`](magics/index.html) module.
#[inline]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let sq = sq as usize;
    let occ = occ.0 & TABLES.rook_masks[sq].0;
    let index = occ.wrapping_mul(ROOK_MAGICS[sq]) >> (64 - ROOK_RELEVANT_BITS[sq]);

    TABLES.rook[sq][index as usize]
}

/// Computes queen-like attacks to or from `sq` based on the occupied squares given by `occ`
#[inline]
pub fn queen_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    rook_attacks(sq, occ) | bishop_attacks(sq, occ)
}
