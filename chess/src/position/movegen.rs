//! Pseudo-legal move generation
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// Returns the square directly in front of a pawn of color `c` on `sq`
///
/// Pawns never stand on their own promotion rank, so the result is always on the board.
fn pawn_push(sq: Square, c: Color) -> Square {
    match c {
        White => Square::try_from(sq as usize - File::COUNT),
        Black => Square::try_from(sq as usize + File::COUNT),
    }.expect("INFALLIBLE")
}

impl Position {
    /// Generates the pseudo-legal moves from this position.
    ///
    /// Every move in the list obeys the movement rules of its piece, but it might still leave
    /// the mover's king attacked; [`make`](#method.make) performs that final check. Generation
    /// order is arbitrary.
    pub fn moves(&self) -> MoveList {
        let mut list = MoveList::new();
        self.generate(&mut list, false);
        list
    }

    /// Generates only the pseudo-legal captures from this position, including capturing
    /// promotions and en passant. Useful for quiescence searches.
    pub fn captures(&self) -> MoveList {
        let mut list = MoveList::new();
        self.generate(&mut list, true);
        list
    }

    fn generate(&self, list: &mut MoveList, captures_only: bool) {
        let us = self.turn;
        let them = !us;
        let occ = self.occupied();
        let enemies = self.occupied_by(them);

        let (promo_rank, start_rank) = match us {
            White => (Rank::R8, Rank::R2),
            Black => (Rank::R1, Rank::R7),
        };

        // pawns
        for orig in self.occupied_by_piece(us, Pawn) {
            let dest = pawn_push(orig, us);

            if !captures_only && !occ.contains(dest) {
                if dest.rank() == promo_rank {
                    for &promo in &[Queen, Rook, Bishop, Knight] {
                        list.push(Move::new(orig, dest, us, Pawn, Some(promo),
                            false, false, false, false));
                    }
                } else {
                    list.push(Move::new(orig, dest, us, Pawn, None,
                        false, false, false, false));

                    // both squares in front must be empty for a double push
                    if orig.rank() == start_rank {
                        let dest = pawn_push(dest, us);
                        if !occ.contains(dest) {
                            list.push(Move::new(orig, dest, us, Pawn, None,
                                false, true, false, false));
                        }
                    }
                }
            }

            for dest in pawn_attacks(us, orig) & enemies {
                if dest.rank() == promo_rank {
                    for &promo in &[Queen, Rook, Bishop, Knight] {
                        list.push(Move::new(orig, dest, us, Pawn, Some(promo),
                            true, false, false, false));
                    }
                } else {
                    list.push(Move::new(orig, dest, us, Pawn, None,
                        true, false, false, false));
                }
            }

            if let Some(ep) = self.en_passant_square() {
                if pawn_attacks(us, orig).contains(ep) {
                    list.push(Move::new(orig, ep, us, Pawn, None,
                        true, false, true, false));
                }
            }
        }

        // knights, sliders and the king
        for &piece in &[Knight, Bishop, Rook, Queen, King] {
            for orig in self.occupied_by_piece(us, piece) {
                let attacks = match piece {
                    Knight => knight_attacks(orig),
                    Bishop => bishop_attacks(orig, occ),
                    Rook => rook_attacks(orig, occ),
                    Queen => queen_attacks(orig, occ),
                    King => king_attacks(orig),
                    Pawn => unreachable!(),
                } & !self.occupied_by(us);

                for dest in attacks {
                    let capture = enemies.contains(dest);
                    if capture || !captures_only {
                        list.push(Move::new(orig, dest, us, piece, None,
                            capture, false, false, false));
                    }
                }
            }
        }

        // castling; the rights nibble already guarantees the king and rook are home, so only
        // the squares between them and the attacks on the king's path need checking (the
        // landing square is covered by the legality check in `make`)
        if !captures_only {
            match us {
                White => {
                    if self.castling_rights().king_side(White)
                        && !occ.contains(Square::F1) && !occ.contains(Square::G1)
                        && !self.square_attacked_by(Square::E1, Black)
                        && !self.square_attacked_by(Square::F1, Black) {
                        list.push(Move::new(Square::E1, Square::G1, White, King, None,
                            false, false, false, true));
                    }
                    if self.castling_rights().queen_side(White)
                        && !occ.contains(Square::D1) && !occ.contains(Square::C1)
                        && !occ.contains(Square::B1)
                        && !self.square_attacked_by(Square::E1, Black)
                        && !self.square_attacked_by(Square::D1, Black) {
                        list.push(Move::new(Square::E1, Square::C1, White, King, None,
                            false, false, false, true));
                    }
                },
                Black => {
                    if self.castling_rights().king_side(Black)
                        && !occ.contains(Square::F8) && !occ.contains(Square::G8)
                        && !self.square_attacked_by(Square::E8, White)
                        && !self.square_attacked_by(Square::F8, White) {
                        list.push(Move::new(Square::E8, Square::G8, Black, King, None,
                            false, false, false, true));
                    }
                    if self.castling_rights().queen_side(Black)
                        && !occ.contains(Square::D8) && !occ.contains(Square::C8)
                        && !occ.contains(Square::B8)
                        && !self.square_attacked_by(Square::E8, White)
                        && !self.square_attacked_by(Square::D8, White) {
                        list.push(Move::new(Square::E8, Square::C8, Black, King, None,
                            false, false, false, true));
                    }
                },
            }
        }
    }
}
