//! Contains structures related to the `Position`.
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::fmt;
use super::*;

use crate::bitboard::*;
use crate::error::{Error, Result};

use crate::Color::*;
use crate::Piece::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The irreversible parts of a position, recorded by `make` so that `unmake` can restore them
///
/// Castling rights, the en-passant square, the halfmove clock and the hash key cannot be
/// recomputed from the move alone, and a captured piece is gone from the board entirely, so each
/// `make` pushes one of these records and each `unmake` pops one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StateInfo {
    /// The piece captured by the move, if any
    pub captured: Option<Piece>,
    /// Castling rights before the move
    pub castling: CastlingRights,
    /// En-passant square before the move
    pub ep_square: Option<Square>,
    /// Halfmove clock before the move
    pub halfmove_clock: u32,
    /// Hash key before the move
    pub zobrist: Zobrist,
}

/// Castling-rights decay masks, indexed by square.
///
/// AND-ing the rights nibble with the masks for a move's origin and destination clears exactly
/// the rights lost when a king or rook leaves its home square, or a rook is captured on one.
const CASTLING_MASK: [u8; Square::COUNT] = [
     7, 15, 15, 15,  3, 15, 15, 11,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    13, 15, 15, 15, 12, 15, 15, 14,
];

/// Returns the square a pawn of color `c` passed over to reach `sq`, which is also where the
/// victim of an en-passant capture on `sq` stands
fn behind(sq: Square, c: Color) -> Square {
    match c {
        White => Square::try_from(sq as usize + File::COUNT),
        Black => Square::try_from(sq as usize - File::COUNT),
    }.expect("INFALLIBLE")
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A representation of the arrangement of pieces on the board at a given point in the game, as
/// well as castling availability and en passant legality.
///
/// # Instantiation
/// There are three typical ways of creating a new `Position` structure.
///  -  The [`new`](#method.new) method creates a `Position` structure containing the standard
///     starting position.
///  -  The [`from_fen_str`](#method.from_fen_str) method (along with its synonyms `from_str`
///     and `str::parse`) creates a new `Position` structure from a string containing
///     [Forsyth-Edwards Notation (FEN)](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation).
///  -  Cloning an existing `Position`.
///
/// # Making and Unmaking Moves
/// The most important thing that can be done with a `Position` is to generate the moves that
/// are valid from it, using the [`moves`](#method.moves) method (or
/// [`captures`](#method.captures) for only the moves that take a piece), and to walk the game
/// tree by applying them. The generated moves are pseudo-legal: a move might still leave the
/// mover's king attacked, which [`make`](#method.make) detects, undoing the move and returning
/// `false`. A typical flow looks like this:
///
/// ```rust
/// use chess::{MoveMode, Position};
///
/// let mut pos = Position::new();
///
/// for mv in &pos.moves() {
///     if pos.make(*mv, MoveMode::AllMoves) {
///         // do something useful
///         pos.unmake(*mv);
///     }
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    piece_bb: [Bitboard; Color::COUNT * Piece::COUNT],
    occ_by_color: [Bitboard; Color::COUNT],
    occ_squares: Bitboard,
    turn: Color,

    ep_square: Option<Square>,
    castling: CastlingRights,

    halfmove_clock: u32,
    move_num: u32,

    zobrist: Zobrist,
    states: Vec<StateInfo>,
}

impl Position {
    /// Returns the standard starting Position.
    pub fn new() -> Position {
        let mut pos = Position {
            piece_bb: [
                // white pawns, knights, bishops, rooks, queen, king
                Bitboard::from(0x00ff_0000_0000_0000u64),
                Bitboard::from(0x4200_0000_0000_0000u64),
                Bitboard::from(0x2400_0000_0000_0000u64),
                Bitboard::from(0x8100_0000_0000_0000u64),
                Bitboard::from(0x0800_0000_0000_0000u64),
                Bitboard::from(0x1000_0000_0000_0000u64),
                // black pawns, knights, bishops, rooks, queen, king
                Bitboard::from(0x0000_0000_0000_ff00u64),
                Bitboard::from(0x0000_0000_0000_0042u64),
                Bitboard::from(0x0000_0000_0000_0024u64),
                Bitboard::from(0x0000_0000_0000_0081u64),
                Bitboard::from(0x0000_0000_0000_0008u64),
                Bitboard::from(0x0000_0000_0000_0010u64),
            ],
            occ_by_color: [
                Bitboard::from(0xffff_0000_0000_0000u64),
                Bitboard::from(0x0000_0000_0000_ffffu64),
            ],
            occ_squares: Bitboard::from(0xffff_0000_0000_ffffu64),
            turn: White,
            ep_square: None,
            castling: CastlingRights::all(),
            halfmove_clock: 0,
            move_num: 1,
            zobrist: Zobrist::new(),
            states: Vec::new(),
        };

        pos.calc_zobrist();

        pos
    }

    /// Returns a position with an empty board.
    fn empty_board() -> Position {
        Position {
            piece_bb: [Bitboard::new(); Color::COUNT * Piece::COUNT],
            occ_by_color: [Bitboard::new(); Color::COUNT],
            occ_squares: Bitboard::new(),
            turn: White,
            ep_square: None,
            castling: CastlingRights::none(),
            halfmove_clock: 0,
            move_num: 1,
            zobrist: Zobrist::new(),
            states: Vec::new(),
        }
    }

    /// Places a piece on an empty square while building a position.
    fn put_piece(&mut self, c: Color, p: Piece, sq: Square) {
        self.piece_bb[piece_index(c, p)].insert(sq);
        self.occ_by_color[c as usize].insert(sq);
        self.occ_squares.insert(sq);
    }

    /// Parse a position from a string containing [Forsyth-Edwards
    /// Notation (FEN)](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation).
    pub fn from_fen_str(s: &str) -> Result<Position> {
        use crate::error::Error::*;

        let mut pos = Position::empty_board();
        let mut fields = s.trim().split_whitespace();

        // parse the board; the bit layout matches the order of the FEN board field
        let board = fields.next().ok_or(ParseError)?;
        let mut file = 0;
        let mut rank_row = 0;
        for c in board.chars() {
            match c {
                '1' ..= '8' => {
                    file += c.to_digit(10).expect("INFALLIBLE") as usize;
                    if file > File::COUNT {
                        return Err(ParseError);
                    }
                }
                '/' => {
                    if file == File::COUNT && rank_row < Rank::COUNT - 1 {
                        rank_row += 1;
                        file = 0;
                    } else {
                        return Err(ParseError);
                    }
                }
                _ => {
                    if file >= File::COUNT {
                        return Err(ParseError);
                    }
                    let color = if c.is_uppercase() { White } else { Black };
                    let piece: Piece = c.to_string().parse()?;
                    let sq = Square::try_from(rank_row * File::COUNT + file)
                        .expect("INFALLIBLE");

                    pos.put_piece(color, piece, sq);
                    file += 1;
                }
            }
        }
        if rank_row != Rank::COUNT - 1 || file != File::COUNT {
            return Err(ParseError);
        }

        // parse the turn
        pos.turn = fields.next().ok_or(ParseError)?.parse()?;

        // parse the castling flags
        match fields.next() {
            Some("-") => {},
            Some(castling_flags) => {
                for c in castling_flags.chars() {
                    pos.castling |= match c {
                        'K' => CastlingRights::WHITE_KING_SIDE,
                        'Q' => CastlingRights::WHITE_QUEEN_SIDE,
                        'k' => CastlingRights::BLACK_KING_SIDE,
                        'q' => CastlingRights::BLACK_QUEEN_SIDE,
                        _ => return Err(ParseError),
                    };
                }
            },
            None => return Err(ParseError),
        }

        // parse en passant square
        match fields.next() {
            Some("-") => {},
            Some(ep_square) => { pos.ep_square = Some(ep_square.parse::<Square>()?); },
            None => return Err(ParseError),
        }

        // parse half move clock, if present
        if let Some(plies) = fields.next() {
            pos.halfmove_clock = plies.parse().map_err(|_| ParseError)?;
        }

        // parse move number, if present
        if let Some(move_num) = fields.next() {
            pos.move_num = move_num.parse().map_err(|_| ParseError)?;
        }

        pos.validate()?;
        pos.calc_zobrist();

        Ok(pos)
    }

    /// Checks the invariants a parsed position must satisfy.
    fn validate(&self) -> Result<()> {
        use crate::error::Error::*;

        // exactly one king per side
        for &c in &[White, Black] {
            if self.occupied_by_piece(c, King).len() != 1 {
                return Err(InvalidKingCount);
            }
        }

        // no pawn on the first or last rank
        let pawns = self.occupied_by_piece(White, Pawn) | self.occupied_by_piece(Black, Pawn);
        if pawns.intersects(Bitboard::from(Rank::R1) | Rank::R8.into()) {
            return Err(InvalidPawnRank);
        }

        // the player not on move must not have a capturable king
        if self.square_attacked_by(self.king_location(!self.turn), self.turn) {
            return Err(KingCapturable);
        }

        // the en-passant square must be consistent with a double push last move
        if let Some(ep) = self.ep_square {
            match (self.turn, ep.rank()) {
                (White, Rank::R6) | (Black, Rank::R3) => {},
                _ => return Err(ParseError),
            }
            if self.occ_squares.contains(ep) {
                return Err(EnPassantSquareOccupied);
            }
            if !self.occupied_by_piece(!self.turn, Pawn).contains(behind(ep, self.turn)) {
                return Err(MissingEnPassantPawn);
            }
        }

        // castling rights require the king and rook on their home squares
        let flag_squares = [
            (CastlingRights::WHITE_KING_SIDE, White, Square::E1, Square::H1),
            (CastlingRights::WHITE_QUEEN_SIDE, White, Square::E1, Square::A1),
            (CastlingRights::BLACK_KING_SIDE, Black, Square::E8, Square::H8),
            (CastlingRights::BLACK_QUEEN_SIDE, Black, Square::E8, Square::A8),
        ];
        for &(flag, c, king_sq, rook_sq) in &flag_squares {
            if !(self.castling.bits() & flag.bits() == 0
                || (self.occupied_by_piece(c, King).contains(king_sq)
                    && self.occupied_by_piece(c, Rook).contains(rook_sq))) {
                return Err(InvalidCastlingFlags);
            }
        }

        Ok(())
    }

    /// Converts the position to a FEN string.
    pub fn to_fen_str(&self) -> String {
        // the board, which reads in the same order as the bits
        let mut board = String::new();
        for rank_row in 0..Rank::COUNT {
            let mut count = 0;
            for file in 0..File::COUNT {
                let sq = Square::try_from(rank_row * File::COUNT + file).expect("INFALLIBLE");
                if let Some((c, p)) = self.piece_at(sq) {
                    if count > 0 {
                        board += &count.to_string();
                        count = 0;
                    }
                    if c == White {
                        board += &p.to_string();
                    } else {
                        board += &p.to_string().to_lowercase();
                    }
                } else {
                    count += 1;
                }
            }
            if count > 0 {
                board += &count.to_string();
            }
            if rank_row < Rank::COUNT - 1 {
                board += "/";
            }
        }

        // en passant square
        let ep_square = match self.ep_square {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!("{} {} {} {} {} {}", board, self.turn, self.castling, ep_square,
                                     self.halfmove_clock, self.move_num)
    }

    /// Returns a multi-line string picturing the board, with white pieces in uppercase and
    /// black pieces in lowercase
    pub fn pretty(&self) -> String {
        let mut s = String::new();

        for rank_row in 0..Rank::COUNT {
            s += &format!(" {}  ", Rank::COUNT - rank_row);
            for file in 0..File::COUNT {
                let sq = Square::try_from(rank_row * File::COUNT + file).expect("INFALLIBLE");
                match self.piece_at(sq) {
                    Some((White, p)) => s += &format!(" {}", p),
                    Some((Black, p)) => s += &format!(" {}", p.to_string().to_lowercase()),
                    None => s += " .",
                }
            }
            s += "\n";
        }
        s += "\n     a b c d e f g h\n";

        s
    }

    /// Returns the color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the en-passant square, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Returns the castling rights still available.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the number of plies which count toward the fifty move rule.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the move number.
    pub fn move_number(&self) -> u32 {
        self.move_num
    }

    /// Returns a `Bitboard` of all occupied `Square`s.
    pub fn occupied(&self) -> Bitboard {
        self.occ_squares
    }

    /// Returns a `Bitboard` of `Square`s occupied by player `c`.
    pub fn occupied_by(&self, c: Color) -> Bitboard {
        self.occ_by_color[c as usize]
    }

    /// Returns a `Bitboard` of `Square`s occupied by the given `Piece` and `Color`.
    pub fn occupied_by_piece(&self, c: Color, p: Piece) -> Bitboard {
        self.piece_bb[piece_index(c, p)]
    }

    /// Returns the square where the king of the given color is located.
    pub fn king_location(&self, c: Color) -> Square {
        self.occupied_by_piece(c, King).peek().expect("INFALLIBLE")
    }

    /// Returns the color and type of piece, if any, at the given location.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if self.occ_squares.contains(sq) {
            for &c in &[White, Black] {
                if self.occupied_by(c).contains(sq) {
                    for &p in &[Pawn, Knight, Bishop, Rook, Queen, King] {
                        if self.occupied_by_piece(c, p).contains(sq) {
                            return Some((c, p));
                        }
                    }
                    unreachable!()
                }
            }
            unreachable!()
        }

        None
    }

    /// Return the position's Zobrist key.
    pub fn zobrist_key(&self) -> Zobrist {
        self.zobrist
    }

    /// Returns `true` if the color to move is in check.
    pub fn in_check(&self) -> bool {
        self.square_attacked_by(self.king_location(self.turn), !self.turn)
    }

    /// Returns `true` if `sq` is attacked by a piece of color `c`.
    ///
    /// Each piece type is checked through the attacker symmetry: a piece on `sq` would attack
    /// exactly the squares from which a piece of the same type attacks `sq`.
    pub fn square_attacked_by(&self, sq: Square, c: Color) -> bool {
        if pawn_attacks(!c, sq).intersects(self.occupied_by_piece(c, Pawn)) {
            return true;
        }
        if knight_attacks(sq).intersects(self.occupied_by_piece(c, Knight)) {
            return true;
        }

        let queens = self.occupied_by_piece(c, Queen);
        if bishop_attacks(sq, self.occ_squares)
            .intersects(self.occupied_by_piece(c, Bishop) | queens) {
            return true;
        }
        if rook_attacks(sq, self.occ_squares)
            .intersects(self.occupied_by_piece(c, Rook) | queens) {
            return true;
        }

        king_attacks(sq).intersects(self.occupied_by_piece(c, King))
    }

    /// Applies `mv` to the board, returning `true` if the move was legal.
    ///
    /// In `MoveMode::CapturesOnly` mode, a quiet move is rejected without touching the board.
    /// A move that would leave the mover's own king attacked is undone before returning, so
    /// callers only pair [`unmake`](#method.unmake) with a `make` that returned `true`.
    pub fn make(&mut self, mv: Move, mode: MoveMode) -> bool {
        if mode == MoveMode::CapturesOnly && !mv.is_capture() {
            return false;
        }

        let us = self.turn;
        let them = !us;
        let orig = mv.origin();
        let dest = mv.destination();
        let piece = mv.piece();

        self.states.push(StateInfo {
            captured: None,
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
            zobrist: self.zobrist,
        });

        // move the piece
        let mask = Bitboard::from(orig) | dest.into();
        self.piece_bb[piece_index(us, piece)] ^= mask;
        self.occ_by_color[us as usize] ^= mask;
        self.zobrist.toggle_piece_placement(us, piece, orig);
        self.zobrist.toggle_piece_placement(us, piece, dest);

        self.halfmove_clock += 1;
        if piece == Pawn {
            self.halfmove_clock = 0;
        }

        // remove the captured piece; an en-passant victim is the one capture that doesn't
        // stand on the destination square
        if mv.is_en_passant() {
            let victim_sq = behind(dest, us);
            self.piece_bb[piece_index(them, Pawn)].remove(victim_sq);
            self.occ_by_color[them as usize].remove(victim_sq);
            self.zobrist.toggle_piece_placement(them, Pawn, victim_sq);
            self.states.last_mut().expect("INFALLIBLE").captured = Some(Pawn);
        } else if mv.is_capture() {
            for &p in &[Pawn, Knight, Bishop, Rook, Queen, King] {
                if self.occupied_by_piece(them, p).contains(dest) {
                    self.piece_bb[piece_index(them, p)].remove(dest);
                    self.occ_by_color[them as usize].remove(dest);
                    self.zobrist.toggle_piece_placement(them, p, dest);
                    self.states.last_mut().expect("INFALLIBLE").captured = Some(p);
                    break;
                }
            }
            self.halfmove_clock = 0;
        }

        // replace a promoting pawn with the promotion piece
        if let Some(promo) = mv.promotion() {
            self.piece_bb[piece_index(us, Pawn)].remove(dest);
            self.piece_bb[piece_index(us, promo)].insert(dest);
            self.zobrist.toggle_piece_placement(us, Pawn, dest);
            self.zobrist.toggle_piece_placement(us, promo, dest);
        }

        // the en-passant square lives for exactly one ply
        if let Some(ep) = self.ep_square {
            self.zobrist.toggle_ep_square(ep);
        }
        self.ep_square = None;
        if mv.is_double_push() {
            let ep = behind(dest, us);
            self.ep_square = Some(ep);
            self.zobrist.toggle_ep_square(ep);
        }

        // castling also moves the rook
        if mv.is_castling() {
            let (rook_orig, rook_dest) = match dest {
                Square::G1 => (Square::H1, Square::F1),
                Square::C1 => (Square::A1, Square::D1),
                Square::G8 => (Square::H8, Square::F8),
                Square::C8 => (Square::A8, Square::D8),
                _ => unreachable!(),
            };
            let mask = Bitboard::from(rook_orig) | rook_dest.into();
            self.piece_bb[piece_index(us, Rook)] ^= mask;
            self.occ_by_color[us as usize] ^= mask;
            self.zobrist.toggle_piece_placement(us, Rook, rook_orig);
            self.zobrist.toggle_piece_placement(us, Rook, rook_dest);
        }

        // castling-rights decay
        self.zobrist.toggle_castling_rights(self.castling);
        self.castling = CastlingRights::from(self.castling.bits()
            & CASTLING_MASK[orig as usize]
            & CASTLING_MASK[dest as usize]);
        self.zobrist.toggle_castling_rights(self.castling);

        self.occ_squares = self.occ_by_color[0] | self.occ_by_color[1];

        self.turn = them;
        self.zobrist.toggle_turn();
        if self.turn == White {
            self.move_num += 1;
        }

        // a move that leaves the mover's own king attacked is illegal
        if self.square_attacked_by(self.king_location(us), them) {
            self.unmake(mv);
            return false;
        }

        true
    }

    /// Reverts the most recent legal `make` of `mv`, restoring the position bit-exactly.
    ///
    /// # Panics
    ///
    /// Panics if there is no move to unmake.
    pub fn unmake(&mut self, mv: Move) {
        let st = self.states.pop().expect("unmake without a matching make");

        self.turn = !self.turn;
        let us = self.turn;
        let them = !us;
        let orig = mv.origin();
        let dest = mv.destination();

        if us == Black {
            self.move_num -= 1;
        }

        // put the moving piece back; a promoted piece reverts to a pawn
        if let Some(promo) = mv.promotion() {
            self.piece_bb[piece_index(us, promo)].remove(dest);
            self.piece_bb[piece_index(us, Pawn)].insert(orig);
        } else {
            let index = piece_index(us, mv.piece());
            self.piece_bb[index].remove(dest);
            self.piece_bb[index].insert(orig);
        }
        self.occ_by_color[us as usize].remove(dest);
        self.occ_by_color[us as usize].insert(orig);

        // put the castling rook back
        if mv.is_castling() {
            let (rook_orig, rook_dest) = match dest {
                Square::G1 => (Square::H1, Square::F1),
                Square::C1 => (Square::A1, Square::D1),
                Square::G8 => (Square::H8, Square::F8),
                Square::C8 => (Square::A8, Square::D8),
                _ => unreachable!(),
            };
            let mask = Bitboard::from(rook_orig) | rook_dest.into();
            self.piece_bb[piece_index(us, Rook)] ^= mask;
            self.occ_by_color[us as usize] ^= mask;
        }

        // restore the captured piece, whatever branch removed it
        if let Some(captured) = st.captured {
            let victim_sq = if mv.is_en_passant() { behind(dest, us) } else { dest };
            self.piece_bb[piece_index(them, captured)].insert(victim_sq);
            self.occ_by_color[them as usize].insert(victim_sq);
        }

        self.castling = st.castling;
        self.ep_square = st.ep_square;
        self.halfmove_clock = st.halfmove_clock;
        self.zobrist = st.zobrist;

        self.occ_squares = self.occ_by_color[0] | self.occ_by_color[1];
    }

    /// Passes the turn without moving a piece. This is not a legal move, but is useful to the
    /// engine for null move pruning.
    pub fn make_null(&mut self) {
        self.states.push(StateInfo {
            captured: None,
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
            zobrist: self.zobrist,
        });

        if let Some(ep) = self.ep_square {
            self.zobrist.toggle_ep_square(ep);
        }
        self.ep_square = None;

        self.turn = !self.turn;
        self.zobrist.toggle_turn();
        if self.turn == White {
            self.move_num += 1;
        }
    }

    /// Reverts the most recent [`make_null`](#method.make_null).
    ///
    /// # Panics
    ///
    /// Panics if there is no move to unmake.
    pub fn unmake_null(&mut self) {
        let st = self.states.pop().expect("unmake without a matching make");

        self.turn = !self.turn;
        if self.turn == Black {
            self.move_num -= 1;
        }

        self.castling = st.castling;
        self.ep_square = st.ep_square;
        self.halfmove_clock = st.halfmove_clock;
        self.zobrist = st.zobrist;
    }

    /// Calculate the `Position`'s Zobrist key from scratch.
    fn calc_zobrist(&mut self) {
        self.zobrist = Zobrist::new();

        if self.turn == Black {
            self.zobrist.toggle_turn();
        }

        if let Some(ep_square) = self.ep_square {
            self.zobrist.toggle_ep_square(ep_square);
        }

        self.zobrist.toggle_castling_rights(self.castling);

        for &c in &[White, Black] {
            for &p in &[Pawn, Knight, Bishop, Rook, Queen, King] {
                for sq in self.occupied_by_piece(c, p) {
                    self.zobrist.toggle_piece_placement(c, p, sq);
                }
            }
        }
    }
}

impl Default for Position {
    /// Returns the standard starting Position.
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    /// Writes out the position using FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen_str().fmt(f)
    }
}

impl fmt::Debug for Position {
    /// Writes out the position using FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen_str().fmt(f)
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parse a position from a FEN string.
    fn from_str(s: &str) -> Result<Self> {
        Position::from_fen_str(s)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod zobrist;
mod movegen;
