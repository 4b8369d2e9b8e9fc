//! Defines the error types needed by the `chess` crate
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

/// The `Result` type for this crate
pub type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in constructing or parsing a position
///
/// Note that an illegal move is not an error: [`Position::make`](../struct.Position.html#method.make)
/// reports it through its return value as ordinary control flow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input cannot be parsed
    ParseError,
    /// Missing king or multiple kings of the same color
    InvalidKingCount,
    /// Pawn on the first or last rank
    InvalidPawnRank,
    /// The player not on move can have their king captured
    KingCapturable,
    /// A piece occupies the en-passant square
    EnPassantSquareOccupied,
    /// En-passant square without a capturable pawn
    MissingEnPassantPawn,
    /// Castling flags aren't consistent with the piece placement
    InvalidCastlingFlags,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError => "cannot parse input",
            Error::InvalidKingCount => "missing king or multiple kings of the same color",
            Error::InvalidPawnRank => "pawn on first or last rank",
            Error::KingCapturable => "player can capture opponent's king",
            Error::EnPassantSquareOccupied => "piece on en-passant square",
            Error::MissingEnPassantPawn => "en-passant square without capturable pawn",
            Error::InvalidCastlingFlags => "castling flags aren't valid for this position",
        }.fmt(f)
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in parsing a color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse color".fmt(f)
    }
}

impl std::error::Error for ParseColorError { }

impl From<ParseColorError> for Error {
    fn from(_: ParseColorError) -> Self {
        Error::ParseError
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in parsing a chess piece
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse chess piece".fmt(f)
    }
}

impl std::error::Error for ParsePieceError { }

impl From<ParsePieceError> for Error {
    fn from(_: ParsePieceError) -> Self {
        Error::ParseError
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in parsing a file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseFileError;

impl fmt::Display for ParseFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse file".fmt(f)
    }
}

impl std::error::Error for ParseFileError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in parsing a rank
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseRankError;

impl fmt::Display for ParseRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse rank".fmt(f)
    }
}

impl std::error::Error for ParseRankError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in parsing a square
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "cannot parse square".fmt(f)
    }
}

impl std::error::Error for ParseSquareError { }

impl From<ParseFileError> for ParseSquareError {
    fn from(_: ParseFileError) -> Self {
        ParseSquareError
    }
}

impl From<ParseRankError> for ParseSquareError {
    fn from(_: ParseRankError) -> Self {
        ParseSquareError
    }
}

impl From<ParseSquareError> for Error {
    fn from(_: ParseSquareError) -> Self {
        Error::ParseError
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// An error in converting an integer to another type
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromIntError;

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "integer out of range".fmt(f)
    }
}

impl std::error::Error for TryFromIntError { }

impl From<TryFromIntError> for Error {
    fn from(_: TryFromIntError) -> Self {
        Error::ParseError
    }
}
