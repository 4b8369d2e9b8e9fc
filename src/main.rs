//! The scarecrow chess engine.
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]

use std::convert::TryFrom;
use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use clap::{App, Arg, SubCommand, crate_version};
use simplelog::{WriteLogger, LevelFilter, Config};
use chess::{Position, Square};
use chess::bitboard::magics::{self, XorShift};
use chess::variations;
use scarecrow::engine::{Limits, Search};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> Result<(), Error> {
    let matches =
        App::new("Scarecrow")
            .version(crate_version!())
            .author("Mike Leany")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("scarecrow.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .subcommand(SubCommand::with_name("counts")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth. Defaults to the standard starting position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .multiple(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .subcommand(SubCommand::with_name("divide")
                .about("Counts the variations beneath each legal move of a position, which \
                        narrows a\nwrong total down to the responsible move.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .subcommand(SubCommand::with_name("search")
                .about("Searches a position for the best move.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .help("Maximum depth to search the position"))
                .arg(Arg::with_name("movetime")
                    .long("movetime")
                    .short("t")
                    .value_name("MILLISECONDS")
                    .takes_value(true)
                    .help("Time to spend on the search"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .subcommand(SubCommand::with_name("magics")
                .about("Regenerates the magic multipliers for the sliding-piece attack \
                        tables. The\nsearch is seeded, so the output is reproducible."))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink())
    };

    match matches.subcommand() {
        ("counts", Some(matches)) => {
            let depth = parse_depth(matches.value_of("depth").expect("INFALLIBLE"))?;

            println!();
            for fen in matches.values_of("fen").expect("INFALLIBLE") {
                let mut pos = parse_fen(fen)?;
                println!("{}", fen);
                let count = variations::count(&mut pos, depth);
                println!("Depth {} total:\t{:12}\n", depth, count);
            }
        },
        ("divide", Some(matches)) => {
            let depth = parse_depth(matches.value_of("depth").expect("INFALLIBLE"))?;
            let fen = matches.value_of("fen").expect("INFALLIBLE");
            let mut pos = parse_fen(fen)?;

            println!("\n{}", fen);
            let count = variations::print(&mut pos, depth);
            println!("Depth {} total:\t{:12}\n", depth, count);
        },
        ("search", Some(matches)) => {
            let fen = matches.value_of("fen").expect("INFALLIBLE");
            let pos = parse_fen(fen)?;

            let mut limits = Limits::default();
            if let Some(depth) = matches.value_of("depth") {
                limits.depth = Some(parse_depth(depth)?);
            }
            if let Some(movetime) = matches.value_of("movetime") {
                let millis: u64 = movetime.parse()
                    .map_err(|_| Error("movetime must be numeric".to_owned()))?;
                limits.movetime = Some(Duration::from_millis(millis));
            }

            println!("\n{}", fen);
            let thinking = Search::new(pos, limits).run_with(|thinking| {
                let score = match thinking.score().plies_to_mate() {
                    Some(plies) => format!("mate {}", plies),
                    None => format!("cp {}", i32::from(thinking.score())),
                };
                let pv: Vec<_> = thinking.pv().iter().map(|m| m.to_string()).collect();

                println!("depth {:3}  score {:>9}  nodes {:>10}  time {:>7}ms  pv {}",
                    thinking.depth(), score, thinking.nodes(),
                    thinking.time().as_millis(), pv.join(" "));
            });

            match thinking.best_move() {
                Some(mv) => println!("\nbestmove {}", mv),
                None => println!("\nno legal moves"),
            }
        },
        ("magics", Some(_)) => {
            let mut rng = XorShift::new();

            println!("bishop magic numbers:");
            for sq in 0..Square::COUNT {
                let square = Square::try_from(sq).expect("INFALLIBLE");
                println!("    0x{:016x},", magics::find_magic(square, &mut rng, true));
            }

            println!("rook magic numbers:");
            for sq in 0..Square::COUNT {
                let square = Square::try_from(sq).expect("INFALLIBLE");
                println!("    0x{:016x},", magics::find_magic(square, &mut rng, false));
            }
        },
        _ => return Err(Error("expected a subcommand; try --help".to_owned())),
    }

    Ok(())
}

fn parse_depth(depth: &str) -> Result<usize, Error> {
    depth.parse().map_err(|_| Error("depth must be numeric".to_owned()))
}

fn parse_fen(fen: &str) -> Result<Position, Error> {
    fen.parse().map_err(|err| Error(format!("{}: {}", fen, err)))
}

struct Error(String);

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
