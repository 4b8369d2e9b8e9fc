//! The engine
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # The Search
//! The search is an iteratively deepened principal variation search. Each iteration re-searches
//! the tree one ply deeper, seeded with the move ordering the previous iteration discovered:
//! the principal variation first, then captures ordered most-valuable-victim first, then the
//! quiet moves that recently caused cutoffs. All mutable search state (the position being
//! walked, the triangular PV table, the killer and history tables and the node counter) lives
//! in a [`Search`](struct.Search.html) value, so independent searches don't share anything but
//! the read-only attack tables.
////////////////////////////////////////////////////////////////////////////////////////////////////

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use log::debug;
use chess::{Move, MoveList, MoveMode, Position};

mod eval;
use eval::{evaluate, piece_val};
pub use eval::Score;

/// The deepest ply the search will visit
pub const MAX_PLY: usize = 64;

const ASPIRATION_WINDOW: i32 = 60;
const LMR_FULLDEPTH_MOVES: usize = 4;
const LMR_REDUCTION_LIMIT: usize = 3;
const NULL_MOVE_REDUCTION: usize = 2;

/// Most Valuable Victim / Least Valuable Attacker bonuses, indexed by the attacker's and
/// victim's piece indices
///
/// Every capture outranks every quiet move once the +10000 capture bonus is added; within
/// captures, taking a big piece with a small one comes first.
const MVV_LVA: [[i32; 12]; 12] = [
    [105, 205, 305, 405, 505, 605,  105, 205, 305, 405, 505, 605],
    [104, 204, 304, 404, 504, 604,  104, 204, 304, 404, 504, 604],
    [103, 203, 303, 403, 503, 603,  103, 203, 303, 403, 503, 603],
    [102, 202, 302, 402, 502, 602,  102, 202, 302, 402, 502, 602],
    [101, 201, 301, 401, 501, 601,  101, 201, 301, 401, 501, 601],
    [100, 200, 300, 400, 500, 600,  100, 200, 300, 400, 500, 600],

    [105, 205, 305, 405, 505, 605,  105, 205, 305, 405, 505, 605],
    [104, 204, 304, 404, 504, 604,  104, 204, 304, 404, 504, 604],
    [103, 203, 303, 403, 503, 603,  103, 203, 303, 403, 503, 603],
    [102, 202, 302, 402, 502, 602,  102, 202, 302, 402, 502, 602],
    [101, 201, 301, 401, 501, 601,  101, 201, 301, 401, 501, 601],
    [100, 200, 300, 400, 500, 600,  100, 200, 300, 400, 500, 600],
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Limits on how long and how deep to search
///
/// Unset fields don't constrain the search; with no limits at all it runs until the depth cap
/// or until the stop flag is raised.
#[derive(Debug, Clone, Default)]
pub struct Limits {
    /// Maximum iteration depth
    pub depth: Option<usize>,
    /// Wall-clock budget for the whole search
    pub movetime: Option<Duration>,
    /// Maximum number of nodes to visit
    pub nodes: Option<u64>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Thinking output
#[derive(Debug, Clone, Default)]
pub struct Thinking {
    score: Score,
    depth: usize,
    time: Duration,
    nodes: u64,
    pv: Vec<Move>,
}

impl Thinking {
    /// Returns the estimated score for the principal variation.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the search depth that was reached.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the amount of time used for the search.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Returns the number of nodes searched.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the principal variation.
    pub fn pv(&self) -> &[Move] {
        &self.pv
    }

    /// Returns the best move found in the search.
    pub fn best_move(&self) -> Option<Move> {
        self.pv.first().copied()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A single search over one position
///
/// The structure owns everything a search mutates. The only channel into a running search is
/// the cooperative stop flag returned by [`stop_handle`](#method.stop_handle), which is polled
/// at node boundaries.
pub struct Search {
    pos: Position,
    limits: Limits,

    stop: Arc<AtomicBool>,
    stopped: bool,
    start_time: Instant,
    stop_time: Option<Instant>,

    nodes: u64,
    ply: usize,

    killers: [[Move; MAX_PLY]; 2],
    history: [[i32; 64]; 12],
    pv_table: [[Move; MAX_PLY]; MAX_PLY],
    pv_length: [usize; MAX_PLY],
    follow_pv: bool,
    score_pv: bool,
}

impl Search {
    /// Creates a search of `pos` under the given limits.
    pub fn new(pos: Position, limits: Limits) -> Search {
        Search {
            pos,
            limits,
            stop: Arc::new(AtomicBool::new(false)),
            stopped: false,
            start_time: Instant::now(),
            stop_time: None,
            nodes: 0,
            ply: 0,
            killers: [[Move::NONE; MAX_PLY]; 2],
            history: [[0; 64]; 12],
            pv_table: [[Move::NONE; MAX_PLY]; MAX_PLY],
            pv_length: [0; MAX_PLY],
            follow_pv: false,
            score_pv: false,
        }
    }

    /// Returns a handle that stops the search when set.
    ///
    /// The flag is polled at node boundaries, so the search ends promptly but not instantly.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Runs the search to its limits and returns the final thinking output.
    pub fn run(&mut self) -> Thinking {
        self.run_with(|_| {})
    }

    /// Runs the search, calling `report` with the thinking output of every completed
    /// iteration.
    pub fn run_with<F>(&mut self, mut report: F) -> Thinking
        where F: FnMut(&Thinking)
    {
        self.start_time = Instant::now();
        self.stop_time = self.limits.movetime.map(|time| self.start_time + time);
        self.stopped = false;

        let max_depth = self.limits.depth.unwrap_or(MAX_PLY - 1).min(MAX_PLY - 1);
        let mut thinking = Thinking::default();

        let mut alpha = -Score::infinity();
        let mut beta = Score::infinity();
        let mut depth = 1;

        while depth <= max_depth {
            self.follow_pv = true;

            let score = self.negamax(alpha, beta, depth);
            if self.stopped {
                break;
            }

            // a score outside the aspiration window requires a full-window re-search
            if score <= alpha || score >= beta {
                alpha = -Score::infinity();
                beta = Score::infinity();
                debug!("aspiration re-search at depth {}", depth);
                continue;
            }
            alpha = score - ASPIRATION_WINDOW;
            beta = score + ASPIRATION_WINDOW;

            thinking = Thinking {
                score,
                depth,
                time: self.start_time.elapsed(),
                nodes: self.nodes,
                pv: self.pv_table[0][..self.pv_length[0]].to_vec(),
            };
            report(&thinking);

            // no point going deeper once a forced mate is found
            if score.is_mate() {
                break;
            }

            depth += 1;
        }

        thinking.time = self.start_time.elapsed();
        thinking.nodes = self.nodes;

        thinking
    }

    /// Principal variation search to the given depth.
    fn negamax(&mut self, mut alpha: Score, beta: Score, mut depth: usize) -> Score {
        self.pv_length[self.ply] = self.ply;

        if depth == 0 {
            return self.qsearch(alpha, beta);
        }
        if self.ply >= MAX_PLY - 1 {
            return evaluate(&self.pos);
        }

        self.nodes += 1;
        if self.time_to_stop() {
            return Score::draw();
        }

        let in_check = self.pos.in_check();
        if in_check {
            depth += 1;
        }

        // null move pruning: if passing the turn still fails high, the real moves will too;
        // skipped in pawn endings where zugzwang makes passing an advantage
        if depth >= 3 && !in_check && self.ply > 0 && self.has_non_pawn_material() {
            self.pos.make_null();
            self.ply += 1;
            let score = -self.negamax(-beta, -beta + 1, depth - 1 - NULL_MOVE_REDUCTION);
            self.ply -= 1;
            self.pos.unmake_null();

            if self.stopped {
                return Score::draw();
            }
            if score >= beta {
                return beta;
            }
        }

        let list = self.pos.moves();
        if self.follow_pv {
            self.enable_pv_scoring(&list);
        }
        let scored = self.score_moves(&list);

        let mut legal_moves = 0;
        let mut moves_searched = 0;

        for (_, mv) in scored {
            if !self.pos.make(mv, MoveMode::AllMoves) {
                continue;
            }
            self.ply += 1;
            legal_moves += 1;

            let score = if moves_searched == 0 {
                -self.negamax(-beta, -alpha, depth - 1)
            } else {
                // late quiet moves get a reduced look first; anything promising is
                // re-searched with a null window, then the full window
                let mut score = if moves_searched >= LMR_FULLDEPTH_MOVES
                    && depth >= LMR_REDUCTION_LIMIT
                    && !in_check
                    && !mv.is_capture()
                    && mv.promotion().is_none()
                {
                    -self.negamax(-alpha - 1, -alpha, depth - 2)
                } else {
                    alpha + 1
                };

                if score > alpha {
                    score = -self.negamax(-alpha - 1, -alpha, depth - 1);
                    if score > alpha && score < beta {
                        score = -self.negamax(-beta, -alpha, depth - 1);
                    }
                }
                score
            };

            self.ply -= 1;
            self.pos.unmake(mv);
            if self.stopped {
                return Score::draw();
            }
            moves_searched += 1;

            if score > alpha {
                if !mv.is_capture() {
                    self.history[mv.piece_index()][mv.destination() as usize]
                        += (depth * depth) as i32;
                }
                alpha = score;

                // extend the child's principal variation with this move
                let next = self.ply + 1;
                self.pv_table[self.ply][self.ply] = mv;
                for i in next..self.pv_length[next] {
                    self.pv_table[self.ply][i] = self.pv_table[next][i];
                }
                self.pv_length[self.ply] = self.pv_length[next];

                if score >= beta {
                    if !mv.is_capture() {
                        self.killers[1][self.ply] = self.killers[0][self.ply];
                        self.killers[0][self.ply] = mv;
                    }
                    return beta;
                }
            }
        }

        if legal_moves == 0 {
            return if in_check {
                Score::mated_in(self.ply)
            } else {
                Score::draw()
            };
        }

        alpha
    }

    /// Expands captures until the position is quiet enough for the static evaluation.
    fn qsearch(&mut self, mut alpha: Score, beta: Score) -> Score {
        self.nodes += 1;
        if self.time_to_stop() {
            return Score::draw();
        }

        let eval = evaluate(&self.pos);
        if self.ply >= MAX_PLY - 1 {
            return eval;
        }
        if eval >= beta {
            return beta;
        }
        if eval > alpha {
            alpha = eval;
        }

        // even winning two queens' worth of material couldn't raise alpha
        if eval + 2 * piece_val(chess::Piece::Queen) <= alpha {
            return alpha;
        }

        let list = self.pos.captures();
        let scored = self.score_moves(&list);

        for (_, mv) in scored {
            if !self.pos.make(mv, MoveMode::CapturesOnly) {
                continue;
            }
            self.ply += 1;
            let score = -self.qsearch(-beta, -alpha);
            self.ply -= 1;
            self.pos.unmake(mv);

            if self.stopped {
                return Score::draw();
            }

            if score > alpha {
                alpha = score;
                if score >= beta {
                    return beta;
                }
            }
        }

        alpha
    }

    /// Scores every move and returns them sorted best first.
    fn score_moves(&mut self, list: &MoveList) -> Vec<(i32, Move)> {
        let mut scored: Vec<_> = list.iter().map(|&mv| (self.score_move(mv), mv)).collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
    }

    /// Assigns an ordering score to a move: the PV move first, then captures by MVV/LVA, then
    /// quiet promotions, killers, and finally the history counters.
    fn score_move(&mut self, mv: Move) -> i32 {
        if self.score_pv && self.pv_table[0][self.ply] == mv {
            self.score_pv = false;
            return 20_000;
        }

        if mv.is_capture() {
            let victim = if mv.is_en_passant() {
                chess::Piece::Pawn
            } else {
                self.pos.piece_at(mv.destination()).expect("INFALLIBLE").1
            };
            let victim_index = chess::piece_index(!mv.color(), victim);
            return MVV_LVA[mv.piece_index()][victim_index] + 10_000;
        }

        if mv.promotion().is_some() {
            return 10_000;
        }

        if self.killers[0][self.ply] == mv {
            return 9_000;
        }
        if self.killers[1][self.ply] == mv {
            return 8_000;
        }

        self.history[mv.piece_index()][mv.destination() as usize]
    }

    /// Re-enables PV scoring while the current branch still follows the previous iteration's
    /// principal variation.
    fn enable_pv_scoring(&mut self, list: &MoveList) {
        self.follow_pv = false;

        for &mv in list {
            if self.pv_table[0][self.ply] == mv {
                self.score_pv = true;
                self.follow_pv = true;
            }
        }
    }

    /// Returns `true` if the side to move has anything beyond pawns and the king, the usual
    /// guard against null-move zugzwang.
    fn has_non_pawn_material(&self) -> bool {
        use chess::Piece::{King, Pawn};
        let us = self.pos.turn();

        !(self.pos.occupied_by(us)
            ^ self.pos.occupied_by_piece(us, Pawn)
            ^ self.pos.occupied_by_piece(us, King))
            .is_empty()
    }

    /// Checks the stop flag and the search limits. Called once per node; the cheap checks are
    /// rationed to every couple thousand nodes.
    fn time_to_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }

        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
            return true;
        }

        if self.nodes % 2048 == 0 {
            if let Some(stop_time) = self.stop_time {
                if Instant::now() >= stop_time {
                    self.stopped = true;
                }
            }
            if let Some(max_nodes) = self.limits.nodes {
                if self.nodes >= max_nodes {
                    self.stopped = true;
                }
            }
        }

        self.stopped
    }
}

impl std::fmt::Debug for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("pos", &self.pos)
            .field("limits", &self.limits)
            .field("nodes", &self.nodes)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn search(fen: &str, depth: usize) -> Thinking {
        let pos: Position = fen.parse().expect("valid fen");
        Search::new(pos, Limits { depth: Some(depth), ..Default::default() }).run()
    }

    #[test]
    fn finds_a_mate_in_one() {
        let thinking = search("6k1/8/6K1/8/8/8/8/R7 w - - 0 1", 3);
        assert_eq!(thinking.best_move().map(|m| m.to_string()),
            Some("a1a8".to_string()));
        assert_eq!(thinking.score().plies_to_mate(), Some(1));
    }

    #[test]
    fn finds_a_ladder_mate_in_two() {
        // 1. Ra7 boxes the king onto the back rank, 2. Rb8# finishes
        let thinking = search("7k/8/8/8/8/8/8/RR4K1 w - - 0 1", 5);
        assert_eq!(thinking.score().plies_to_mate(), Some(3));
    }

    #[test]
    fn grabs_a_hanging_queen() {
        let thinking = search("k7/8/8/3q4/8/8/3R4/K7 w - - 0 1", 3);
        assert_eq!(thinking.best_move().map(|m| m.to_string()),
            Some("d2d5".to_string()));
    }

    #[test]
    fn reports_no_move_when_stalemated() {
        let thinking = search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 4);
        assert_eq!(thinking.best_move(), None);
        assert_eq!(thinking.score(), Score::draw());
    }

    #[test]
    fn deeper_iterations_report_larger_node_counts() {
        let pos = Position::new();
        let mut search = Search::new(pos, Limits { depth: Some(4), ..Default::default() });

        let mut depths = Vec::new();
        let mut nodes = Vec::new();
        search.run_with(|thinking| {
            depths.push(thinking.depth());
            nodes.push(thinking.nodes());
        });

        assert_eq!(depths, vec![1, 2, 3, 4]);
        assert!(nodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn the_stop_flag_ends_the_search() {
        let pos = Position::new();
        let mut search = Search::new(pos, Limits::default());
        search.stop_handle().store(true, Ordering::Relaxed);

        let thinking = search.run();
        // nothing completed, so nothing to report
        assert_eq!(thinking.depth(), 0);
    }

    #[test]
    fn node_limit_is_respected() {
        let pos = Position::new();
        let mut search = Search::new(pos, Limits { nodes: Some(20_000), ..Default::default() });
        let thinking = search.run();

        // the limit is polled every couple thousand nodes, so allow some slack
        assert!(thinking.nodes() < 40_000);
    }

    mod ordering {
        use super::*;

        #[test]
        fn mvv_lva_corners_match_the_classic_table() {
            // attacker pawn, victim king and attacker king, victim pawn, in both colors
            assert_eq!(MVV_LVA[0][5], 605);
            assert_eq!(MVV_LVA[0][11], 605);
            assert_eq!(MVV_LVA[5][0], 100);
            assert_eq!(MVV_LVA[11][6], 100);
        }

        #[test]
        fn captures_outrank_killers_and_history() {
            let pos: Position =
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
                .parse().expect("valid fen");
            let mut search = Search::new(pos, Limits::default());

            let moves = search.pos.moves();
            let quiet = *moves.iter().find(|m| !m.is_capture()).expect("quiet move");
            let capture = *moves.iter().find(|m| m.is_capture()).expect("capture");

            search.killers[0][0] = quiet;
            assert!(search.score_move(capture) > search.score_move(quiet));
            assert_eq!(search.score_move(quiet), 9_000);
        }

        #[test]
        fn the_pv_move_outranks_everything() {
            let pos = Position::new();
            let mut search = Search::new(pos, Limits::default());

            let moves = search.pos.moves();
            let mv = *moves.iter().next().expect("moves exist");
            search.pv_table[0][0] = mv;
            search.score_pv = true;

            assert_eq!(search.score_move(mv), 20_000);
            // scoring the PV move disarms the flag until the next iteration
            assert!(!search.score_pv);
        }

        #[test]
        fn history_rewards_repeat_cutoffs() {
            let pos = Position::new();
            let mut search = Search::new(pos, Limits::default());

            let mv = *search.pos.moves().iter().next().expect("moves exist");
            search.history[mv.piece_index()][mv.destination() as usize] += 4 * 4;

            assert_eq!(search.score_move(mv), 16);
        }
    }
}
