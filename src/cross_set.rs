// Copyright (C) 2020-2024 Andy Kurnia.

use super::alphabet;
use super::board::{self, Axis, Board, CrossSet, WordDirection};
use super::lexicon::{self, Lexicon};
use super::play::Play;

// A cross-set on the Across axis is derived from the square's across
// neighbors, so it constrains down plays through that square.
pub trait Generator {
    // Out-of-range coordinates are ignored.
    fn generate(&self, board: &mut Board, row: i8, col: i8, axis: Axis);

    fn generate_all(&self, board: &mut Board) {
        let n = board.dimension();
        for axis in [Axis::Across, Axis::Down] {
            for row in 0..n {
                for col in 0..n {
                    self.generate(board, row, col, axis);
                }
            }
        }
    }

    // Call right after the play's tiles are on the board. Only squares
    // whose cross-sets can change are regenerated.
    fn update_for_play(&self, board: &mut Board, play: &Play) {
        let (row, col, down) = play.coords_and_down();
        let axis = Axis::from_down(down);
        let perpendicular = axis.perpendicular();
        let start = axis.index_of(row, col);
        tracing::debug!(
            row,
            col,
            down,
            tiles = play.tiles().len(),
            "updating cross-sets for play"
        );

        // just outside both ends of this word.
        for idx in [start - 1, start + play.tiles().len() as i8] {
            let (r, c) = axis.at(row, col, idx);
            self.generate(board, r, c, axis);
        }

        for (idx, &tile) in (start..).zip(play.tiles().iter()) {
            if tile == alphabet::PLAYED_THROUGH_MARKER {
                // nothing new crosses here.
                continue;
            }
            let (r, c) = axis.at(row, col, idx);
            // these two clear the just played square.
            self.generate(board, r, c, axis);
            self.generate(board, r, c, perpendicular);
            let first = board.word_edge_along(perpendicular, r, c, WordDirection::Left);
            let last = board.word_edge_along(perpendicular, r, c, WordDirection::Right);
            for perpendicular_idx in [first - 1, last + 1] {
                let (pr, pc) = perpendicular.at(r, c, perpendicular_idx);
                self.generate(board, pr, pc, perpendicular);
            }
        }
    }
}

pub struct CrossSetGenerator<'a, L: Lexicon> {
    alphabet: &'a alphabet::Alphabet,
    lexicon: L,
}

// Scores are exact; every constrained square allows every letter.
pub type CrossScoreOnlyGenerator<'a> = CrossSetGenerator<'a, lexicon::AcceptAll>;

impl<'a, L: Lexicon> CrossSetGenerator<'a, L> {
    pub fn new(alphabet: &'a alphabet::Alphabet, lexicon: L) -> Self {
        Self { alphabet, lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    // left run + each letter + right run.
    fn legal_letters(&self, board: &Board, axis: Axis, row: i8, col: i8, right: i8) -> u64 {
        if self.lexicon.accepts_everything() {
            return board::TRIVIAL_CROSS_SET;
        }
        let idx = axis.index_of(row, col);
        let (lr, lc) = axis.at(row, col, idx - 1);
        let left = board.word_edge_along(axis, lr, lc, WordDirection::Left);
        let mut word = Vec::with_capacity((right - left + 1) as usize);
        for i in left..=right {
            let (r, c) = axis.at(row, col, i);
            word.push(if i == idx {
                alphabet::EMPTY_SQUARE
            } else {
                alphabet::unblanked(board.tile_at(r, c))
            });
        }
        let gap = (idx - left) as usize;
        let mut bits = 0u64;
        for tile in 1..self.alphabet.len() {
            word[gap] = tile;
            if self.lexicon.has_word(&word) {
                bits |= 1 << tile;
            }
        }
        bits
    }
}

impl<'a> CrossScoreOnlyGenerator<'a> {
    pub fn score_only(alphabet: &'a alphabet::Alphabet) -> Self {
        CrossSetGenerator::new(alphabet, lexicon::AcceptAll)
    }
}

impl<L: Lexicon> Generator for CrossSetGenerator<'_, L> {
    fn generate(&self, board: &mut Board, row: i8, col: i8, axis: Axis) {
        if !board.in_bounds(row, col) {
            return;
        }
        if !board.is_empty(row, col) {
            board.set_cross(row, col, axis, CrossSet::NONE);
            return;
        }
        if board.neighbors_empty_along(axis, row, col) {
            board.set_cross(row, col, axis, CrossSet::TRIVIAL);
            return;
        }
        // something is before, after, or both.
        let idx = axis.index_of(row, col);
        let (before_r, before_c) = axis.at(row, col, idx - 1);
        let (after_r, after_c) = axis.at(row, col, idx + 1);
        let right = board.word_edge_along(axis, after_r, after_c, WordDirection::Right);
        let before_score =
            board.traverse_backwards_for_score_along(axis, before_r, before_c, self.alphabet);
        let score = if right == idx {
            before_score
        } else {
            let (right_r, right_c) = axis.at(row, col, right);
            board.traverse_backwards_for_score_along(axis, right_r, right_c, self.alphabet)
                + before_score
        };
        let bits = self.legal_letters(board, axis, row, col, right);
        board.set_cross(row, col, axis, CrossSet { bits, score });
    }
}

pub fn gen_all_cross_scores(board: &mut Board, alphabet: &alphabet::Alphabet) {
    CrossScoreOnlyGenerator::score_only(alphabet).generate_all(board);
}
