// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board_layout, error, matrix, play};

// bit 0 is the blank, which is never on the board.
pub const TRIVIAL_CROSS_SET: u64 = !1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossSet {
    pub bits: u64,
    pub score: i16,
}

impl CrossSet {
    // nothing adjacent, anything goes.
    pub const TRIVIAL: CrossSet = CrossSet {
        bits: TRIVIAL_CROSS_SET,
        score: 0,
    };

    // occupied.
    pub const NONE: CrossSet = CrossSet { bits: 0, score: 0 };

    #[inline(always)]
    pub fn allows(&self, tile: u8) -> bool {
        self.bits & (1 << alphabet::unblanked(tile)) != 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    #[inline(always)]
    pub fn from_down(down: bool) -> Axis {
        if down { Axis::Down } else { Axis::Across }
    }

    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Axis::Down
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Axis {
        Axis::from_down(!self.is_down())
    }

    // position of (row, col) along this axis.
    #[inline(always)]
    pub fn index_of(self, row: i8, col: i8) -> i8 {
        if self.is_down() { row } else { col }
    }

    // the square at idx on the lane of this axis that passes through (row, col).
    #[inline(always)]
    pub fn at(self, row: i8, col: i8, idx: i8) -> (i8, i8) {
        if self.is_down() { (idx, col) } else { (row, idx) }
    }

    #[inline(always)]
    fn slot(self) -> usize {
        self as usize
    }
}

// Left is toward lower indexes, also on the Down axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordDirection {
    Left = -1,
    Right = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    tile: u8,
    cross_sets: [CrossSet; 2],
}

impl Square {
    #[inline(always)]
    pub fn tile(&self) -> u8 {
        self.tile
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tile == alphabet::EMPTY_SQUARE
    }

    #[inline(always)]
    pub fn is_blanked(&self) -> bool {
        alphabet::is_blanked(self.tile)
    }

    #[inline(always)]
    pub fn cross_set(&self, axis: Axis) -> CrossSet {
        self.cross_sets[axis.slot()]
    }
}

impl Default for Square {
    fn default() -> Self {
        Self {
            tile: alphabet::EMPTY_SQUARE,
            cross_sets: [CrossSet::TRIVIAL; 2],
        }
    }
}

// Storage is always row-major and untransposed. The transposed flag only
// swaps how (row, col) and Axis are read, so transposing moves no data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    squares: Box<[Square]>,
    transposed: bool,
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        let dim = board_layout.dim();
        Self {
            dim,
            squares: vec![Square::default(); dim.len()].into_boxed_slice(),
            transposed: false,
        }
    }

    #[inline(always)]
    pub fn dimension(&self) -> i8 {
        self.dim.rows
    }

    #[inline(always)]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    pub fn transpose(&mut self) {
        self.transposed = !self.transposed;
    }

    // Transposes now and back again when the guard drops.
    pub fn transposed(&mut self) -> Transposed<'_> {
        self.transpose();
        Transposed { board: self }
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        self.dim.contains(row, col)
    }

    #[inline(always)]
    fn idx(&self, row: i8, col: i8) -> usize {
        if self.transposed {
            self.dim.at_row_col(col, row)
        } else {
            self.dim.at_row_col(row, col)
        }
    }

    #[inline(always)]
    fn stored_axis(&self, axis: Axis) -> Axis {
        if self.transposed {
            axis.perpendicular()
        } else {
            axis
        }
    }

    pub fn get_square(&self, row: i8, col: i8) -> Square {
        assert!(
            self.in_bounds(row, col),
            "square ({row}, {col}) is off the board"
        );
        let mut square = self.squares[self.idx(row, col)];
        if self.transposed {
            square.cross_sets.swap(0, 1);
        }
        square
    }

    pub fn try_get_square(&self, row: i8, col: i8) -> Option<Square> {
        if self.in_bounds(row, col) {
            Some(self.get_square(row, col))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn tile_at(&self, row: i8, col: i8) -> u8 {
        self.squares[self.idx(row, col)].tile
    }

    #[inline(always)]
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        self.tile_at(row, col) == alphabet::EMPTY_SQUARE
    }

    // off the board reads as empty.
    #[inline(always)]
    fn is_empty_or_off(&self, row: i8, col: i8) -> bool {
        !self.in_bounds(row, col) || self.is_empty(row, col)
    }

    pub fn set_tile(&mut self, row: i8, col: i8, tile: u8) {
        let idx = self.idx(row, col);
        self.squares[idx].tile = tile;
    }

    pub fn num_tiles(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }

    pub fn get_cross(&self, row: i8, col: i8, axis: Axis) -> CrossSet {
        self.squares[self.idx(row, col)].cross_sets[self.stored_axis(axis).slot()]
    }

    pub fn set_cross(&mut self, row: i8, col: i8, axis: Axis, cross_set: CrossSet) {
        let idx = self.idx(row, col);
        let slot = self.stored_axis(axis).slot();
        self.squares[idx].cross_sets[slot] = cross_set;
    }

    pub fn get_cross_set(&self, row: i8, col: i8, axis: Axis) -> u64 {
        self.get_cross(row, col, axis).bits
    }

    pub fn set_cross_set(&mut self, row: i8, col: i8, bits: u64, axis: Axis) {
        let score = self.get_cross_score(row, col, axis);
        self.set_cross(row, col, axis, CrossSet { bits, score });
    }

    pub fn get_cross_score(&self, row: i8, col: i8, axis: Axis) -> i16 {
        self.get_cross(row, col, axis).score
    }

    pub fn set_cross_score(&mut self, row: i8, col: i8, score: i16, axis: Axis) {
        let bits = self.get_cross_set(row, col, axis);
        self.set_cross(row, col, axis, CrossSet { bits, score });
    }

    // Walks from (row, col) in dir while occupied. Returns the index (along
    // axis) of the last occupied square, or one step back from the start
    // if the start is empty or off the board.
    pub fn word_edge_along(&self, axis: Axis, row: i8, col: i8, dir: WordDirection) -> i8 {
        let step = dir as i8;
        let mut idx = axis.index_of(row, col);
        loop {
            let (r, c) = axis.at(row, col, idx);
            if self.is_empty_or_off(r, c) {
                break;
            }
            idx += step;
        }
        idx - step
    }

    pub fn word_edge(&self, row: i8, col: i8, dir: WordDirection) -> i8 {
        self.word_edge_along(Axis::Across, row, col, dir)
    }

    pub fn neighbors_empty_along(&self, axis: Axis, row: i8, col: i8) -> bool {
        let idx = axis.index_of(row, col);
        let (r, c) = axis.at(row, col, idx - 1);
        if !self.is_empty_or_off(r, c) {
            return false;
        }
        let (r, c) = axis.at(row, col, idx + 1);
        self.is_empty_or_off(r, c)
    }

    pub fn left_and_right_empty(&self, row: i8, col: i8) -> bool {
        self.neighbors_empty_along(Axis::Across, row, col)
    }

    // Sums face values from (row, col) toward Left while occupied.
    pub fn traverse_backwards_for_score_along(
        &self,
        axis: Axis,
        row: i8,
        col: i8,
        alphabet: &alphabet::Alphabet,
    ) -> i16 {
        let mut score = 0i16;
        let mut idx = axis.index_of(row, col);
        loop {
            let (r, c) = axis.at(row, col, idx);
            if self.is_empty_or_off(r, c) {
                break;
            }
            score += alphabet.score(self.tile_at(r, c)) as i16;
            idx -= 1;
        }
        score
    }

    pub fn traverse_backwards_for_score(
        &self,
        row: i8,
        col: i8,
        alphabet: &alphabet::Alphabet,
    ) -> i16 {
        self.traverse_backwards_for_score_along(Axis::Across, row, col, alphabet)
    }

    // No validation. Played-through squares are left alone.
    pub fn place_play_tiles(&mut self, play: &play::Play) {
        let (row, col, down) = play.coords_and_down();
        let axis = Axis::from_down(down);
        for (idx, &tile) in (axis.index_of(row, col)..).zip(play.tiles().iter()) {
            if tile != alphabet::PLAYED_THROUGH_MARKER {
                let (r, c) = axis.at(row, col, idx);
                self.set_tile(r, c, tile);
            }
        }
    }

    pub fn check_play_fits(&self, play: &play::Play) -> error::Returns<()> {
        let (row, col, down) = play.coords_and_down();
        let axis = Axis::from_down(down);
        let start = axis.index_of(row, col) as i16;
        let end = start + play.tiles().len() as i16 - 1;
        for idx in [start, end] {
            let (r, c) = if down {
                (idx, col as i16)
            } else {
                (row as i16, idx)
            };
            if r < 0 || c < 0 || r >= self.dimension() as i16 || c >= self.dimension() as i16 {
                return Err(error::Error::OutOfRange {
                    row: r,
                    col: c,
                    dim: self.dimension(),
                });
            }
        }
        Ok(())
    }

    // Rows of labels, "." or " " for empty, lowercase for designated blanks.
    // Cross-sets are reset to trivial, so regenerate after loading.
    pub fn set_rows(&mut self, alphabet: &alphabet::Alphabet, rows: &[&str]) -> error::Returns<()> {
        if rows.len() != self.dimension() as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                self.dimension(),
                rows.len()
            ));
        }
        let mut tiles = Vec::with_capacity(self.dim.len());
        for (r, row) in rows.iter().enumerate() {
            let row_tiles = alphabet.read_board_row(row)?;
            if row_tiles.len() != self.dimension() as usize {
                return_error!(format!(
                    "board row {} (0-based) has {} squares, need {}",
                    r,
                    row_tiles.len(),
                    self.dimension()
                ));
            }
            tiles.extend(row_tiles);
        }
        for (r, row_tiles) in (0i8..).zip(tiles.chunks(self.dimension() as usize)) {
            for (c, &tile) in (0i8..).zip(row_tiles) {
                let idx = self.idx(r, c);
                self.squares[idx] = Square {
                    tile,
                    cross_sets: [CrossSet::TRIVIAL; 2],
                };
            }
        }
        Ok(())
    }
}

pub struct Transposed<'a> {
    board: &'a mut Board,
}

impl std::ops::Deref for Transposed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl std::ops::DerefMut for Transposed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Transposed<'_> {
    fn drop(&mut self) {
        self.board.transpose();
    }
}
