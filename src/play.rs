// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};

// A tile placement. Tiles use board encoding (0x80 for designated blanks)
// with PLAYED_THROUGH_MARKER where the square was already occupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    row: i8,
    col: i8,
    down: bool,
    tiles: Box<[u8]>,
    score: i16,
}

impl Play {
    pub fn new(row: i8, col: i8, down: bool, tiles: &[u8], score: i16) -> Self {
        Self {
            row,
            col,
            down,
            tiles: tiles.into(),
            score,
        }
    }

    // "8D" is row 8 column D going across, "D8" is the same square going down.
    pub fn from_notation(
        alphabet: &alphabet::Alphabet,
        coords: &str,
        word: &str,
        score: i16,
    ) -> error::Returns<Self> {
        let (row, col, down) = parse_coords(coords)?;
        let tiles = alphabet.read_play_word(word)?;
        if tiles.is_empty() {
            return_error!(format!("play at {} has no tiles", coords));
        }
        Ok(Self::new(row, col, down, &tiles, score))
    }

    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline(always)]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[inline(always)]
    pub fn coords_and_down(&self) -> (i8, i8, bool) {
        (self.row, self.col, self.down)
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[inline(always)]
    pub fn score(&self) -> i16 {
        self.score
    }

    pub fn num_tiles_played(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&tile| tile != alphabet::PLAYED_THROUGH_MARKER)
            .count()
    }

    pub fn fmt_coords(&self) -> String {
        let col_label = ((self.col as u8) + b'A') as char;
        if self.down {
            format!("{}{}", col_label, self.row + 1)
        } else {
            format!("{}{}", self.row + 1, col_label)
        }
    }

    pub fn short_description(&self, alphabet: &alphabet::Alphabet) -> String {
        format!(
            "{} {} {}",
            self.fmt_coords(),
            alphabet.fmt_board(&self.tiles),
            self.score
        )
    }
}

pub fn parse_coords(coords: &str) -> error::Returns<(i8, i8, bool)> {
    let coords = coords.trim();
    let digits_first = coords.starts_with(|c: char| c.is_ascii_digit());
    let split = if digits_first {
        coords.find(|c: char| !c.is_ascii_digit())
    } else {
        coords.find(|c: char| c.is_ascii_digit())
    };
    let Some(split) = split.filter(|&split| split > 0) else {
        return_error!(format!("invalid coordinates {:?}", coords));
    };
    let (first, second) = coords.split_at(split);
    let (row_str, col_str) = if digits_first {
        (first, second)
    } else {
        (second, first)
    };
    let row = match row_str.parse::<i8>() {
        Ok(row) if row >= 1 => row - 1,
        _ => {
            return_error!(format!("invalid row in coordinates {:?}", coords));
        }
    };
    let mut col_chars = col_str.chars();
    let col = match (col_chars.next(), col_chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => (c.to_ascii_uppercase() as u8 - b'A') as i8,
        _ => {
            return_error!(format!("invalid column in coordinates {:?}", coords));
        }
    };
    Ok((row, col, !digits_first))
}
