// Copyright (C) 2020-2024 Andy Kurnia.

#![allow(dead_code)]

use crossets::{alphabet, board, board_layout, lexicon};

pub const WORDS: &[&str] = &[
    "AB", "BA", "AD", "DA", "AT", "TA", "OX", "XI", "HO", "OH", "CAT", "CATS", "SCAT", "SNOW",
    "SNOWED", "SNOWS", "HOTEL", "HOTELS", "CALM", "CALMS", "FOYER", "FOYERS", "EH", "HE", "ME",
    "EM", "OM", "MO", "LA", "AL", "ACT", "AFT", "ANT",
];

// CALM runs down column H through the blanked L of HOTEl.
pub const FIXTURE_ROWS: &[&str] = &[
    "SNOW...........",
    "...............",
    "...............",
    "...............",
    "...............",
    ".......C.......",
    ".......A.......",
    "...HOTEl.......",
    ".......M.......",
    "...............",
    "..A.T..........",
    "...............",
    "...............",
    "...............",
    "..........FOYER",
];

pub fn english() -> alphabet::Alphabet {
    alphabet::make_english_alphabet()
}

pub fn word_set(alphabet: &alphabet::Alphabet) -> lexicon::WordSet {
    lexicon::WordSet::from_words("FIXTURE", alphabet, WORDS).unwrap()
}

pub fn empty_board() -> board::Board {
    board::Board::new(&board_layout::make_standard_board_layout())
}

// tiles only, cross-sets still trivial.
pub fn fixture_board(alphabet: &alphabet::Alphabet) -> board::Board {
    let mut board = empty_board();
    board.set_rows(alphabet, FIXTURE_ROWS).unwrap();
    board
}

pub fn tile(alphabet: &alphabet::Alphabet, label: &str) -> u8 {
    alphabet.read_play_word(label).unwrap()[0]
}

pub fn letters(alphabet: &alphabet::Alphabet, letters: &str) -> u64 {
    alphabet
        .read_rack(letters)
        .unwrap()
        .iter()
        .fold(0, |bits, &tile| bits | (1 << tile))
}
