// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board, board_layout};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    let premium = board_layout.premium_at(row, col);
    match (premium.word_multiplier, premium.tile_multiplier) {
        (3, _) => "=",
        (2, _) => "-",
        (_, 3) => "\"",
        (_, 2) => "\'",
        _ => " ",
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet,
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
    row: i8,
    col: i8,
) -> &'a str {
    alphabet
        .from_board(board.tile_at(row, col))
        .unwrap_or_else(|| empty_label(board_layout, row, col))
}

fn write_column_labels(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        let _ = write!(s, " {}", ((c as u8) + 0x61) as char);
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn board_to_string(
    alphabet: &alphabet::Alphabet,
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
) -> String {
    let dim = board.dimension();
    let mut s = String::new();
    write_column_labels(&mut s, dim);
    write_border(&mut s, dim);
    for r in 0..dim {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(board_label(alphabet, board_layout, board, r, c));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    write_border(&mut s, dim);
    write_column_labels(&mut s, dim);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_tiles_over_premiums() {
        let alphabet = alphabet::make_english_alphabet();
        let layout = board_layout::make_standard_board_layout();
        let mut board = board::Board::new(&layout);
        assert_eq!(empty_label(&layout, 7, 7), "*");
        assert_eq!(empty_label(&layout, 0, 0), "=");
        assert_eq!(empty_label(&layout, 0, 3), "\'");
        board.set_tile(7, 7, 3);
        board.set_tile(7, 8, 1 | alphabet::BLANKED_BIT);
        let s = board_to_string(&alphabet, &layout, &board);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert_eq!(lines[9], " 8|=     '       C a     '     =|8");
    }
}
