// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board, game_config, play};

// Call before the play's tiles are placed, with cross-scores current.
// Assume play is valid.
pub fn compute_score(
    board: &board::Board,
    game_config: &game_config::GameConfig,
    play: &play::Play,
) -> i16 {
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();
    let (row, col, down) = play.coords_and_down();
    let axis = board::Axis::from_down(down);
    let perpendicular = axis.perpendicular();
    let mut num_played = 0;
    let mut recounted_score = 0i16;

    {
        let mut word_multiplier = 1;
        let mut word_score = 0i16;
        for (idx, &tile) in (axis.index_of(row, col)..).zip(play.tiles().iter()) {
            let (r, c) = axis.at(row, col, idx);
            if tile == alphabet::PLAYED_THROUGH_MARKER {
                word_score += alphabet.score(board.tile_at(r, c)) as i16;
                continue;
            }
            num_played += 1;
            let premium = board_layout.premium_at(r, c);
            word_multiplier *= premium.word_multiplier as i16;
            let tile_score = alphabet.score(tile) as i16 * premium.tile_multiplier as i16;
            word_score += tile_score;

            if board.neighbors_empty_along(perpendicular, r, c) {
                // no perpendicular tile
                continue;
            }
            let cross_score = board.get_cross_score(r, c, perpendicular);
            recounted_score += (cross_score + tile_score) * premium.word_multiplier as i16;
        }
        recounted_score += word_score * word_multiplier;
    }

    recounted_score + game_config.num_played_bonus(num_played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_set;

    #[test]
    fn opening_play_doubles_on_the_star() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let play = play::Play::new(7, 7, false, &[3, 1, 20], 0);
        assert_eq!(compute_score(&board, &game_config, &play), 10);
    }

    #[test]
    fn seven_tiles_get_the_bonus() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        // RETAINS from 8D: R on the dls, I on the star.
        let play = play::Play::new(7, 3, false, &[18, 5, 20, 1, 9, 14, 19], 0);
        assert_eq!(compute_score(&board, &game_config, &play), (2 + 1 + 1 + 1 + 1 + 1 + 1) * 2 + 50);
    }

    #[test]
    fn hooks_score_the_perpendicular_word() {
        let game_config = game_config::make_english_game_config();
        let alphabet = game_config.alphabet();
        let mut board = board::Board::new(game_config.board_layout());
        let cat = play::Play::new(7, 7, false, &[3, 1, 20], 0);
        board.place_play_tiles(&cat);
        cross_set::gen_all_cross_scores(&mut board, alphabet);
        // ABS down from K6 makes CATS, all on plain squares.
        let play = play::Play::from_notation(alphabet, "K6", "ABS", 0).unwrap();
        let main_word = 1 + 3 + 1;
        let cats = 3 + 1 + 1 + 1;
        assert_eq!(compute_score(&board, &game_config, &play), main_word + cats);
    }

    #[test]
    fn played_through_tiles_skip_premiums() {
        let game_config = game_config::make_english_game_config();
        let alphabet = game_config.alphabet();
        let mut board = board::Board::new(game_config.board_layout());
        board.place_play_tiles(&play::Play::new(7, 7, false, &[3, 1, 20], 0));
        cross_set::gen_all_cross_scores(&mut board, alphabet);
        // SCAT through CAT, the star is not counted again.
        let play = play::Play::from_notation(alphabet, "8G", "S...", 0).unwrap();
        assert_eq!(compute_score(&board, &game_config, &play), 1 + 3 + 1 + 1);
    }
}
