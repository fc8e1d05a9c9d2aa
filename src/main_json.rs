// Copyright (C) 2020-2024 Andy Kurnia.

use crossets::cross_set::Generator;
use crossets::{board, cross_set, display, error, game_config, lexicon, play, play_scorer};

// board: rows of labels. "." for empty, lowercase for designated blanks.
// plays: applied in order, each scored against the board before it.
// words: the lexicon. without it only cross-scores are computed and every
// constrained square allows every letter.
#[derive(serde::Deserialize)]
struct Question {
    #[serde(default)]
    lexicon: Option<String>,
    #[serde(default)]
    distribution: Option<String>,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    words: Option<Vec<String>>,
    #[serde(default)]
    board: Vec<String>,
    #[serde(default)]
    plays: Vec<QuestionPlay>,
}

#[derive(serde::Deserialize)]
struct QuestionPlay {
    coords: String,
    word: String,
}

#[derive(serde::Serialize)]
struct ScoredPlay {
    coords: String,
    word: String,
    score: i16,
}

#[derive(serde::Serialize)]
struct SquareCrossSet {
    row: i8,
    col: i8,
    down: bool,
    letters: String,
    score: i16,
}

#[derive(serde::Serialize)]
struct Answer {
    plays: Vec<ScoredPlay>,
    board: Vec<String>,
    cross_sets: Vec<SquareCrossSet>,
}

fn read_question() -> error::Returns<Question> {
    let data = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    Ok(serde_json::from_str(&data)?)
}

fn solve<G: Generator>(
    generator: &G,
    game_config: &game_config::GameConfig,
    question: &Question,
) -> error::Returns<Answer> {
    let alphabet = game_config.alphabet();
    let mut board = board::Board::new(game_config.board_layout());
    if !question.board.is_empty() {
        let rows = question.board.iter().map(String::as_str).collect::<Vec<_>>();
        board.set_rows(alphabet, &rows)?;
    }
    generator.generate_all(&mut board);

    let mut plays = Vec::with_capacity(question.plays.len());
    for question_play in &question.plays {
        let play = play::Play::from_notation(alphabet, &question_play.coords, &question_play.word, 0)?;
        board.check_play_fits(&play)?;
        let score = play_scorer::compute_score(&board, game_config, &play);
        board.place_play_tiles(&play);
        generator.update_for_play(&mut board, &play);
        tracing::info!(play = %play.fmt_coords(), word = %question_play.word, score, "applied play");
        plays.push(ScoredPlay {
            coords: play.fmt_coords(),
            word: question_play.word.clone(),
            score,
        });
    }

    let dim = board.dimension();
    let mut cross_sets = Vec::new();
    for axis in [board::Axis::Across, board::Axis::Down] {
        for row in 0..dim {
            for col in 0..dim {
                let cross_set = board.get_cross(row, col, axis);
                if board.is_empty(row, col) && cross_set != board::CrossSet::TRIVIAL {
                    cross_sets.push(SquareCrossSet {
                        row,
                        col,
                        down: axis.is_down(),
                        letters: alphabet.fmt_cross_set(cross_set.bits),
                        score: cross_set.score,
                    });
                }
            }
        }
    }
    eprint!(
        "{}",
        display::board_to_string(alphabet, game_config.board_layout(), &board)
    );

    Ok(Answer {
        plays,
        board: (0..dim)
            .map(|row| {
                let tiles = (0..dim).map(|col| board.tile_at(row, col)).collect::<Vec<_>>();
                alphabet.fmt_board(&tiles)
            })
            .collect(),
        cross_sets,
    })
}

fn main() -> error::Returns<()> {
    tracing_subscriber::fmt::init();

    let mut config = game_config::Config::from_env();
    config.adjust_relative_paths(&std::env::current_dir()?);
    let question = read_question()?;
    if let Some(variant) = &question.variant {
        config.board_variant.clone_from(variant);
    }
    let lexicon_name = question
        .lexicon
        .clone()
        .unwrap_or_else(|| config.default_lexicon.clone());
    let distribution = question.distribution.clone().unwrap_or_else(|| {
        game_config::letter_distribution_name_for_lexicon(&lexicon_name).into()
    });
    let game_config = game_config::make_game_config(&config, &distribution)?;
    let alphabet = game_config.alphabet();

    let answer = match &question.words {
        Some(words) => {
            let word_set = lexicon::WordSet::from_words(&lexicon_name, alphabet, words)?;
            tracing::debug!(lexicon = %lexicon_name, words = word_set.len(), "built lexicon");
            solve(
                &cross_set::CrossSetGenerator::new(alphabet, word_set),
                &game_config,
                &question,
            )?
        }
        None => solve(
            &cross_set::CrossScoreOnlyGenerator::score_only(alphabet),
            &game_config,
            &question,
        )?,
    };
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
