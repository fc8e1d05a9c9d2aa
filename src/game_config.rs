// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, board_layout, error};
use std::path::{Path, PathBuf};

pub struct GameConfig {
    alphabet: alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
}

impl GameConfig {
    pub fn new(
        alphabet: alphabet::Alphabet,
        board_layout: board_layout::BoardLayout,
        rack_size: i8,
    ) -> Self {
        Self {
            alphabet,
            board_layout,
            rack_size,
        }
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet {
        &self.alphabet
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        &self.board_layout
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        self.rack_size
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        // branchless
        50 & -((num_played >= self.rack_size) as i16)
    }
}

pub fn make_english_game_config() -> GameConfig {
    GameConfig::new(
        alphabet::make_english_alphabet(),
        board_layout::make_standard_board_layout(),
        7,
    )
}

pub fn make_polish_game_config() -> GameConfig {
    GameConfig::new(
        alphabet::make_polish_alphabet(),
        board_layout::make_standard_board_layout(),
        7,
    )
}

// Runtime settings. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: bool,
    pub letter_distribution_path: Option<PathBuf>,
    pub default_letter_distribution: String,
    pub default_lexicon: String,
    pub board_variant: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            letter_distribution_path: None,
            default_letter_distribution: "english".into(),
            default_lexicon: "NWL18".into(),
            board_variant: "CrosswordGame".into(),
        }
    }
}

impl Config {
    pub fn from_env_with<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            letter_distribution_path: lookup("LETTER_DISTRIBUTION_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_json_str(s: &str) -> error::Returns<Self> {
        Ok(serde_json::from_str(s)?)
    }

    // "./" paths are taken relative to the nearest ancestor of base that has
    // a data directory, or base itself if none does.
    pub fn adjust_relative_paths(&mut self, base: &Path) {
        let base = find_base_path(base);
        let relative = self
            .letter_distribution_path
            .as_deref()
            .and_then(|path| path.strip_prefix(".").ok());
        if let Some(rest) = relative {
            let adjusted = base.join(rest);
            tracing::info!(ldpath = %adjusted.display(), "adjusted relative path");
            self.letter_distribution_path = Some(adjusted);
        }
    }
}

pub fn find_base_path(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|dir| dir.join("data").exists())
        .unwrap_or(path)
        .to_path_buf()
}

pub fn letter_distribution_name_for_lexicon(lexicon: &str) -> &'static str {
    if lexicon.starts_with("OSPS") {
        "polish"
    } else if lexicon.starts_with("FISE") {
        "spanish"
    } else {
        "english"
    }
}

pub fn make_game_config(config: &Config, distribution_name: &str) -> error::Returns<GameConfig> {
    let name = distribution_name.to_lowercase();
    let alphabet = match &config.letter_distribution_path {
        Some(dir) => {
            let path = dir.join(format!("{}.csv", name));
            tracing::debug!(path = %path.display(), "reading letter distribution");
            alphabet::Alphabet::from_csv_reader(std::fs::File::open(&path)?)?
        }
        None => match name.as_str() {
            "english" => alphabet::make_english_alphabet(),
            "polish" => alphabet::make_polish_alphabet(),
            _ => {
                return_error!(format!("no built-in letter distribution {:?}", name));
            }
        },
    };
    let board_layout = board_layout::board_layout_for_variant(&config.board_variant)?;
    Ok(GameConfig::new(alphabet, board_layout, 7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_needs_a_full_rack() {
        let game_config = make_english_game_config();
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(0), 0);
    }

    #[test]
    fn config_from_env_lookup() {
        let config = Config::from_env_with(|key| {
            (key == "LETTER_DISTRIBUTION_PATH").then(|| "./data/letterdistributions".into())
        });
        assert_eq!(
            config.letter_distribution_path,
            Some(PathBuf::from("./data/letterdistributions"))
        );
        assert_eq!(config.default_lexicon, "NWL18");
        assert_eq!(Config::from_env_with(|_| Some(String::new())), Config::default());
    }

    #[test]
    fn config_from_json_fills_defaults() {
        let config = Config::from_json_str(r#"{"debug": true, "default_lexicon": "OSPS42"}"#).unwrap();
        assert!(config.debug);
        assert_eq!(config.default_lexicon, "OSPS42");
        assert_eq!(config.board_variant, "CrosswordGame");
        assert!(Config::from_json_str("{").is_err());
    }

    #[test]
    fn relative_paths_resolve_against_data_dir() {
        let root = std::env::temp_dir().join(format!("crossets-config-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(root.join("data")).unwrap();
        std::fs::create_dir_all(&nested).unwrap();
        let mut config = Config {
            letter_distribution_path: Some(PathBuf::from("./data/letterdistributions")),
            ..Config::default()
        };
        config.adjust_relative_paths(&nested);
        assert_eq!(
            config.letter_distribution_path,
            Some(root.join("data").join("letterdistributions"))
        );
        let mut absolute = Config {
            letter_distribution_path: Some(PathBuf::from("/opt/ld")),
            ..Config::default()
        };
        absolute.adjust_relative_paths(&nested);
        assert_eq!(absolute.letter_distribution_path, Some(PathBuf::from("/opt/ld")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn picks_distribution_for_lexicon() {
        assert_eq!(letter_distribution_name_for_lexicon("OSPS44"), "polish");
        assert_eq!(letter_distribution_name_for_lexicon("FISE2"), "spanish");
        assert_eq!(letter_distribution_name_for_lexicon("CSW21"), "english");
    }

    #[test]
    fn makes_game_config_from_builtins_and_csv() {
        let config = Config::default();
        assert_eq!(make_game_config(&config, "English").unwrap().alphabet().len(), 27);
        assert_eq!(make_game_config(&config, "polish").unwrap().alphabet().len(), 33);
        assert!(make_game_config(&config, "spanish").is_err());

        let dir = std::env::temp_dir().join(format!("crossets-ld-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("tiny.csv"), "letter,quantity,value\n?,1,0\nA,3,1\n").unwrap();
        let config = Config {
            letter_distribution_path: Some(dir.clone()),
            ..Config::default()
        };
        let game_config = make_game_config(&config, "tiny").unwrap();
        assert_eq!(game_config.alphabet().num_tiles(), 4);
        assert!(matches!(
            make_game_config(&config, "missing"),
            Err(error::Error::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
