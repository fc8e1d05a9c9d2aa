// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};

// Words are unblanked machine letters (1 for A), never empty.
pub trait Lexicon {
    fn name(&self) -> &str;

    fn has_word(&self, word: &[u8]) -> bool;

    // Lets cross-set generation skip trying every letter.
    fn accepts_everything(&self) -> bool {
        false
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn has_word(&self, word: &[u8]) -> bool {
        (**self).has_word(word)
    }

    fn accepts_everything(&self) -> bool {
        (**self).accepts_everything()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl Lexicon for AcceptAll {
    fn name(&self) -> &str {
        "AcceptAll"
    }

    fn has_word(&self, _word: &[u8]) -> bool {
        true
    }

    fn accepts_everything(&self) -> bool {
        true
    }
}

// Fast insecure non-cryptographic hash, fine for short machine words.
#[derive(Default)]
struct WordHasher(u64);

impl std::hash::Hasher for WordHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
        }
    }
}

type WordHasherDefault = std::hash::BuildHasherDefault<WordHasher>;

pub struct WordSet {
    name: String,
    words: std::collections::HashSet<Box<[u8]>, WordHasherDefault>,
}

impl WordSet {
    pub fn from_words<S: AsRef<str>>(
        name: &str,
        alphabet: &alphabet::Alphabet,
        words: &[S],
    ) -> error::Returns<Self> {
        let mut word_set = Self {
            name: name.into(),
            words: Default::default(),
        };
        for word in words {
            word_set.insert(alphabet, word.as_ref())?;
        }
        Ok(word_set)
    }

    // One word per line, blank lines ignored.
    pub fn from_reader<R: std::io::BufRead>(
        name: &str,
        alphabet: &alphabet::Alphabet,
        reader: R,
    ) -> error::Returns<Self> {
        let mut word_set = Self {
            name: name.into(),
            words: Default::default(),
        };
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                word_set.insert(alphabet, word)?;
            }
        }
        tracing::debug!(lexicon = name, words = word_set.len(), "loaded word list");
        Ok(word_set)
    }

    fn insert(&mut self, alphabet: &alphabet::Alphabet, word: &str) -> error::Returns<()> {
        let tiles = alphabet.read_rack(&word.to_uppercase())?;
        if tiles.contains(&alphabet::BLANK) {
            return_error!(format!("word {:?} has a blank", word));
        }
        self.words.insert(tiles.into_boxed_slice());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_word(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_set_checks_membership() {
        let alphabet = alphabet::make_english_alphabet();
        let lexicon = WordSet::from_words("TEST", &alphabet, &["cat", "AT"]).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.has_word(&[3, 1, 20]));
        assert!(lexicon.has_word(&[1, 20]));
        assert!(!lexicon.has_word(&[20, 1]));
        assert!(!lexicon.accepts_everything());
        assert_eq!((&lexicon).name(), "TEST");
    }

    #[test]
    fn word_set_reads_lines() {
        let alphabet = alphabet::make_english_alphabet();
        let lexicon = WordSet::from_reader("TEST", &alphabet, "AA\n\n  QI \n".as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.has_word(&[17, 9]));
    }

    #[test]
    fn word_set_rejects_blanks_and_junk() {
        let alphabet = alphabet::make_english_alphabet();
        assert!(WordSet::from_words("TEST", &alphabet, &["A?"]).is_err());
        assert!(WordSet::from_words("TEST", &alphabet, &["A-B"]).is_err());
    }

    #[test]
    fn accept_all_accepts() {
        assert!(AcceptAll.has_word(&[1, 2, 3]));
        assert!(AcceptAll.accepts_everything());
    }
}
