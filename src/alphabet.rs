// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

// Board: 0 is an empty square, 0x81 is a blank designated as tile 1.
// Rack and bag: 0 is the blank.
// Play tiles: 0 means the square was already occupied (played through).
pub type MachineLetter = u8;

pub const EMPTY_SQUARE: MachineLetter = 0;
pub const BLANK: MachineLetter = 0;
pub const BLANKED_BIT: MachineLetter = 0x80;
pub const PLAYED_THROUGH_MARKER: MachineLetter = 0;

// cross-sets are u64 bitmasks.
pub const MAX_ALPHABET_LEN: usize = 64;

#[inline(always)]
pub fn is_blanked(tile: MachineLetter) -> bool {
    tile & BLANKED_BIT != 0
}

#[inline(always)]
pub fn unblanked(tile: MachineLetter) -> MachineLetter {
    tile & !BLANKED_BIT
}

// the bag and racks only know "a blank", never what it was designated as.
#[inline(always)]
pub fn to_rack_tile(tile: MachineLetter) -> MachineLetter {
    tile & !((tile as i8) >> 7) as u8
}

#[derive(Clone, Debug)]
pub struct Tile {
    label: String,
    blank_label: String,
    freq: u8,
    score: i8,
    is_vowel: bool,
}

impl Tile {
    pub fn new(label: &str, blank_label: &str, freq: u8, score: i8, is_vowel: bool) -> Self {
        Self {
            label: label.into(),
            blank_label: blank_label.into(),
            freq,
            score,
            is_vowel,
        }
    }

    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline(always)]
    pub fn blank_label(&self) -> &str {
        &self.blank_label
    }
}

#[derive(Clone, Debug)]
pub struct Alphabet {
    tiles: Box<[Tile]>,
    num_tiles: u16,
}

#[derive(serde::Deserialize)]
struct LetterRecord {
    letter: String,
    quantity: u8,
    value: i8,
    #[serde(default)]
    vowel: bool,
}

impl Alphabet {
    // tiles[0] must be the blank.
    pub fn new(tiles: Vec<Tile>) -> error::Returns<Alphabet> {
        if tiles.is_empty() {
            return_error!("alphabet has no tiles".into());
        }
        if tiles.len() > MAX_ALPHABET_LEN {
            return_error!(format!(
                "alphabet has {} tiles, cross-sets only hold {}",
                tiles.len(),
                MAX_ALPHABET_LEN
            ));
        }
        for tile in &tiles[1..] {
            if tile.label.is_empty() || tile.blank_label.is_empty() {
                return_error!("alphabet has an empty label".into());
            }
        }
        let num_tiles = tiles.iter().map(|tile| tile.freq as u16).sum();
        Ok(Alphabet {
            tiles: tiles.into_boxed_slice(),
            num_tiles,
        })
    }

    // columns: letter,quantity,value[,vowel]. "?" is the blank, wherever it is.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> error::Returns<Alphabet> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut blank = None;
        let mut tiles = Vec::new();
        for record in csv_reader.deserialize() {
            let record: LetterRecord = record?;
            if record.letter == "?" {
                if blank.is_some() {
                    return_error!("letter distribution has two blanks".into());
                }
                blank = Some(Tile::new("?", "?", record.quantity, record.value, false));
            } else {
                let blank_label = record.letter.to_lowercase();
                tiles.push(Tile::new(
                    &record.letter,
                    &blank_label,
                    record.quantity,
                    record.value,
                    record.vowel,
                ));
            }
        }
        tiles.insert(0, blank.unwrap_or_else(|| Tile::new("?", "?", 0, 0, false)));
        let alphabet = Alphabet::new(tiles)?;
        tracing::debug!(
            letters = alphabet.len() - 1,
            num_tiles = alphabet.num_tiles(),
            "loaded letter distribution"
        );
        Ok(alphabet)
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &Tile {
        &self.tiles[idx as usize]
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        self.num_tiles
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&str> {
        let c = unblanked(idx);
        if c == 0 || c >= self.len() {
            None
        } else if is_blanked(idx) {
            Some(&self.get(c).blank_label)
        } else {
            Some(&self.get(c).label)
        }
    }

    #[inline(always)]
    pub fn from_rack(&self, idx: u8) -> Option<&str> {
        if idx >= self.len() {
            None
        } else {
            Some(&self.get(idx).label)
        }
    }

    // designated blanks score as the blank does.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(to_rack_tile(idx)).score
    }

    #[inline(always)]
    pub fn is_vowel(&self, idx: u8) -> bool {
        self.get(unblanked(idx)).is_vowel
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // longest label wins, so multi-byte letters never split.
    fn read_next(&self, s: &str, allow_blanked: bool) -> Option<(u8, usize)> {
        let mut found = None;
        let mut found_len = 0;
        for idx in 1..self.len() {
            let tile = self.get(idx);
            if tile.label.len() > found_len && s.starts_with(&tile.label) {
                found = Some(idx);
                found_len = tile.label.len();
            }
            if allow_blanked
                && tile.blank_label.len() > found_len
                && s.starts_with(&tile.blank_label)
            {
                found = Some(idx | BLANKED_BIT);
                found_len = tile.blank_label.len();
            }
        }
        found.map(|idx| (idx, found_len))
    }

    fn read_with<F: FnMut(&str) -> Option<(u8, usize)>>(
        &self,
        s: &str,
        mut read_one: F,
    ) -> error::Returns<Vec<u8>> {
        let mut v = Vec::with_capacity(s.len());
        let mut ix = 0;
        while ix < s.len() {
            match read_one(&s[ix..]) {
                Some((tile, len)) => {
                    v.push(tile);
                    ix += len;
                }
                None => {
                    return Err(error::Error::InvalidTile {
                        parsed: self.fmt_board(&v),
                        input: s.into(),
                    });
                }
            }
        }
        Ok(v)
    }

    // "?" is the blank.
    pub fn read_rack(&self, s: &str) -> error::Returns<Vec<u8>> {
        self.read_with(s, |rest| {
            if rest.starts_with('?') {
                Some((BLANK, 1))
            } else {
                self.read_next(rest, false)
            }
        })
    }

    // lowercase labels are designated blanks, "." is played through.
    pub fn read_play_word(&self, s: &str) -> error::Returns<Vec<u8>> {
        self.read_with(s, |rest| {
            if rest.starts_with('.') {
                Some((PLAYED_THROUGH_MARKER, 1))
            } else {
                self.read_next(rest, true)
            }
        })
    }

    // lowercase labels are designated blanks, "." and " " are empty squares.
    pub fn read_board_row(&self, s: &str) -> error::Returns<Vec<u8>> {
        self.read_with(s, |rest| {
            if rest.starts_with('.') || rest.starts_with(' ') {
                Some((EMPTY_SQUARE, 1))
            } else {
                self.read_next(rest, true)
            }
        })
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter()
            .map(|&tile| self.from_rack(tile).unwrap_or("!"))
            .collect()
    }

    pub fn fmt_board(&self, tiles: &[u8]) -> String {
        tiles
            .iter()
            .map(|&tile| self.from_board(tile).unwrap_or("."))
            .collect()
    }

    // letters set in a cross-set, in alphabet order.
    pub fn fmt_cross_set(&self, bits: u64) -> String {
        (1..self.len())
            .filter(|&tile| bits & (1 << tile) != 0)
            .map(|tile| self.get(tile).label.as_str())
            .collect()
    }
}

// label, freq, score, is_vowel. blank labels are lowercase labels.
fn make_alphabet(letters: &[(&str, u8, i8, bool)], num_blanks: u8) -> Alphabet {
    let mut tiles = Vec::with_capacity(letters.len() + 1);
    tiles.push(Tile::new("?", "?", num_blanks, 0, false));
    for &(label, freq, score, is_vowel) in letters {
        tiles.push(Tile::new(label, &label.to_lowercase(), freq, score, is_vowel));
    }
    match Alphabet::new(tiles) {
        Ok(alphabet) => alphabet,
        Err(e) => panic!("built-in alphabet is malformed: {e}"),
    }
}

pub fn make_english_alphabet() -> Alphabet {
    make_alphabet(
        &[
            ("A", 9, 1, true),
            ("B", 2, 3, false),
            ("C", 2, 3, false),
            ("D", 4, 2, false),
            ("E", 12, 1, true),
            ("F", 2, 4, false),
            ("G", 3, 2, false),
            ("H", 2, 4, false),
            ("I", 9, 1, true),
            ("J", 1, 8, false),
            ("K", 1, 5, false),
            ("L", 4, 1, false),
            ("M", 2, 3, false),
            ("N", 6, 1, false),
            ("O", 8, 1, true),
            ("P", 2, 3, false),
            ("Q", 1, 10, false),
            ("R", 6, 1, false),
            ("S", 4, 1, false),
            ("T", 6, 1, false),
            ("U", 4, 1, true),
            ("V", 2, 4, false),
            ("W", 2, 4, false),
            ("X", 1, 8, false),
            ("Y", 2, 4, false),
            ("Z", 1, 10, false),
        ],
        2,
    )
}

pub fn make_polish_alphabet() -> Alphabet {
    make_alphabet(
        &[
            ("A", 9, 1, true),
            ("Ą", 1, 5, true),
            ("B", 2, 3, false),
            ("C", 3, 2, false),
            ("Ć", 1, 6, false),
            ("D", 3, 2, false),
            ("E", 7, 1, true),
            ("Ę", 1, 5, true),
            ("F", 1, 5, false),
            ("G", 2, 3, false),
            ("H", 2, 3, false),
            ("I", 8, 1, true),
            ("J", 2, 3, false),
            ("K", 3, 2, false),
            ("L", 3, 2, false),
            ("Ł", 2, 3, false),
            ("M", 3, 2, false),
            ("N", 5, 1, false),
            ("Ń", 1, 7, false),
            ("O", 6, 1, true),
            ("Ó", 1, 5, true),
            ("P", 3, 2, false),
            ("R", 4, 1, false),
            ("S", 4, 1, false),
            ("Ś", 1, 5, false),
            ("T", 3, 2, false),
            ("U", 2, 3, true),
            ("W", 4, 1, false),
            ("Y", 4, 2, true),
            ("Z", 5, 1, false),
            ("Ź", 1, 9, false),
            ("Ż", 1, 5, false),
        ],
        2,
    )
}
