// Copyright (C) 2020-2024 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

#[derive(Clone, Debug)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout {
    // = tws, - dws, " tls, ' dls, space or . plain.
    // the star goes in the middle.
    pub fn from_rows(rows: &[&str]) -> error::Returns<BoardLayout> {
        let dim = rows.len();
        if dim == 0 || dim > i8::MAX as usize {
            return_error!(format!("board cannot have {} rows", dim));
        }
        let mut premiums = Vec::with_capacity(dim * dim);
        for (r, row) in rows.iter().enumerate() {
            let before = premiums.len();
            for c in row.chars() {
                premiums.push(match c {
                    '=' => TWS,
                    '-' => DWS,
                    '"' => TLS,
                    '\'' => DLS,
                    ' ' | '.' => FVS,
                    _ => {
                        return_error!(format!("invalid premium {:?} in row {}", c, r + 1));
                    }
                });
            }
            if premiums.len() - before != dim {
                return_error!(format!(
                    "row {} has {} squares, board must be {}x{}",
                    r + 1,
                    premiums.len() - before,
                    dim,
                    dim
                ));
            }
        }
        Ok(BoardLayout {
            premiums: premiums.into_boxed_slice(),
            dim: matrix::Dim {
                rows: dim as i8,
                cols: dim as i8,
            },
            star_row: (dim / 2) as i8,
            star_col: (dim / 2) as i8,
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }
}

pub static STANDARD_BOARD_ROWS: &[&str] = &[
    "=  '   =   '  =",
    " -   \"   \"   - ",
    "  -   ' '   -  ",
    "'  -   '   -  '",
    "    -     -    ",
    " \"   \"   \"   \" ",
    "  '   ' '   '  ",
    "=  '   -   '  =",
    "  '   ' '   '  ",
    " \"   \"   \"   \" ",
    "    -     -    ",
    "'  -   '   -  '",
    "  -   ' '   -  ",
    " -   \"   \"   - ",
    "=  '   =   '  =",
];

pub fn make_standard_board_layout() -> BoardLayout {
    match BoardLayout::from_rows(STANDARD_BOARD_ROWS) {
        Ok(board_layout) => board_layout,
        Err(e) => panic!("standard board layout is malformed: {e}"),
    }
}

// variants are named the way game histories name them.
pub fn board_layout_for_variant(variant: &str) -> error::Returns<BoardLayout> {
    match variant {
        "CrosswordGame" | "" => Ok(make_standard_board_layout()),
        _ => {
            return_error!(format!("unknown board variant {:?}", variant));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_expected_premiums() {
        let layout = make_standard_board_layout();
        assert_eq!(layout.dim(), matrix::Dim { rows: 15, cols: 15 });
        assert_eq!((layout.star_row(), layout.star_col()), (7, 7));
        assert_eq!(layout.premium_at(0, 0), TWS);
        assert_eq!(layout.premium_at(7, 7), DWS);
        assert_eq!(layout.premium_at(1, 5), TLS);
        assert_eq!(layout.premium_at(0, 3), DLS);
        assert_eq!(layout.premium_at(14, 11), DLS);
        assert_eq!(layout.premium_at(7, 8), FVS);
    }

    #[test]
    fn standard_layout_is_symmetric() {
        let layout = make_standard_board_layout();
        for r in 0..15 {
            for c in 0..15 {
                assert_eq!(layout.premium_at(r, c), layout.premium_at(c, r));
                assert_eq!(layout.premium_at(r, c), layout.premium_at(14 - r, c));
            }
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(BoardLayout::from_rows(&["=  ", "  "]).is_err());
        assert!(BoardLayout::from_rows(&["x"]).is_err());
        assert!(BoardLayout::from_rows(&[]).is_err());
    }

    #[test]
    fn looks_up_variants() {
        assert!(board_layout_for_variant("CrosswordGame").is_ok());
        assert!(board_layout_for_variant("Bogus").is_err());
    }
}
