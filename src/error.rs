// Copyright (C) 2020-2024 Andy Kurnia.

// Contract violations inside the core (indexing off the grid) still panic.
// Everything a caller can get wrong with data comes back as one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Invalid(String),

    #[error("invalid tile after {parsed:?} in {input:?}")]
    InvalidTile { parsed: String, input: String },

    #[error("square ({row}, {col}) is outside the {dim}x{dim} board")]
    OutOfRange { row: i16, col: i16, dim: i8 },

    #[error("tried to draw {requested} tiles, tile bag has {remaining}")]
    BagUnderflow { requested: usize, remaining: usize },

    #[error("cannot remove the tiles {0} from the bag, as they are not in the bag")]
    TilesNotInBag(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Returns<T> = Result<T, Error>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::Error::Invalid($error).into());
    };
}
