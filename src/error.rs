use std::io;
use std::path::PathBuf;

use digit_num::DigitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumberListError {
    #[error(transparent)]
    Digit(#[from] DigitError),

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
