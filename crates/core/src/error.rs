use thiserror::Error;

use crate::model::{RoundError, SequenceError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
