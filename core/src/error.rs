use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many hazards: layout has {requested} but the grid allows at most {max}")]
    TooManyHazards {
        requested: CellCount,
        max: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GridError>;
