#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use grid::*;
pub use layout::*;
pub use placement::*;
pub use types::*;

mod cell;
mod error;
mod grid;
mod layout;
mod placement;
mod types;

/// Hazards may occupy at most `5/9` of the cells.
const HAZARD_CAP_NUMERATOR: u64 = 5;
const HAZARD_CAP_DENOMINATOR: u64 = 9;

/// Largest hazard count a grid of `size` accepts: `floor(width * height * 5 / 9)`.
pub const fn max_hazards(size: Coord2) -> CellCount {
    let total = cell_total(size) as u64;
    (total * HAZARD_CAP_NUMERATOR / HAZARD_CAP_DENOMINATOR) as CellCount
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    /// Requested hazard count, before the cap is applied.
    pub hazards: CellCount,
}

impl GridConfig {
    const fn new_unchecked(size: Coord2, hazards: CellCount) -> Self {
        Self { size, hazards }
    }

    pub fn new(size: Coord2, hazards: CellCount) -> Self {
        let clamped = (size.0.max(1), size.1.max(1));
        if clamped != size {
            log::warn!("Grid size {:?} has an empty axis, using {:?}", size, clamped);
        }
        Self::new_unchecked(clamped, hazards)
    }

    /// Number of hazards that will actually be placed.
    pub const fn effective_hazards(&self) -> CellCount {
        let max = max_hazards(self.size);
        if self.hazards < max { self.hazards } else { max }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHazard,
}

impl RevealOutcome {
    pub const fn hit_hazard(self) -> bool {
        matches!(self, Self::HitHazard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_five_ninths_rounded_down() {
        assert_eq!(max_hazards((3, 3)), 5);
        assert_eq!(max_hazards((1, 1)), 0);
        assert_eq!(max_hazards((2, 1)), 1);
        assert_eq!(max_hazards((10, 10)), 55);
    }

    #[test]
    fn effective_hazards_takes_the_smaller_value() {
        assert_eq!(GridConfig::new((3, 3), 5).effective_hazards(), 5);
        assert_eq!(GridConfig::new((3, 3), 9).effective_hazards(), 5);
        assert_eq!(GridConfig::new((10, 10), 12).effective_hazards(), 12);
    }

    #[test]
    fn cap_does_not_overflow_on_largest_grid() {
        let size = (Coord::MAX, Coord::MAX);
        let expected = (cell_total(size) as u64 * 5 / 9) as CellCount;

        assert_eq!(max_hazards(size), expected);
    }

    #[test]
    fn empty_axis_is_clamped() {
        assert_eq!(GridConfig::new((0, 4), 1).size, (1, 4));
    }

    #[test]
    fn only_hazard_outcome_signals_hit() {
        assert!(RevealOutcome::HitHazard.hit_hazard());
        assert!(!RevealOutcome::Revealed.hit_hazard());
        assert!(!RevealOutcome::NoChange.hit_hazard());
    }
}
