use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Where the hazards of a grid are, independent of any play state.
/// Only built through [`HazardPlacer`] or [`HazardLayout::from_hazard_coords`], so
/// `hazard_count` always matches the mask and respects the cap.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HazardLayout {
    hazard_mask: Array2<bool>,
    hazard_count: CellCount,
}

impl HazardLayout {
    pub(crate) fn from_parts(hazard_mask: Array2<bool>, hazard_count: CellCount) -> Self {
        Self {
            hazard_mask,
            hazard_count,
        }
    }

    /// Builds a layout from explicit hazard positions. Duplicate positions count once.
    pub fn from_hazard_coords(size: Coord2, hazard_coords: &[Coord2]) -> Result<Self> {
        let size = GridConfig::new(size, 0).size;
        let mut hazard_mask: Array2<bool> = Array2::default(ix(size));

        for &coords in hazard_coords {
            if !in_bounds(coords, size) {
                return Err(GridError::InvalidCoords);
            }
            hazard_mask[ix(coords)] = true;
        }

        let hazard_count = hazard_mask.iter().filter(|&&hazard| hazard).count() as CellCount;
        let max = max_hazards(size);
        if hazard_count > max {
            return Err(GridError::TooManyHazards {
                requested: hazard_count,
                max,
            });
        }

        Ok(Self::from_parts(hazard_mask, hazard_count))
    }

    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.hazard_mask.dim();
        (dim_x as Coord, dim_y as Coord)
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    fn total_cells(&self) -> CellCount {
        self.hazard_mask.len() as CellCount
    }

    pub fn adjacent_hazard_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for HazardLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.hazard_mask[ix(coords)]
    }
}
