use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::Rng;

use crate::*;

/// The playing field: owns every cell and performs all state transitions.
///
/// Loss is not stored. A reveal that uncovers a hazard reports
/// [`RevealOutcome::HitHazard`] and the caller ends the game.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    size: Coord2,
    hazard_count: CellCount,
    revealed_safe_count: CellCount,
    flagged_count: CellCount,
}

impl Grid {
    /// Builds a grid with hazards placed uniformly at random using `rng`.
    pub fn new<R: Rng + ?Sized>(config: GridConfig, rng: &mut R) -> Self {
        Self::from_layout(ShufflePlacer::new(rng).place(config))
    }

    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self::from_layout(SeededPlacer::new(seed).place(config))
    }

    pub fn from_layout(layout: HazardLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(ix(size), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if layout[coords] {
                Cell::new(true, 0)
            } else {
                Cell::new(false, layout.adjacent_hazard_count(coords))
            }
        });

        Self {
            cells,
            size,
            hazard_count: layout.hazard_count(),
            revealed_safe_count: 0,
            flagged_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        cell_total(self.size) - self.hazard_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.validate_coords(coords)
            .map(|coords| self.cells[ix(coords)])
    }

    pub fn view_at(&self, coords: Coord2, show_hazards: bool) -> Option<CellView> {
        self.cell_at(coords).map(|cell| cell.view(show_hazards))
    }

    pub fn is_hazard_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(Cell::is_hazard)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Option<Coord2> {
        in_bounds(coords, self.size).then_some(coords)
    }

    /// Toggles the flag on an unrevealed cell. Out-of-bounds and revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(coords) = self.validate_coords(coords) else {
            return MarkOutcome::NoChange;
        };

        let cell = &mut self.cells[ix(coords)];
        if cell.revealed {
            return MarkOutcome::NoChange;
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// Uncovers a cell, flooding outward through zero-count cells.
    ///
    /// Flags do not protect a cell: flagged cells are revealed like any other and
    /// lose their flag.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(coords) = self.validate_coords(coords) else {
            return RevealOutcome::NoChange;
        };
        if self.cells[ix(coords)].revealed {
            return RevealOutcome::NoChange;
        }

        let cell = self.uncover(coords);
        if cell.hazard {
            log::debug!("Hazard uncovered at {:?}", coords);
            return RevealOutcome::HitHazard;
        }

        if cell.adjacent_hazards == 0 {
            self.flood_from(coords);
        }
        RevealOutcome::Revealed
    }

    /// True once every safe cell is revealed. Hazards never count either way.
    pub fn check_win(&self) -> bool {
        self.revealed_safe_count == self.safe_cell_count()
    }

    /// Row-major iteration for rendering: `y` outer, `x` inner.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        let (size_x, size_y) = self.size;
        (0..size_y).map(move |y| (0..size_x).map(move |x| self.cells[ix((x, y))]))
    }

    fn flood_from(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.unrevealed_neighbors(origin).collect();
        let mut opened: CellCount = 1;

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.cells[ix(visit_coords)].revealed {
                continue;
            }

            let cell = self.uncover(visit_coords);
            debug_assert!(!cell.hazard, "flood fill reached a hazard");
            opened += 1;

            if cell.adjacent_hazards == 0 {
                to_visit.extend(self.unrevealed_neighbors(visit_coords));
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", origin, opened);
    }

    /// Marks a cell revealed and keeps the counters in step.
    fn uncover(&mut self, coords: Coord2) -> Cell {
        let cell = &mut self.cells[ix(coords)];
        cell.revealed = true;
        if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
        }
        if !cell.hazard {
            self.revealed_safe_count += 1;
        }
        *cell
    }

    fn unrevealed_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        neighbors(coords, self.size).filter(|&pos| !self.cells[ix(pos)].revealed)
    }
}
