use std::fmt;

use sapper_core::{CellView, Grid};

/// Text rendering of a grid, one row per line, cells separated by a space.
///
/// `.` hidden, `F` flagged, `*` revealed hazard, digits for revealed safe
/// cells and, when hazards are shown, `M` for hazards still covered.
pub struct BoardView<'a> {
    grid: &'a Grid,
    show_hazards: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(grid: &'a Grid, show_hazards: bool) -> Self {
        Self { grid, show_hazards }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write_symbol(f, cell.view(self.show_hazards))?;
                f.write_str(" ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_symbol(f: &mut fmt::Formatter<'_>, view: CellView) -> fmt::Result {
    use CellView::*;
    match view {
        Hidden => f.write_str("."),
        Flagged => f.write_str("F"),
        Revealed(count) => write!(f, "{count}"),
        Detonated => f.write_str("*"),
        Hazard => f.write_str("M"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::HazardLayout;

    fn grid(size: (u16, u16), hazards: &[(u16, u16)]) -> Grid {
        Grid::from_layout(HazardLayout::from_hazard_coords(size, hazards).unwrap())
    }

    #[test]
    fn fresh_board_is_all_placeholders() {
        let grid = grid((3, 2), &[(0, 0)]);

        assert_eq!(BoardView::new(&grid, false).to_string(), ". . . \n. . . \n");
    }

    #[test]
    fn shows_flags_counts_and_hazards() {
        let mut grid = grid((3, 2), &[(0, 0)]);
        grid.toggle_flag((1, 0));
        grid.reveal((1, 1));

        assert_eq!(BoardView::new(&grid, false).to_string(), ". F . \n. 1 . \n");
        assert_eq!(BoardView::new(&grid, true).to_string(), "M F . \n. 1 . \n");
    }

    #[test]
    fn revealed_hazard_and_zero_cells() {
        let mut grid = grid((3, 1), &[(0, 0)]);
        grid.reveal((2, 0));
        grid.reveal((0, 0));

        assert_eq!(BoardView::new(&grid, true).to_string(), "* 1 0 \n");
    }
}
