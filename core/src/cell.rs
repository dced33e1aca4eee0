use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// `adjacent_hazards` is only meaningful for safe cells; it stays 0 on hazards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) hazard: bool,
    pub(crate) adjacent_hazards: u8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new(hazard: bool, adjacent_hazards: u8) -> Self {
        Self {
            hazard,
            adjacent_hazards,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn is_hazard(self) -> bool {
        self.hazard
    }

    pub const fn adjacent_hazards(self) -> u8 {
        self.adjacent_hazards
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Player-visible projection of the cell.
    ///
    /// Hazards under unrevealed, unflagged cells are only exposed when
    /// `show_hazards` is set, e.g. for the end-of-game board.
    pub const fn view(self, show_hazards: bool) -> CellView {
        if self.revealed {
            if self.hazard {
                CellView::Detonated
            } else {
                CellView::Revealed(self.adjacent_hazards)
            }
        } else if self.flagged {
            CellView::Flagged
        } else if show_hazards && self.hazard {
            CellView::Hazard
        } else {
            CellView::Hidden
        }
    }
}

/// What a renderer is allowed to show for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Detonated,
    Hazard,
}
