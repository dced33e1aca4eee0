/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u16;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index for a cell; the first axis is `x`.
pub const fn ix((x, y): Coord2) -> [usize; 2] {
    [x as usize, y as usize]
}

/// Number of cells in a grid of `size`. Cannot overflow: `u16::MAX²` fits a `u32`.
pub const fn cell_total((size_x, size_y): Coord2) -> CellCount {
    size_x as CellCount * size_y as CellCount
}

pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Chebyshev-distance-1 neighborhood of `center`, clipped to a grid of `size`,
/// in row-major order.
pub fn neighbors((x, y): Coord2, (size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    let xs = x.saturating_sub(1)..=x.saturating_add(1).min(size_x.saturating_sub(1));
    let ys = y.saturating_sub(1)..=y.saturating_add(1).min(size_y.saturating_sub(1));

    ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
        .filter(move |&pos| pos != (x, y))
}
