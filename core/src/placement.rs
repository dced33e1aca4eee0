use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;

use crate::*;

pub trait HazardPlacer {
    fn place(self, config: GridConfig) -> HazardLayout;
}

/// Uniform placement: shuffles every coordinate of the grid and takes the first
/// `effective_hazards` of them, so the exact count is reached in one pass.
#[derive(Debug)]
pub struct ShufflePlacer<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ShufflePlacer<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> HazardPlacer for ShufflePlacer<'_, R> {
    fn place(self, config: GridConfig) -> HazardLayout {
        use rand::seq::SliceRandom;

        let hazards = config.effective_hazards();
        if hazards < config.hazards {
            log::warn!(
                "Too many hazards for a {}x{} grid, requested {} but only placing {}",
                config.size.0,
                config.size.1,
                config.hazards,
                hazards
            );
        }

        let (size_x, size_y) = config.size;
        let mut positions: Vec<Coord2> = (0..size_y)
            .flat_map(|y| (0..size_x).map(move |x| (x, y)))
            .collect();
        positions.shuffle(self.rng);

        let mut hazard_mask: Array2<bool> = Array2::default(ix(config.size));
        for &coords in positions.iter().take(hazards as usize) {
            hazard_mask[ix(coords)] = true;
        }

        log::debug!(
            "Placed {} hazards on a {}x{} grid",
            hazards,
            size_x,
            size_y
        );
        HazardLayout::from_parts(hazard_mask, hazards)
    }
}

/// Shuffle placement driven by a `SmallRng` seeded from `seed`, so a seed fully
/// determines the layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeededPlacer {
    seed: u64,
}

impl SeededPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HazardPlacer for SeededPlacer {
    fn place(self, config: GridConfig) -> HazardLayout {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        ShufflePlacer::new(&mut rng).place(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn count(layout: &HazardLayout) -> CellCount {
        let (size_x, size_y) = layout.size();
        let mut count = 0;
        for x in 0..size_x {
            for y in 0..size_y {
                if layout[(x, y)] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn places_exact_count_up_to_cap() {
        let sizes = [(1, 1), (2, 1), (3, 3), (4, 7), (9, 9), (16, 30)];
        let requests = [0, 1, 5, 10, 40, 1000];
        let mut rng = SmallRng::seed_from_u64(7);

        for size in sizes {
            for requested in requests {
                let config = GridConfig::new(size, requested);
                let layout = ShufflePlacer::new(&mut rng).place(config);

                let expected = requested.min(max_hazards(size));
                assert_eq!(layout.hazard_count(), expected, "{size:?} {requested}");
                assert_eq!(count(&layout), expected, "{size:?} {requested}");
            }
        }
    }

    #[test]
    fn three_by_three_with_five_requested_has_four_safe_cells() {
        for seed in 0..32 {
            let layout = SeededPlacer::new(seed).place(GridConfig::new((3, 3), 5));

            assert_eq!(count(&layout), 5);
            assert_eq!(layout.safe_cell_count(), 4);
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GridConfig::new((8, 8), 10);

        assert_eq!(
            SeededPlacer::new(42).place(config),
            SeededPlacer::new(42).place(config)
        );
    }

    #[test]
    fn every_cell_can_receive_a_hazard() {
        let config = GridConfig::new((3, 3), 1);
        let mut seen = [[false; 3]; 3];

        for seed in 0..256 {
            let layout = SeededPlacer::new(seed).place(config);
            for x in 0..3 {
                for y in 0..3 {
                    seen[x as usize][y as usize] |= layout[(x, y)];
                }
            }
        }

        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}
