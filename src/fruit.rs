use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Fruit currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    /// Creates a fruit at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns a fruit uniformly on the open grid interior.
    ///
    /// Row and column are each drawn from `1..=dim-2`, so a fruit never sits
    /// on the wall ring. The cell is NOT checked against the snake body: a
    /// fruit may appear under a segment and becomes reachable again as the
    /// tail vacates the cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        let row = rng.gen_range(1..i32::from(grid.height) - 1);
        let col = rng.gen_range(1..i32::from(grid.width) - 1);

        Self::at(Position { row, col })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;

    use super::Fruit;

    #[test]
    fn fruit_always_spawns_on_the_interior() {
        let grid = GridSize {
            width: 8,
            height: 6,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let fruit = Fruit::spawn(&mut rng, grid);
            assert!(fruit.position.is_interior(grid), "{:?}", fruit.position);
        }
    }

    #[test]
    fn smallest_grid_has_a_single_spawn_cell_ring() {
        // 5x5 grid: interior rows and columns are 1..=3.
        let grid = GridSize {
            width: 5,
            height: 5,
        };
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let fruit = Fruit::spawn(&mut rng, grid);
            assert!((1..=3).contains(&fruit.position.row));
            assert!((1..=3).contains(&fruit.position.col));
        }
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let grid = GridSize {
            width: 30,
            height: 20,
        };

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Fruit::spawn(&mut a, grid), Fruit::spawn(&mut b, grid));
        }
    }
}
