use log::warn;
use rand::{seq::IteratorRandom, Rng};

use crate::grid::{Cell, GridWorld};

const FALLBACK_CELL: Cell = Cell::new(0, 0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Placed,
    /// Every cell was occupied, the food sits on the fallback cell.
    Fallback,
}

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &GridWorld, occupied: &[Cell], rng: &mut R) -> Self {
        let mut food = Food { position: FALLBACK_CELL };
        food.relocate(grid, occupied, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &GridWorld, occupied: &[Cell], rng: &mut R) -> Placement {
        let free = grid.all_cells().filter(|cell| !occupied.contains(cell));

        match free.choose(rng) {
            Some(cell) => {
                self.position = cell;
                Placement::Placed
            }
            None => {
                warn!("no free cell left for food, falling back to {:?}", FALLBACK_CELL);
                self.position = FALLBACK_CELL;
                Placement::Fallback
            }
        }
    }
}
