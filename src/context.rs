use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::grid::GridWorld;
use crate::term::TermManager;

/// Everything the loop needs from the outside world, built once at startup.
pub struct GameContext {
    pub grid: GridWorld,
    pub term: TermManager,
    pub clock: FrameClock,
}

impl GameContext {
    pub fn new(grid: GridWorld, ticks_per_second: u32) -> Result<Self> {
        let term = TermManager::new(&grid)?;
        Ok(GameContext { grid, term, clock: FrameClock::new(ticks_per_second) })
    }
}

/// Fixed-rate clock: `wait` blocks until the next tick boundary.
pub struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);
        FrameClock { period, next_tick: Instant::now() + period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            sleep(self.next_tick - now);
            self.next_tick += self.period;
        } else {
            // Fell behind, don't try to catch up with a burst of ticks
            self.next_tick = now + self.period;
        }
    }
}
