use log::{debug, info, trace};
use rand::rngs::StdRng;

use crate::food::{Food, Placement};
use crate::grid::{Cell, Direction, GridWorld};
use crate::snake::Snake;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
    /// The snake filled the grid.
    Won,
    Terminated,
}

/// What a self-collision does to the run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Snap the snake back to its starting cell and keep playing.
    Reset,
    GameOver,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Restart,
    Terminate,
}

pub struct Game {
    grid: GridWorld,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    on_collision: CollisionPolicy,
    rng: StdRng,
}

impl Game {
    pub fn new(grid: GridWorld, on_collision: CollisionPolicy, mut rng: StdRng) -> Self {
        let snake = Snake::new(&grid);
        let food = Food::new(&grid, &occupied_cells(&snake), &mut rng);

        Game { grid, snake, food, score: 0, state: GameState::Playing, on_collision, rng }
    }

    pub fn handle(&mut self, command: Command) {
        match (self.state, command) {
            (_, Command::Terminate) => self.transition(GameState::Terminated),
            (GameState::Playing, Command::Turn(dir)) => {
                if self.snake.set_pending_direction(dir) {
                    debug!("turn {:?} queued", dir);
                }
            }
            (GameState::Playing, Command::Quit) => self.transition(GameState::GameOver),
            (GameState::GameOver, Command::Restart) | (GameState::Won, Command::Restart) => self.restart(),
            _ => {}
        }
    }

    /// Advances the simulation by one tick. Does nothing outside of `Playing`.
    pub fn tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        self.snake.step(&self.grid);
        trace!("head at {:?}", self.snake.head());

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.score += 1;
            debug!("food eaten, score {} length {}", self.score, self.snake.len());

            let placement = self.food.relocate(&self.grid, &occupied_cells(&self.snake), &mut self.rng);
            if placement == Placement::Fallback {
                self.transition(GameState::Won);
                return;
            }
        }

        if self.snake.collides_with_self() {
            match self.on_collision {
                CollisionPolicy::Reset => {
                    info!("snake hit itself at {:?}, resetting", self.snake.head());
                    self.snake.reset(&self.grid);
                    if self.snake.occupies(self.food.position()) {
                        self.food.relocate(&self.grid, &occupied_cells(&self.snake), &mut self.rng);
                    }
                }
                CollisionPolicy::GameOver => self.transition(GameState::GameOver),
            }
        }
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == GameState::Terminated
    }

    ///////////////////////////////////////////////////////////////////////////

    fn restart(&mut self) {
        self.snake.reset(&self.grid);
        self.food.relocate(&self.grid, &occupied_cells(&self.snake), &mut self.rng);
        self.score = 0;
        self.transition(GameState::Playing);
    }

    fn transition(&mut self, next: GameState) {
        info!("{:?} -> {:?} (score {})", self.state, next, self.score);
        self.state = next;
    }
}

fn occupied_cells(snake: &Snake) -> Vec<Cell> {
    snake.segments().copied().collect()
}
