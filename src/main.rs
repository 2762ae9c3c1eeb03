mod context;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::KeyEvent;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use context::GameContext;
use game::{CollisionPolicy, Game};
use grid::GridWorld;
use render::Canvas;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wraparound grid, in the terminal")]
struct Cli {
    /// Simulation ticks per second
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    speed: u32,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// What running into the snake's own body does
    #[arg(long, value_enum, default_value = "reset")]
    on_collision: OnCollision,
}

#[derive(Clone, ValueEnum)]
enum OnCollision {
    /// Snap back to the starting cell and keep playing
    Reset,
    /// End the run
    GameOver,
}

impl From<OnCollision> for CollisionPolicy {
    fn from(value: OnCollision) -> Self {
        match value {
            OnCollision::Reset => CollisionPolicy::Reset,
            OnCollision::GameOver => CollisionPolicy::GameOver,
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ctx = GameContext::new(GridWorld::standard(), cli.speed)?;
    let mut game = Game::new(ctx.grid, cli.on_collision.into(), rng);

    info!("starting at {} ticks/s, period {:?}", cli.speed, ctx.clock.period());

    let result = ctx.term.setup().and_then(|()| run(&mut ctx, &mut game));
    let restored = ctx.term.restore();

    info!("exiting with score {}", game.score());
    keep_loop_error(result, restored)
}

// Restoring the terminal is best effort; the loop's own outcome wins
fn keep_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = restored {
        warn!("failed to restore the terminal: {:#}", err);
    }
    result
}

fn run(ctx: &mut GameContext, game: &mut Game) -> Result<()> {
    while !game.is_terminated() {
        let keys = ctx.term.read_key_events_queue()?;
        frame(game, &keys, &mut ctx.term)?;
        ctx.clock.wait();
    }

    Ok(())
}

/// One tick: apply queued keys, advance, draw. Skips the draw once terminated.
fn frame(game: &mut Game, keys: &[KeyEvent], canvas: &mut dyn Canvas) -> Result<()> {
    for key in keys {
        if let Some(command) = input::command_for(key) {
            game.handle(command);
        }
    }

    if game.is_terminated() {
        return Ok(());
    }

    game.tick();
    render::render(game, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyModifiers};
    use game::GameState;
    use grid::{Cell, Direction};
    use render::recorder::Recorder;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    fn new_game() -> Game {
        Game::new(GridWorld::standard(), CollisionPolicy::Reset, StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_keys_apply_before_the_tick() {
        let mut game = new_game();
        let mut canvas = Recorder::default();

        frame(&mut game, &[key(KeyCode::Down)], &mut canvas).unwrap();
        assert_eq!(game.snake().direction(), Direction::Down);
        assert_eq!(game.snake().head(), Cell::new(16, 13));
        assert_eq!(canvas.frames(), 1);
    }

    #[test]
    fn test_frame_without_keys_advances() {
        let mut game = new_game();
        let mut canvas = Recorder::default();

        frame(&mut game, &[], &mut canvas).unwrap();
        frame(&mut game, &[], &mut canvas).unwrap();
        assert_eq!(game.snake().head().row, 12);
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn test_terminate_skips_the_render() {
        let mut game = new_game();
        let mut canvas = Recorder::default();
        let head = game.snake().head();

        frame(&mut game, &[key(KeyCode::Char('q'))], &mut canvas).unwrap();
        assert!(game.is_terminated());
        assert_eq!(game.snake().head(), head);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_game_over_frame_does_not_advance() {
        let mut game = new_game();
        let mut canvas = Recorder::default();

        frame(&mut game, &[key(KeyCode::Esc)], &mut canvas).unwrap();
        let head = game.snake().head();
        frame(&mut game, &[key(KeyCode::Up)], &mut canvas).unwrap();

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.snake().head(), head);
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn test_restore_failure_keeps_loop_error() {
        let result = keep_loop_error(Err(anyhow!("loop broke")), Err(anyhow!("restore broke")));
        assert_eq!(result.unwrap_err().to_string(), "loop broke");

        assert!(keep_loop_error(Ok(()), Err(anyhow!("restore broke"))).is_ok());
        assert!(keep_loop_error(Err(anyhow!("loop broke")), Ok(())).is_err());
    }
}
