//! Projects the game onto a display surface. Nothing in here mutates the game.

use anyhow::Result;
use crossterm::style::Color;

use crate::food::Food;
use crate::game::{Game, GameState};
use crate::grid::{GridWorld, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::snake::Snake;

pub const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const TITLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const TEXT_COLOR: Color = Color::Rgb { r: 255, g: 255, b: 255 };

/// A surface laid out in logical canvas pixels.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, fill: Color, border: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
    /// Line below the playfield.
    fn draw_status(&mut self, text: &str);
    fn present(&mut self) -> Result<()>;
}

pub enum Renderable<'a> {
    Snake(&'a Snake),
    Food(&'a Food),
}

impl Renderable<'_> {
    fn draw(&self, grid: &GridWorld, canvas: &mut dyn Canvas) {
        match self {
            Renderable::Snake(snake) => {
                for cell in snake.segments() {
                    canvas.fill_rect(grid.cell_to_pixel_rect(*cell), SNAKE_COLOR, BORDER_COLOR);
                }
            }
            Renderable::Food(food) => {
                canvas.fill_rect(grid.cell_to_pixel_rect(food.position()), FOOD_COLOR, BORDER_COLOR);
            }
        }
    }
}

pub fn render(game: &Game, canvas: &mut dyn Canvas) -> Result<()> {
    canvas.clear(BACKGROUND_COLOR);

    match game.state() {
        GameState::Playing => {
            let grid = game.grid();
            for item in [Renderable::Snake(game.snake()), Renderable::Food(game.food())].iter() {
                item.draw(grid, canvas);
            }
            canvas.draw_status(&format!(
                "Score: {}  |  Arrows/WASD move  Esc end  Q/Ctrl+C quit",
                game.score()
            ));
        }
        GameState::GameOver => end_screen(canvas, "GAME OVER", game.score()),
        GameState::Won => end_screen(canvas, "YOU WON", game.score()),
        GameState::Terminated => {}
    }

    canvas.present()
}

fn end_screen(canvas: &mut dyn Canvas, title: &str, score: u32) {
    let x = SCREEN_WIDTH / 2 - 100;
    let y = SCREEN_HEIGHT / 2;

    canvas.draw_text(x, y - 20, title, TITLE_COLOR);
    canvas.draw_text(x, y + 20, "Press R to restart", TEXT_COLOR);
    canvas.draw_status(&format!("Final score: {}  |  R restart  Q/Ctrl+C quit", score));
}
