use std::io::{stdout, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{debug, trace, warn};

use crate::grid::{GridWorld, Rect};
use crate::render::{Canvas, BACKGROUND_COLOR};

// Terminal characters are roughly twice as tall as wide
const COLUMNS_PER_CELL: usize = 2;
const CELL_GLYPH: [char; COLUMNS_PER_CELL] = ['[', ']'];
const STATUS_COLOR: Color = Color::Grey;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Glyph {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Glyph = Glyph { ch: ' ', fg: Color::Reset, bg: BACKGROUND_COLOR };

/// Display surface and input source backed by the controlling terminal.
pub struct TermManager {
    width: usize,
    height: usize,
    cell_size: i32,
    out: Box<dyn Write>,
    // What the next present() should show
    screen: Vec<Glyph>,
    // What is on the terminal right now
    drawn: Vec<Option<Glyph>>,
}

impl TermManager {
    pub fn new(grid: &GridWorld) -> Result<Self> {
        let width = grid.width() as usize * COLUMNS_PER_CELL;
        // One extra row for the status line
        let height = grid.height() as usize + 1;

        let (term_w, term_h) = terminal::size().context("Error reading terminal size")?;
        if (term_w as usize) < width || (term_h as usize) < height {
            bail!("terminal is {}x{}, the game needs at least {}x{}", term_w, term_h, width, height);
        }
        debug!("terminal {}x{}, playfield {}x{}", term_w, term_h, width, height);

        Ok(TermManager {
            width,
            height,
            cell_size: grid.cell_size(),
            out: Box::new(stdout()),
            screen: vec![BLANK; width * height],
            drawn: vec![None; width * height],
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.out, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.out, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Drains every key event that is already waiting, without blocking.
    /// A resize invalidates the screen so the next frame repaints it whole.
    pub fn read_key_events_queue(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling events")? {
            match read().context("Error reading event")? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(w, h) => {
                    if (w as usize) < self.width || (h as usize) < self.height {
                        warn!("terminal resized to {}x{}, the game needs {}x{}", w, h, self.width, self.height);
                    }
                    self.invalidate()?;
                }
                _ => {}
            }
        }

        Ok(events)
    }

    /// Forgets what the terminal shows; the next present() redraws every glyph.
    pub fn invalidate(&mut self) -> Result<()> {
        for glyph in self.drawn.iter_mut() {
            *glyph = None;
        }
        queue!(self.out, terminal::Clear(ClearType::All)).context("Error clearing")?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, col: usize, row: usize, glyph: Glyph) {
        if col < self.width && row < self.height {
            self.screen[self.width * row + col] = glyph;
        }
    }

    // Writes every glyph that differs from the terminal, returns how many
    fn flush_changes(&mut self) -> Result<usize> {
        let mut changed = 0;

        for (i, glyph) in self.screen.iter().enumerate() {
            if self.drawn[i] == Some(*glyph) {
                continue;
            }

            let (col, row) = ((i % self.width) as u16, (i / self.width) as u16);
            queue!(
                self.out,
                cursor::MoveTo(col, row),
                SetForegroundColor(glyph.fg),
                SetBackgroundColor(glyph.bg),
                Print(glyph.ch)
            )
            .context("Error queueing draw")?;

            self.drawn[i] = Some(*glyph);
            changed += 1;
        }

        self.out.flush().context("Error flushing")?;
        Ok(changed)
    }

    fn to_term(&self, x: i32, y: i32) -> (usize, usize) {
        let col = (x.max(0) / self.cell_size) as usize * COLUMNS_PER_CELL;
        let row = (y.max(0) / self.cell_size) as usize;
        (col, row)
    }
}

impl Canvas for TermManager {
    fn clear(&mut self, color: Color) {
        let blank = Glyph { bg: color, ..BLANK };
        for glyph in self.screen.iter_mut() {
            *glyph = blank;
        }
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color, border: Color) {
        let (left, top) = self.to_term(rect.x, rect.y);
        let (right, bottom) = self.to_term(rect.x + rect.width, rect.y + rect.height);

        for row in top..bottom {
            for col in left..right {
                let ch = CELL_GLYPH[(col - left) % COLUMNS_PER_CELL];
                self.put(col, row, Glyph { ch, fg: border, bg: fill });
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let (col, row) = self.to_term(x, y);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i, row, Glyph { ch, fg: color, bg: BACKGROUND_COLOR });
        }
    }

    fn draw_status(&mut self, text: &str) {
        let row = self.height - 1;
        for (col, ch) in text.chars().enumerate() {
            self.put(col, row, Glyph { ch, fg: STATUS_COLOR, bg: BACKGROUND_COLOR });
        }
    }

    fn present(&mut self) -> Result<()> {
        let changed = self.flush_changes()?;
        if changed > 0 {
            trace!("presented {} glyphs", changed);
        }
        Ok(())
    }
}
