//! The toroidal playfield: cells, headings and the mapping onto the
//! 640x480 logical canvas.

use Direction::*;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Cell { col, row }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Pixel-space rectangle on the logical canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridWorld {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        GridWorld { width, height, cell_size }
    }

    /// 32x24 cells of 20 units each.
    pub fn standard() -> Self {
        Self::new(SCREEN_WIDTH / CELL_SIZE, SCREEN_HEIGHT / CELL_SIZE, CELL_SIZE)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            (cell.col + dx).rem_euclid(self.width),
            (cell.row + dy).rem_euclid(self.height),
        )
    }

    pub fn cell_to_pixel_rect(&self, cell: Cell) -> Rect {
        Rect {
            x: cell.col * self.cell_size,
            y: cell.row * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Row-major enumeration of every cell.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let grid = GridWorld::standard();
        assert_eq!(grid.width(), 32);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.center(), Cell::new(16, 12));
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn test_wrap_stays_in_bounds() {
        let grid = GridWorld::new(5, 4, 20);
        for cell in grid.all_cells() {
            for dir in Direction::ALL.iter() {
                assert!(grid.contains(grid.wrap(cell, *dir)));
            }
        }
    }

    #[test]
    fn test_wrap_edges() {
        let grid = GridWorld::standard();
        assert_eq!(grid.wrap(Cell::new(31, 5), Right), Cell::new(0, 5));
        assert_eq!(grid.wrap(Cell::new(0, 5), Left), Cell::new(31, 5));
        assert_eq!(grid.wrap(Cell::new(7, 0), Up), Cell::new(7, 23));
        assert_eq!(grid.wrap(Cell::new(7, 23), Down), Cell::new(7, 0));
        assert_eq!(grid.wrap(Cell::new(7, 7), Down), Cell::new(7, 8));
    }

    #[test]
    fn test_opposites() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_cell_to_pixel_rect() {
        let grid = GridWorld::standard();
        let rect = grid.cell_to_pixel_rect(Cell::new(3, 2));
        assert_eq!(rect, Rect { x: 60, y: 40, width: 20, height: 20 });
    }

    #[test]
    fn test_all_cells_row_major() {
        let grid = GridWorld::new(3, 2, 20);
        let cells: Vec<Cell> = grid.all_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert_eq!(cells[5], Cell::new(2, 1));
    }
}
