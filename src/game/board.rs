pub type ColorId = usize;

/// One slot of the grid: a color and whether it is still in play.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    color: ColorId,
    alive: bool,
}

impl Cell {
    pub fn new(color: ColorId) -> Self {
        Self { color, alive: true }
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

// Row 0 is the top of the board
pub type Grid = Vec<Vec<Cell>>;

pub fn grid_from_colors(colors: &[Vec<ColorId>]) -> Grid {
    colors
        .iter()
        .map(|row| row.iter().map(|&color| Cell::new(color)).collect())
        .collect()
}

pub fn live_count(grid: &Grid, col: usize) -> usize {
    grid.iter().filter(|row| row[col].is_alive()).count()
}
