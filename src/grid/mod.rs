//! The playing field: a fixed array of cell states and its pixel layout.

use bevy::prelude::*;

use crate::game::{CellState, EMPTY_CELL_COLOR, FOOD_COLOR, Position};
use crate::rendering::Surface;

/// Fixed-size grid of [`CellState`]s, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-empty grid of `width x height` cells, each `cell_size` pixels square.
    pub fn new(width: usize, height: usize, cell_size: u32) -> Self {
        Grid {
            width,
            height,
            cell_size,
            cells: vec![CellState::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at `(x, y)`.
    ///
    /// Panics when the coordinate lies outside the grid.
    pub fn at(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Mutable access to the cell at `(x, y)`.
    ///
    /// Panics when the coordinate lies outside the grid.
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut CellState {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    /// Whether `pos` addresses a cell of this grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// State of the cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.contains(pos)
            .then(|| self.at(pos.x as usize, pos.y as usize))
    }

    /// Pixel rectangle of cell `(x, y)`, origin at the top-left corner of the window.
    pub fn cell_rect(&self, x: i32, y: i32) -> Rect {
        let size = self.cell_size as f32;
        let min = Vec2::new(x as f32 * size, y as f32 * size);
        Rect::from_corners(min, min + Vec2::splat(size))
    }

    /// Positions of every cell currently holding food.
    #[cfg(test)]
    pub fn food_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == CellState::Food)
            .map(|(index, _)| {
                Position::new((index % self.width) as i32, (index / self.width) as i32)
            })
    }

    /// Paints every cell with its state's color.
    pub fn draw(&self, surface: &mut impl Surface) {
        for y in 0..self.height {
            for x in 0..self.width {
                surface.fill_rect(self.cell_rect(x as i32, y as i32), color(self.at(x, y)));
            }
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        x + y * self.width
    }
}

/// Fill color of a cell state.
pub fn color(state: CellState) -> Color {
    match state {
        CellState::Empty => EMPTY_CELL_COLOR,
        CellState::Food => FOOD_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::RecordingSurface;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3, 10);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.at(x, y), CellState::Empty);
            }
        }
        assert_eq!(grid.food_cells().count(), 0);
    }

    #[test]
    fn at_mut_writes_a_single_cell() {
        let mut grid = Grid::new(4, 3, 10);
        *grid.at_mut(3, 2) = CellState::Food;
        assert_eq!(grid.at(3, 2), CellState::Food);
        assert_eq!(grid.at(2, 2), CellState::Empty);
        assert_eq!(grid.food_cells().collect::<Vec<_>>(), vec![Position::new(3, 2)]);
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn at_panics_past_the_last_column() {
        let grid = Grid::new(4, 3, 10);
        grid.at(4, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn at_mut_panics_past_the_last_row() {
        let mut grid = Grid::new(4, 3, 10);
        grid.at_mut(0, 3);
    }

    #[test]
    fn contains_and_get_respect_bounds() {
        let grid = Grid::new(4, 3, 10);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(3, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(4, 0)));
        assert!(!grid.contains(Position::new(0, 3)));
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(grid.get(Position::new(1, 1)), Some(CellState::Empty));
    }

    #[test]
    fn cell_rect_scales_by_cell_size() {
        let grid = Grid::new(40, 40, 20);
        let rect = grid.cell_rect(3, 7);
        assert_eq!(rect.min, Vec2::new(60.0, 140.0));
        assert_eq!(rect.size(), Vec2::splat(20.0));
    }

    #[test]
    fn draw_paints_every_cell_once() {
        let mut grid = Grid::new(3, 2, 5);
        *grid.at_mut(1, 1) = CellState::Food;

        let mut surface = RecordingSurface::default();
        grid.draw(&mut surface);

        assert_eq!(surface.fills.len(), 6);
        let food: Vec<_> = surface
            .fills
            .iter()
            .filter(|(_, color)| *color == FOOD_COLOR)
            .collect();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].0, grid.cell_rect(1, 1));
    }

    #[test]
    fn colors_follow_cell_state() {
        assert_eq!(color(CellState::Empty), EMPTY_CELL_COLOR);
        assert_eq!(color(CellState::Food), FOOD_COLOR);
    }
}
