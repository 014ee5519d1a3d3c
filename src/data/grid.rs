use claims::debug_assert_ok;

use super::{Canvas, Point, Rgb};

/// One square cell of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
  pub origin: Point<i32>,
  pub color: Rgb,
}

impl Cell {
  /// `[left, top, right, bottom]` of the cell. Cells on the right and bottom
  /// edges may extend past the canvas; clipping is up to the caller.
  pub fn rect(&self, cell_size: i32) -> [i32; 4] {
    let [x, y] = self.origin.array;
    [x, y, x.saturating_add(cell_size), y.saturating_add(cell_size)]
  }
}

/// The (cell origin, color) pairs produced by one render, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
  canvas: Canvas,
  cells: Vec<Cell>,
}

impl Grid {
  pub(crate) fn new(canvas: Canvas, cells: Vec<Cell>) -> Grid {
    debug_assert_ok!(canvas.validate());
    debug_assert!(cells.is_empty() || cells.len() == canvas.cell_count());
    Grid { canvas, cells }
  }

  pub(crate) fn empty(canvas: Canvas) -> Grid {
    Grid {
      canvas,
      cells: Vec::new(),
    }
  }

  pub fn canvas(&self) -> &Canvas {
    &self.canvas
  }

  pub fn cell_size(&self) -> i32 {
    self.canvas.cell_size()
  }

  pub fn cells(&self) -> &[Cell] {
    &self.cells
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
    self.cells.iter()
  }

  /// Color of the cell containing `pixel`, or `None` if the pixel lies outside
  /// the canvas or the grid is empty.
  pub fn color_at(&self, pixel: Point<i32>) -> Option<Rgb> {
    let [x, y] = pixel.array;
    if x < 0 || y < 0 || x >= self.canvas.width() || y >= self.canvas.height() {
      return None;
    }
    let cell_size = self.canvas.cell_size();
    let column = (x / cell_size) as usize;
    let row = (y / cell_size) as usize;
    self
      .cells
      .get(column * self.canvas.rows() + row)
      .map(|cell| cell.color)
  }
}

impl<'a> IntoIterator for &'a Grid {
  type Item = &'a Cell;
  type IntoIter = std::slice::Iter<'a, Cell>;
  fn into_iter(self) -> Self::IntoIter {
    self.cells.iter()
  }
}

impl IntoIterator for Grid {
  type Item = Cell;
  type IntoIter = std::vec::IntoIter<Cell>;
  fn into_iter(self) -> Self::IntoIter {
    self.cells.into_iter()
  }
}
