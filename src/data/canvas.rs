use super::Point;
use crate::Error;

/// Canvas extent and cell size for one render.
///
/// Constructed through [`Canvas::new`], which rejects any dimension that is
/// not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canvas {
  width: i32,
  height: i32,
  cell_size: i32,
}

impl Canvas {
  pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Canvas, Error> {
    let canvas = Canvas {
      width,
      height,
      cell_size,
    };
    canvas.validate()?;
    Ok(canvas)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.width <= 0 || self.height <= 0 || self.cell_size <= 0 {
      return Err(Error::InvalidDimensions);
    }
    Ok(())
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

  /// Number of cell columns, counting a partial trailing column.
  pub fn columns(&self) -> usize {
    ceil_div(self.width, self.cell_size)
  }

  /// Number of cell rows, counting a partial trailing row.
  pub fn rows(&self) -> usize {
    ceil_div(self.height, self.cell_size)
  }

  pub fn cell_count(&self) -> usize {
    self.columns().saturating_mul(self.rows())
  }

  /// Top-left corners of every cell, column by column: `x` is the outer loop
  /// and `y` the inner one.
  pub fn cell_origins(&self) -> CellOrigins {
    CellOrigins {
      canvas: *self,
      x: 0,
      y: 0,
    }
  }
}

fn ceil_div(len: i32, step: i32) -> usize {
  let len = len.max(0) as usize;
  let step = step.max(1) as usize;
  (len + step - 1) / step
}

#[derive(Debug, Clone)]
pub struct CellOrigins {
  canvas: Canvas,
  x: i32,
  y: i32,
}

impl Iterator for CellOrigins {
  type Item = Point<i32>;

  fn next(&mut self) -> Option<Point<i32>> {
    let Canvas {
      width,
      height,
      cell_size,
    } = self.canvas;
    if self.x >= width {
      return None;
    }
    let origin = Point::new([self.x, self.y]);
    match self.y.checked_add(cell_size).filter(|&y| y < height) {
      Some(y) => self.y = y,
      None => {
        self.y = 0;
        // Overflowing past i32::MAX means the last column was just emitted.
        self.x = self.x.checked_add(cell_size).unwrap_or(width);
      }
    }
    Some(origin)
  }
}
