//! A minimal software host: an RGB pixel buffer that paints a rendered
//! diagram the way the drawing app does (background, cells, then markers).
use num_traits::{AsPrimitive, Float};

use crate::data::{Grid, Rgb, Site};
use crate::marker::{markers, Disc, BACKGROUND};
use crate::{Error, SiteDiagram};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
  width: i32,
  height: i32,
  pixels: Vec<Rgb>,
}

impl Raster {
  /// A `width` × `height` buffer cleared to [`BACKGROUND`].
  pub fn new(width: i32, height: i32) -> Result<Raster, Error> {
    if width <= 0 || height <= 0 {
      return Err(Error::InvalidDimensions);
    }
    let len = (width as usize).saturating_mul(height as usize);
    Ok(Raster {
      width,
      height,
      pixels: vec![BACKGROUND; len],
    })
  }

  /// Renders `diagram` and paints it, with markers, onto a fresh buffer.
  pub fn draw<T>(
    diagram: &SiteDiagram<T>,
    width: i32,
    height: i32,
    cell_size: i32,
  ) -> Result<Raster, Error>
  where
    T: Float + AsPrimitive<f32> + 'static,
    i32: AsPrimitive<T>,
  {
    let grid = diagram.render(width, height, cell_size)?;
    let mut raster = Raster::new(width, height)?;
    raster.paint_grid(&grid);
    raster.paint_markers(diagram.sites());
    Ok(raster)
  }

  pub fn width(&self) -> i32 {
    self.width
  }

  pub fn height(&self) -> i32 {
    self.height
  }

  pub fn pixels(&self) -> &[Rgb] {
    &self.pixels
  }

  pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
    self.index(x, y).map(|idx| self.pixels[idx])
  }

  fn index(&self, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x >= self.width || y >= self.height {
      return None;
    }
    Some(y as usize * self.width as usize + x as usize)
  }

  /// Fills `[left, top, right, bottom)`, clipped to the buffer.
  pub fn fill_rect(&mut self, rect: [i32; 4], color: Rgb) {
    let [left, top, right, bottom] = rect;
    let (left, right) = (left.max(0), right.min(self.width));
    let (top, bottom) = (top.max(0), bottom.min(self.height));
    for y in top..bottom {
      let row = y as usize * self.width as usize;
      for x in left..right {
        self.pixels[row + x as usize] = color;
      }
    }
  }

  /// Fills every pixel whose centre lies within the disc.
  pub fn fill_disc<T>(&mut self, disc: &Disc<T>)
  where
    T: AsPrimitive<f32>,
  {
    let cx: f32 = disc.center.array[0].as_();
    let cy: f32 = disc.center.array[1].as_();
    let r = disc.radius;
    if !(cx.is_finite() && cy.is_finite()) {
      return;
    }
    let left = (cx - r).floor().max(0.0) as i32;
    let top = (cy - r).floor().max(0.0) as i32;
    let right = ((cx + r).ceil() as i32).min(self.width);
    let bottom = ((cy + r).ceil() as i32).min(self.height);
    for y in top..bottom {
      for x in left..right {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= r * r {
          let idx = y as usize * self.width as usize + x as usize;
          self.pixels[idx] = disc.color;
        }
      }
    }
  }

  pub fn paint_grid(&mut self, grid: &Grid) {
    let cell_size = grid.cell_size();
    for cell in grid {
      self.fill_rect(cell.rect(cell_size), cell.color);
    }
  }

  pub fn paint_markers<T>(&mut self, sites: &[Site<T>])
  where
    T: Copy + AsPrimitive<f32>,
  {
    for marker in markers(sites) {
      for disc in marker.discs().iter() {
        self.fill_disc(disc);
      }
    }
  }
}
