// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Discrete nearest-site diagrams.
//!
//! Sites are 2D points with a color. Rendering partitions a canvas into
//! square cells and paints every cell with the color of the site closest to
//! the cell's top-left corner:
//!
//! ```
//! use tapvoronoi::data::{Point, Rgb};
//! use tapvoronoi::SiteDiagram;
//!
//! let mut diagram = SiteDiagram::new();
//! diagram.add_site(Point::new([0.0_f32, 50.0]), Rgb::RED);
//! diagram.add_site(Point::new([100.0, 50.0]), Rgb::BLUE);
//!
//! let grid = diagram.render(100, 100, 10).unwrap();
//! assert_eq!(grid.len(), 100);
//! assert_eq!(grid.color_at(Point::new([20, 0])), Some(Rgb::RED));
//! assert_eq!(grid.color_at(Point::new([80, 90])), Some(Rgb::BLUE));
//! ```
//!
//! The sweep is the naive one: every cell is compared against every site, so
//! a render costs O(cells × sites). Hosts with large canvases or many sites
//! should bucket sites spatially before reaching for this crate.

pub mod algorithms;
mod cache;
pub mod data;
mod diagram;
pub mod marker;
pub mod raster;

pub use cache::CachedDiagram;
pub use diagram::{DiagramState, SiteDiagram, DEFAULT_CELL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Canvas width, canvas height or cell size is not strictly positive.
  InvalidDimensions,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidDimensions => write!(
        f,
        "Canvas width, height and cell size must be strictly positive"
      ),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
