use super::{Point, Rgb};

/// Position of a site in insertion order. The first site added is `SiteId(0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteId(pub usize);

impl SiteId {
  pub fn usize(self) -> usize {
    self.0
  }
}

/// A user-placed point and the color of the region it generates.
///
/// Sites are immutable once created. Coordinates are in canvas pixel space and
/// are not checked against any canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site<T> {
  position: Point<T>,
  color: Rgb,
}

impl<T> Site<T> {
  pub fn new(position: Point<T>, color: Rgb) -> Site<T> {
    Site { position, color }
  }

  pub fn position(&self) -> &Point<T> {
    &self.position
  }

  pub fn color(&self) -> Rgb {
    self.color
  }
}
