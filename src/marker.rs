//! Site markers.
//!
//! After the cells are filled, every site is marked with two concentric discs
//! centred on its position: a black disc of radius 14 with a white disc of
//! radius 7 on top, leaving a black ring. Drawing them is up to the host; this
//! module only fixes the geometry and paint order.
use crate::data::{Point, Rgb, Site};

/// Color the canvas is cleared to before cells are painted.
pub const BACKGROUND: Rgb = Rgb::BLACK;

pub const OUTER_RADIUS: f32 = 14.0;
pub const OUTER_COLOR: Rgb = Rgb::BLACK;

pub const INNER_RADIUS: f32 = 7.0;
pub const INNER_COLOR: Rgb = Rgb::WHITE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc<T> {
  pub center: Point<T>,
  pub radius: f32,
  pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<T> {
  pub center: Point<T>,
}

impl<T: Copy> Marker<T> {
  pub fn new(center: Point<T>) -> Marker<T> {
    Marker { center }
  }

  /// Discs in paint order: outer ring first.
  pub fn discs(&self) -> [Disc<T>; 2] {
    [
      Disc {
        center: self.center,
        radius: OUTER_RADIUS,
        color: OUTER_COLOR,
      },
      Disc {
        center: self.center,
        radius: INNER_RADIUS,
        color: INNER_COLOR,
      },
    ]
  }
}

/// One marker per site, in insertion order.
pub fn markers<T: Copy>(sites: &[Site<T>]) -> impl Iterator<Item = Marker<T>> + '_ {
  sites.iter().map(|site| Marker::new(*site.position()))
}
