mod canvas;
mod color;
mod grid;
pub(crate) mod point;
mod site;

pub use canvas::{Canvas, CellOrigins};
pub use color::Rgb;
pub use grid::{Cell, Grid};
pub use point::Point;
pub use site::{Site, SiteId};
