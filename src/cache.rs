use num_traits::{AsPrimitive, Float};
use rand::Rng;

use crate::data::{Canvas, Grid, Point, Rgb, SiteId};
use crate::{Error, SiteDiagram};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
  sites: usize,
  canvas: Canvas,
}

/// A [`SiteDiagram`] that remembers its last rendered grid.
///
/// Sites are append-only and immutable, so the number of sites identifies the
/// site sequence. A render with the same site count and canvas returns the
/// remembered grid instead of sweeping again. The output is always identical
/// to [`SiteDiagram::render`].
#[derive(Debug, Clone)]
pub struct CachedDiagram<T = f32> {
  diagram: SiteDiagram<T>,
  last: Option<(CacheKey, Grid)>,
  sweeps: usize,
}

impl<T> Default for CachedDiagram<T> {
  fn default() -> Self {
    CachedDiagram::from(SiteDiagram::default())
  }
}

impl<T> From<SiteDiagram<T>> for CachedDiagram<T> {
  fn from(diagram: SiteDiagram<T>) -> Self {
    CachedDiagram {
      diagram,
      last: None,
      sweeps: 0,
    }
  }
}

impl<T> CachedDiagram<T> {
  pub fn new() -> CachedDiagram<T> {
    CachedDiagram::default()
  }

  pub fn add_site(&mut self, position: Point<T>, color: Rgb) -> SiteId {
    self.diagram.add_site(position, color)
  }

  pub fn add_random_site<R>(&mut self, position: Point<T>, rng: &mut R) -> SiteId
  where
    R: Rng + ?Sized,
  {
    self.diagram.add_random_site(position, rng)
  }

  pub fn diagram(&self) -> &SiteDiagram<T> {
    &self.diagram
  }

  /// Number of renders that had to sweep the canvas instead of reusing the
  /// remembered grid.
  pub fn sweeps(&self) -> usize {
    self.sweeps
  }

  pub fn into_inner(self) -> SiteDiagram<T> {
    self.diagram
  }
}

impl<T> CachedDiagram<T>
where
  T: Float + 'static,
  i32: AsPrimitive<T>,
{
  pub fn render(
    &mut self,
    canvas_width: i32,
    canvas_height: i32,
    cell_size: i32,
  ) -> Result<&Grid, Error> {
    let key = CacheKey {
      sites: self.diagram.len(),
      canvas: Canvas::new(canvas_width, canvas_height, cell_size)?,
    };
    if self.last.as_ref().map(|(last_key, _)| *last_key) == Some(key) {
      log::trace!("reusing grid for {} sites", key.sites);
    } else {
      self.last = None;
    }
    let diagram = &self.diagram;
    let sweeps = &mut self.sweeps;
    let (_, grid) = self.last.get_or_insert_with(|| {
      *sweeps += 1;
      (key, diagram.render_canvas(&key.canvas))
    });
    Ok(&*grid)
  }
}
