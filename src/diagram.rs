use num_traits::{AsPrimitive, Float};
use rand::Rng;

use crate::algorithms::sweep;
use crate::data::{Canvas, Grid, Point, Rgb, Site, SiteId};
use crate::Error;

/// Cell size, in pixels, used by the drawing app.
pub const DEFAULT_CELL_SIZE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramState {
  /// No sites yet. Rendering produces an empty grid.
  Empty,
  /// At least one site. Rendering produces a full grid.
  Populated,
}

/// An append-only collection of colored sites that can be rendered into a
/// grid of nearest-site colors.
///
/// Sites are never removed or reordered; a site's [`SiteId`] is its position
/// in insertion order. Every call to [`SiteDiagram::render`] recomputes the
/// grid from scratch. See [`CachedDiagram`](crate::CachedDiagram) for a
/// memoizing wrapper.
///
/// The diagram holds no external resources and needs no teardown. Sharing it
/// between threads requires external synchronization such as a `Mutex`.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDiagram<T = f32> {
  sites: Vec<Site<T>>,
}

impl<T> Default for SiteDiagram<T> {
  fn default() -> Self {
    SiteDiagram { sites: Vec::new() }
  }
}

impl<T> SiteDiagram<T> {
  pub fn new() -> SiteDiagram<T> {
    SiteDiagram::default()
  }

  /// Appends a site. Always succeeds; positions are neither deduplicated nor
  /// checked against any canvas.
  pub fn add_site(&mut self, position: Point<T>, color: Rgb) -> SiteId {
    let id = SiteId(self.sites.len());
    self.sites.push(Site::new(position, color));
    id
  }

  /// Appends a site whose color is drawn from `rng`, one uniform sample per
  /// channel.
  pub fn add_random_site<R>(&mut self, position: Point<T>, rng: &mut R) -> SiteId
  where
    R: Rng + ?Sized,
  {
    let color = Rgb::random(rng);
    self.add_site(position, color)
  }

  pub fn sites(&self) -> &[Site<T>] {
    &self.sites
  }

  pub fn site(&self, id: SiteId) -> Option<&Site<T>> {
    self.sites.get(id.usize())
  }

  pub fn len(&self) -> usize {
    self.sites.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sites.is_empty()
  }

  pub fn state(&self) -> DiagramState {
    if self.sites.is_empty() {
      DiagramState::Empty
    } else {
      DiagramState::Populated
    }
  }
}

impl<T> SiteDiagram<T>
where
  T: Float + 'static,
  i32: AsPrimitive<T>,
{
  /// Colors every `cell_size` × `cell_size` cell of a `canvas_width` ×
  /// `canvas_height` canvas with the color of the site nearest to the cell's
  /// top-left corner.
  ///
  /// Returns [`Error::InvalidDimensions`] if any argument is not strictly
  /// positive, and an empty grid if the diagram has no sites.
  ///
  /// # Time complexity
  /// $O(c \cdot n)$ for $c$ cells and $n$ sites.
  pub fn render(
    &self,
    canvas_width: i32,
    canvas_height: i32,
    cell_size: i32,
  ) -> Result<Grid, Error> {
    let canvas = Canvas::new(canvas_width, canvas_height, cell_size).map_err(|err| {
      log::warn!(
        "refusing to render {}x{} canvas with cell size {}",
        canvas_width,
        canvas_height,
        cell_size
      );
      err
    })?;
    Ok(self.render_canvas(&canvas))
  }

  /// Same as [`SiteDiagram::render`] for an already validated canvas.
  pub fn render_canvas(&self, canvas: &Canvas) -> Grid {
    log::debug!(
      "rendering {} cells against {} sites",
      canvas.cell_count(),
      self.sites.len()
    );
    sweep(&self.sites, canvas)
  }
}

impl<T> Extend<Site<T>> for SiteDiagram<T> {
  fn extend<I: IntoIterator<Item = Site<T>>>(&mut self, iter: I) {
    self.sites.extend(iter)
  }
}

impl<T> FromIterator<Site<T>> for SiteDiagram<T> {
  fn from_iter<I: IntoIterator<Item = Site<T>>>(iter: I) -> Self {
    SiteDiagram {
      sites: iter.into_iter().collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{any_sites, lattice_sites};

  use claims::{assert_err_eq, assert_ok};
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn starts_empty() {
    let diagram: SiteDiagram = SiteDiagram::new();
    assert_eq!(diagram.state(), DiagramState::Empty);
    assert!(diagram.is_empty());
    assert_eq!(diagram.len(), 0);
  }

  #[test]
  fn first_site_populates() {
    let mut diagram = SiteDiagram::new();
    let id = diagram.add_site(Point::new([1.0, 2.0]), Rgb::RED);
    assert_eq!(id, SiteId(0));
    assert_eq!(diagram.state(), DiagramState::Populated);
    assert_eq!(diagram.site(id).map(Site::color), Some(Rgb::RED));
    assert_eq!(diagram.site(SiteId(1)), None);
  }

  #[test]
  fn empty_render_is_not_an_error() {
    let diagram: SiteDiagram = SiteDiagram::new();
    let grid = assert_ok!(diagram.render(100, 100, DEFAULT_CELL_SIZE));
    assert!(grid.is_empty());
  }

  #[test]
  fn invalid_dimensions() {
    let mut diagram = SiteDiagram::new();
    diagram.add_site(Point::new([10.0, 10.0]), Rgb::GREEN);
    assert_err_eq!(diagram.render(0, 100, 3), Error::InvalidDimensions);
    assert_err_eq!(diagram.render(100, 0, 3), Error::InvalidDimensions);
    assert_err_eq!(diagram.render(100, 100, 0), Error::InvalidDimensions);
  }

  #[test]
  fn invalid_dimensions_checked_before_emptiness() {
    let diagram: SiteDiagram = SiteDiagram::new();
    assert_err_eq!(diagram.render(-1, 100, 3), Error::InvalidDimensions);
  }

  #[test]
  fn tie_break_prefers_earliest() {
    let mut diagram = SiteDiagram::new();
    diagram.add_site(Point::new([0.0, 0.0]), Rgb::RED);
    diagram.add_site(Point::new([10.0, 0.0]), Rgb::BLUE);
    let grid = diagram.render(10, 1, 5).unwrap();
    assert_eq!(grid.color_at(Point::new([5, 0])), Some(Rgb::RED));
  }

  #[test]
  fn random_sites_follow_the_rng() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut diagram = SiteDiagram::new();
    for i in 0..5 {
      diagram.add_random_site(Point::new([i as f32, 0.0]), &mut rng);
    }

    let mut rng = SmallRng::seed_from_u64(42);
    let expected: Vec<Rgb> = (0..5).map(|_| Rgb::random(&mut rng)).collect();
    let colors: Vec<Rgb> = diagram.sites().iter().map(Site::color).collect();
    assert_eq!(colors, expected);
  }

  #[test]
  fn new_site_can_recolor_everything() {
    let mut diagram = SiteDiagram::new();
    diagram.add_site(Point::new([1000.0, 1000.0]), Rgb::RED);
    let before = diagram.render(30, 30, 3).unwrap();
    assert!(before.iter().all(|cell| cell.color == Rgb::RED));

    diagram.add_site(Point::new([15.0, 15.0]), Rgb::BLUE);
    let after = diagram.render(30, 30, 3).unwrap();
    assert!(after.iter().all(|cell| cell.color == Rgb::BLUE));
  }

  #[test]
  fn collects_from_sites() {
    let diagram: SiteDiagram = vec![
      Site::new(Point::new([0.0, 0.0]), Rgb::RED),
      Site::new(Point::new([5.0, 5.0]), Rgb::BLUE),
    ]
    .into_iter()
    .collect();
    assert_eq!(diagram.len(), 2);
    assert_eq!(diagram.sites()[1].color(), Rgb::BLUE);
  }

  #[proptest]
  fn growth_is_append_only(#[strategy(any_sites(0..20))] sites: Vec<Site<f32>>) {
    let mut diagram = SiteDiagram::new();
    for (n, site) in sites.iter().enumerate() {
      let snapshot = diagram.sites().to_vec();
      let id = diagram.add_site(*site.position(), site.color());
      assert_eq!(id, SiteId(n));
      assert_eq!(diagram.len(), n + 1);
      assert_eq!(&diagram.sites()[..n], &snapshot[..]);
    }
    assert_eq!(diagram.sites(), &sites[..]);
  }

  #[proptest]
  fn render_is_deterministic(
    #[strategy(lattice_sites(1..10))] sites: Vec<Site<f32>>,
    #[strategy(1..40_i32)] width: i32,
    #[strategy(1..40_i32)] height: i32,
    #[strategy(1..6_i32)] cell_size: i32,
  ) {
    let diagram: SiteDiagram = sites.into_iter().collect();
    let first = diagram.render(width, height, cell_size).unwrap();
    let second = diagram.render(width, height, cell_size).unwrap();
    assert_eq!(first, second);
  }
}
