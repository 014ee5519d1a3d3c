use num_traits::{AsPrimitive, Float};

use crate::data::{Canvas, Cell, Grid, Point, Site, SiteId};

/// Index of the site closest to `point`.
///
/// Distances are compared as squared Euclidean distances. When several sites
/// are equally close the earliest one wins: a later site only replaces the
/// running minimum if it is strictly closer. A NaN distance never compares
/// smaller, so a site with NaN coordinates can only win by being first.
///
/// Returns `None` if `sites` is empty.
///
/// # Time complexity
/// $O(n)$
///
/// # Examples
///
/// ```
/// use tapvoronoi::algorithms::nearest_site;
/// use tapvoronoi::data::{Point, Rgb, Site, SiteId};
///
/// let sites = [
///   Site::new(Point::new([0.0, 0.0]), Rgb::RED),
///   Site::new(Point::new([10.0, 0.0]), Rgb::BLUE),
/// ];
/// assert_eq!(nearest_site(&sites, &Point::new([5.0, 0.0])), Some(SiteId(0)));
/// assert_eq!(nearest_site(&sites, &Point::new([6.0, 0.0])), Some(SiteId(1)));
/// ```
pub fn nearest_site<T>(sites: &[Site<T>], point: &Point<T>) -> Option<SiteId>
where
  T: Float,
{
  let (first, rest) = sites.split_first()?;
  let mut closest = 0;
  let mut closest_dist = first.position().squared_euclidean_distance(point);
  for (offset, site) in rest.iter().enumerate() {
    let dist = site.position().squared_euclidean_distance(point);
    if dist < closest_dist {
      closest = offset + 1;
      closest_dist = dist;
    }
  }
  Some(SiteId(closest))
}

/// Colors every cell of `canvas` with its nearest site.
///
/// Cells are visited column by column starting at the origin. Each cell is
/// represented by its top-left corner. An empty `sites` slice yields an empty
/// grid.
///
/// # Time complexity
/// $O(c \cdot n)$ where $c$ is the number of cells and $n$ the number of sites.
/// # Space complexity
/// $O(c)$
pub fn sweep<T>(sites: &[Site<T>], canvas: &Canvas) -> Grid
where
  T: Float + 'static,
  i32: AsPrimitive<T>,
{
  let cells: Option<Vec<Cell>> = canvas
    .cell_origins()
    .map(|origin| {
      let corner: Point<T> = origin.cast(<i32 as AsPrimitive<T>>::as_);
      nearest_site(sites, &corner).map(|id| Cell {
        origin,
        color: sites[id.usize()].color(),
      })
    })
    .collect();
  match cells {
    Some(cells) => Grid::new(*canvas, cells),
    None => Grid::empty(*canvas),
  }
}
