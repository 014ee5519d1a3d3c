pub mod nearest_site;

#[doc(inline)]
pub use nearest_site::naive::{nearest_site, sweep};
