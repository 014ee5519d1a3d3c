use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// An opaque color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const BLACK: Rgb = Rgb::new(0, 0, 0);
  pub const WHITE: Rgb = Rgb::new(255, 255, 255);
  pub const RED: Rgb = Rgb::new(255, 0, 0);
  pub const GREEN: Rgb = Rgb::new(0, 255, 0);
  pub const BLUE: Rgb = Rgb::new(0, 0, 255);

  pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
  }

  /// Samples a site color: three independent uniform draws from `0..255`.
  /// The upper bound is exclusive, so a channel never reaches 255.
  pub fn random<R>(rng: &mut R) -> Rgb
  where
    R: Rng + ?Sized,
  {
    rng.gen()
  }

  /// Packs the color as opaque `0xAARRGGBB`.
  pub fn to_argb(self) -> u32 {
    0xFF00_0000 | u32::from(self.r) << 16 | u32::from(self.g) << 8 | u32::from(self.b)
  }

  pub const fn channels(self) -> [u8; 3] {
    [self.r, self.g, self.b]
  }
}

// Random sampling.
impl Distribution<Rgb> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
    let r = rng.gen_range(0..255);
    let g = rng.gen_range(0..255);
    let b = rng.gen_range(0..255);
    Rgb { r, g, b }
  }
}

impl From<[u8; 3]> for Rgb {
  fn from([r, g, b]: [u8; 3]) -> Rgb {
    Rgb { r, g, b }
  }
}
