// This module contains strategies for:
//  * points
//  * colors
//  * sites
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Rgb, Site};

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone + std::fmt::Debug,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary color

impl Arbitrary for Rgb {
  type Strategy = Mapped<[u8; 3], Rgb>;
  type Parameters = ();
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any::<[u8; 3]>().prop_map(|channels| Rgb::from(channels))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Sites

// Finite coordinates around a 200x200 canvas, including some off-canvas ones.
pub fn coord() -> impl Strategy<Value = f32> + Clone {
  -50.0_f32..250.0
}

pub fn any_site() -> impl Strategy<Value = Site<f32>> + Clone {
  (coord(), coord(), any::<Rgb>()).prop_map(|(x, y, color)| Site::new(Point::new([x, y]), color))
}

pub fn any_sites(len: Range<usize>) -> impl Strategy<Value = Vec<Site<f32>>> + Clone {
  vec(any_site(), len)
}

// Sites on integer coordinates make exact ties likely.
pub fn lattice_sites(len: Range<usize>) -> impl Strategy<Value = Vec<Site<f32>>> + Clone {
  vec(
    (0..20_i16, 0..20_i16, any::<Rgb>())
      .prop_map(|(x, y, color)| Site::new(Point::new([f32::from(x), f32::from(y)]), color)),
    len,
  )
}
