//! Search domain: box bounds and point sampling.
//!
//! A domain is an ordered sequence of per-dimension closed intervals
//! ([`Bounds`]). Every point a strategy ever produces — initial samples and
//! perturbed neighbors alike — lies inside these intervals.

mod bounds;
mod sample;

pub use bounds::{Bound, Bounds};
pub use sample::{random_neighbor, sample_uniform};
