//! Random Local Search (RLS).
//!
//! A single-solution search whose candidates are drawn uniformly over the
//! whole domain rather than from a neighborhood of the current point.
//! Exploration is global and memoryless; convergence speed depends entirely
//! on sampling luck within the iteration budget.
//!
//! # References
//!
//! - Brooks (1958), "A Discussion of Random Methods for Seeking Maxima"
//! - Hoos & Stützle (2004), *Stochastic Local Search: Foundations and
//!   Applications*

mod config;
mod runner;

pub use config::RlsConfig;
pub use runner::{RlsResult, RlsRunner};
