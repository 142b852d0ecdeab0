//! Single-point metaheuristic optimization over box-bounded continuous domains.
//!
//! Provides three single-solution trajectory search strategies for minimizing
//! a scalar objective over a box-constrained real vector domain:
//!
//! - **Hill Climbing (HC)**: strict-improvement acceptance with an adaptive
//!   perturbation radius that shrinks whenever a move is rejected.
//! - **Random Local Search (RLS)**: independent uniform re-sampling of the
//!   whole domain with strict-improvement acceptance — global exploration,
//!   no locality bias.
//! - **Simulated Annealing (SA)**: Metropolis acceptance of worsening moves
//!   under a geometrically cooled temperature, with a separately tracked
//!   incumbent best.
//!
//! # Architecture
//!
//! The [`domain`] module defines the box-constrained search domain
//! ([`domain::Bounds`]) and the two sampling primitives every strategy is
//! built from: uniform initialization and range-scaled neighbor
//! perturbation. The objective function is an external collaborator behind
//! the [`objective::Objective`] trait, implemented for free by any
//! `Fn(&[f64]) -> f64`. The three strategies share one internal search loop
//! and differ only in their proposal and acceptance policies; each exposes
//! a builder-style config, a runner, and a plain-data result carrying the
//! best point found plus run statistics.
//!
//! # Example
//!
//! ```
//! use boxopt::domain::Bounds;
//! use boxopt::sa::{SaConfig, SaRunner};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (-5.0, 5.0)]);
//! let config = SaConfig::default().with_seed(42);
//!
//! let result = SaRunner::run(&sphere, &bounds, &config);
//! assert!(bounds.contains(&result.best));
//! ```

pub mod domain;
mod driver;
pub mod hc;
pub mod objective;
pub mod rls;
pub mod sa;
