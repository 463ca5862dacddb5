//! Simulated-annealing refinement.
//!
//! A single-solution trajectory search over feasible allocations.
//! Worsening moves are accepted with a probability that decays with
//! temperature, letting the search climb out of the greedy
//! constructor's local optimum; best-so-far tracking guarantees the
//! returned allocation is never worse than the input.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
