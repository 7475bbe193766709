//! Graph algorithms, implemented as `impl Graph<T>` blocks.
//!
//! Each public entry point owns the node state slots for the duration of the
//! call and hands them back unset.

mod acyclic;
mod degree;
mod distance;
mod eulerian;
mod reachability;

pub use acyclic::Ranking;
pub use degree::DegreeDistribution;
pub use distance::UNREACHABLE;
