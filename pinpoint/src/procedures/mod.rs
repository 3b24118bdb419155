//! The procedures of the pipeline.
//!
//! - [Encoding](encode) a clause source as a weighted formula, for a MaxSAT solver.
//! - [Extracting](extract) the axioms of a module reported by a solver, with [collapsing](collapse) of equivalences.

pub mod collapse;
pub mod encode;
pub mod extract;
