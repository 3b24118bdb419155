//! The abstract elements of an encoding or an extraction, and their representation.
//!
//! - [Literals](literal), [clauses](clause), [formulas](cnf), and [weighted formulas](wcnf), for the encoder.
//! - [Axioms](axiom) and [index maps](index_map), for the extractor.

pub mod axiom;
pub mod clause;
pub mod cnf;
pub mod index_map;
pub mod literal;
pub mod wcnf;
